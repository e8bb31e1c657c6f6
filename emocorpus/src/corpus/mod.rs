//! Corpus profiles: the expected shape of each preprocessed dataset.
//!
//! Each submodule encodes one corpus as named constants (row counts, column
//! counts, categorical cardinalities), an expected schema, and a `verify`
//! entry point that evaluates every structural expectation and returns a
//! [`Report`](crate::Report). The profiles validate the *output* of the
//! preprocessing pipeline; they do not construct it.

pub mod iemocap;
pub mod meld;
pub mod union;

use crate::check::Expectation;
use crate::frame::DType;

/// One expected column: name and dtype
pub type SchemaField = (&'static str, DType);

/// Expectations asserting that every schema column exists with its dtype
pub(crate) fn schema_expectations(schema: &[SchemaField]) -> Vec<Expectation> {
    let mut expectations =
        vec![Expectation::has_columns(schema.iter().map(|(name, _)| *name))];
    expectations.extend(
        schema
            .iter()
            .map(|(name, dtype)| Expectation::dtype(*name, *dtype)),
    );
    expectations
}
