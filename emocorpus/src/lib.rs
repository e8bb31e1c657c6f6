//! # EmoCorpus - Speech-Emotion Dataset Integrity
//!
//! Structural-integrity checks for the preprocessed tabular datasets built
//! from two speech-emotion corpora (IEMOCAP, MELD) and the merged "union"
//! dataset combining both.
//!
//! The preprocessing pipeline lives elsewhere; this crate validates its
//! output: row and column counts, categorical cardinalities, absence of
//! nulls, column dtypes, filename uniqueness, cleanliness of cleaned text
//! fields, split consistency, and audio file counts on disk.
//!
//! ## Example
//!
//! ```no_run
//! use emocorpus::{corpus::iemocap, io};
//!
//! # fn main() -> Result<(), emocorpus::Error> {
//! let frame = io::read_csv("iemocap.csv")?;
//! let report = iemocap::verify(&frame);
//!
//! for violation in &report.violations {
//!     eprintln!("{}", violation);
//! }
//! assert!(report.is_ok());
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod audio;
pub mod check;
pub mod corpus;
pub mod error;
pub mod frame;
pub mod io;
pub mod text;

// Re-export commonly used types
pub use check::{CheckKind, Expectation, Report, Violation};
pub use error::{Error, Result};
pub use frame::{Column, DType, Frame, Value};
