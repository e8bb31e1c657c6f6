//! IEMOCAP profile: one row per utterance, five recording sessions.

use std::path::Path;

use crate::audio;
use crate::check::{self, Expectation, Report};
use crate::corpus::{schema_expectations, SchemaField};
use crate::frame::{DType, Frame};

/// Total number of utterances
pub const ROWS: usize = 10_039;
/// Number of manifest columns
pub const COLUMNS: usize = 9;
/// Number of emotion categories (including `other` and `unknown`)
pub const EMOTION_KINDS: usize = 11;
/// Number of recording sessions
pub const SESSIONS: usize = 5;
/// Number of speaker genders
pub const GENDERS: usize = 2;
/// Number of elicitation methods (scripted, improvised)
pub const METHODS: usize = 2;

/// Table name used in violations
const TABLE: &str = "iemocap";

/// Expected manifest schema
pub fn schema() -> Vec<SchemaField> {
    vec![
        ("filename", DType::Text),
        ("filepath", DType::Text),
        ("emotion", DType::Text),
        ("transcription", DType::Text),
        ("dataset", DType::Text),
        ("emotion_label", DType::Text),
        ("gender", DType::Text),
        ("method", DType::Text),
        ("session", DType::Int64),
    ]
}

/// Every structural expectation on the IEMOCAP manifest
pub fn expectations() -> Vec<Expectation> {
    let mut expectations = vec![
        Expectation::NonEmpty,
        Expectation::RowCount(ROWS),
        Expectation::ColumnCount(COLUMNS),
    ];
    expectations.extend(schema_expectations(&schema()));
    expectations.extend([
        Expectation::cardinality("emotion", EMOTION_KINDS),
        Expectation::cardinality("session", SESSIONS),
        Expectation::cardinality("gender", GENDERS),
        Expectation::cardinality("method", METHODS),
        Expectation::NoNulls,
        Expectation::unique_key(["filename"]),
    ]);
    expectations
}

/// Verify an IEMOCAP manifest
pub fn verify(frame: &Frame) -> Report {
    check::run(TABLE, frame, &expectations())
}

/// Verify an IEMOCAP manifest plus the existence of its dataset folder
pub fn verify_with_audio(frame: &Frame, folder: &Path) -> Report {
    let mut report = verify(frame);
    audio::check_folder(&mut report, TABLE, folder);
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_are_consistent() {
        assert_eq!(schema().len(), COLUMNS);
        // the session column is the only integer column
        let ints = schema()
            .iter()
            .filter(|(_, d)| *d == DType::Int64)
            .count();
        assert_eq!(ints, 1);
    }

    #[test]
    fn expectations_include_all_cardinalities() {
        let cardinalities = expectations()
            .iter()
            .filter(|e| matches!(e, Expectation::Cardinality { .. }))
            .count();
        assert_eq!(cardinalities, 4);
    }
}
