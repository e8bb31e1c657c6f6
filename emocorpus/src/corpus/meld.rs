//! MELD profile: train/dev/test splits plus the combined table.
//!
//! The raw MELD CSVs carry eleven columns; preprocessing appends `filename`
//! to each split and additionally `Data` (the split marker) and `filepath`
//! when the splits are concatenated into the combined table.

use std::path::Path;

use crate::audio;
use crate::check::{self, Expectation, Report};
use crate::corpus::{schema_expectations, SchemaField};
use crate::frame::{DType, Frame};

/// Rows in the train split
pub const TRAIN_ROWS: usize = 9_988;
/// Rows in the dev split
pub const DEV_ROWS: usize = 1_108;
/// Rows in the test split
pub const TEST_ROWS: usize = 2_610;
/// Rows in the combined table (sum of the three splits)
pub const TOTAL_ROWS: usize = TRAIN_ROWS + DEV_ROWS + TEST_ROWS;
/// Columns in each split table
pub const SPLIT_COLUMNS: usize = 12;
/// Number of emotion categories
pub const EMOTION_KINDS: usize = 7;
/// Number of sentiment categories
pub const SENTIMENT_KINDS: usize = 3;
/// Number of values the `Data` split marker takes
pub const DATA_SPLITS: usize = 3;

/// The three MELD splits and the combined table
#[derive(Debug)]
pub struct MeldCorpus {
    /// Train split (12 columns)
    pub train: Frame,
    /// Dev split (12 columns)
    pub dev: Frame,
    /// Test split (12 columns)
    pub test: Frame,
    /// Concatenation of the splits, with `Data` and `filepath` added
    pub combined: Frame,
}

/// Expected schema of each split table
pub fn split_schema() -> Vec<SchemaField> {
    vec![
        ("Sr No.", DType::Int64),
        ("Utterance", DType::Text),
        ("Speaker", DType::Text),
        ("Emotion", DType::Text),
        ("Sentiment", DType::Text),
        ("Dialogue_ID", DType::Int64),
        ("Utterance_ID", DType::Int64),
        ("Season", DType::Int64),
        ("Episode", DType::Int64),
        ("StartTime", DType::Text),
        ("EndTime", DType::Text),
        ("filename", DType::Text),
    ]
}

/// Expected schema of the combined table
pub fn combined_schema() -> Vec<SchemaField> {
    let mut schema = split_schema();
    schema.push(("Data", DType::Text));
    schema.push(("filepath", DType::Text));
    schema
}

/// Expectations on the combined table
pub fn combined_expectations() -> Vec<Expectation> {
    let mut expectations = vec![Expectation::NonEmpty, Expectation::RowCount(TOTAL_ROWS)];
    expectations.extend(schema_expectations(&combined_schema()));
    expectations.extend([
        Expectation::cardinality("Emotion", EMOTION_KINDS),
        Expectation::cardinality("Sentiment", SENTIMENT_KINDS),
        Expectation::cardinality("Data", DATA_SPLITS),
        Expectation::unique_key(["Data", "filename"]),
        Expectation::unique_key(["filename"]),
        Expectation::NoNulls,
    ]);
    expectations
}

/// Verify the three splits and the combined table
pub fn verify(corpus: &MeldCorpus) -> Report {
    let mut report = Report::new("meld");

    let splits: [(&str, &Frame, usize); 3] = [
        ("meld/train", &corpus.train, TRAIN_ROWS),
        ("meld/dev", &corpus.dev, DEV_ROWS),
        ("meld/test", &corpus.test, TEST_ROWS),
    ];
    for (name, frame, rows) in splits {
        report.merge(check::run(
            name,
            frame,
            &[
                Expectation::NonEmpty,
                Expectation::RowCount(rows),
                Expectation::ColumnCount(SPLIT_COLUMNS),
            ],
        ));
    }

    report.merge(check::run(
        "meld/combined",
        &corpus.combined,
        &combined_expectations(),
    ));
    report
}

/// Verify the corpus plus its audio directory: the folder must exist and
/// hold exactly one `.wav` file per combined row
pub fn verify_with_audio(corpus: &MeldCorpus, folder: &Path) -> Report {
    let mut report = verify(corpus);
    audio::check_folder(&mut report, "meld", folder);
    audio::check_audio_count(&mut report, "meld", corpus.combined.n_rows(), folder);
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_rows_sum_to_total() {
        assert_eq!(TRAIN_ROWS + DEV_ROWS + TEST_ROWS, TOTAL_ROWS);
        assert_eq!(TOTAL_ROWS, 13_706);
    }

    #[test]
    fn combined_schema_extends_split_schema() {
        let split = split_schema();
        let combined = combined_schema();
        assert_eq!(combined.len(), split.len() + 2);
        assert!(combined.iter().any(|(name, _)| *name == "Data"));
        assert!(combined.iter().any(|(name, _)| *name == "filepath"));
    }

    #[test]
    fn combined_expectations_pin_both_keys() {
        let keys = combined_expectations()
            .iter()
            .filter(|e| matches!(e, Expectation::UniqueKey(_)))
            .count();
        assert_eq!(keys, 2);
    }
}
