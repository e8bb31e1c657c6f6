//! Union profile: IEMOCAP and MELD merged under a common schema.
//!
//! The merge step renames columns, maps every source emotion onto the fixed
//! eleven-label vocabulary, and attaches cleaned reference and ASR
//! transcriptions. Those semantics live in the preprocessing pipeline; this
//! profile only validates the merged output and its train/validation/test
//! partition.

use crate::check::{self, CheckKind, Expectation, Report};
use crate::corpus::{iemocap, meld, schema_expectations, SchemaField};
use crate::frame::{DType, Frame};

/// Rows in the merged table
pub const ROWS: usize = 20_157;
/// Columns in the merged table and each split
pub const COLUMNS: usize = 11;
/// Rows in the train split
pub const TRAIN_ROWS: usize = 16_125;
/// Rows in the validation split
pub const VALIDATION_ROWS: usize = 2_016;
/// Rows in the test split
pub const TEST_ROWS: usize = 2_016;

/// The fixed emotion vocabulary, sorted. MELD's seven labels map into it
/// (`joy` becomes `happiness`); IEMOCAP contributes the remainder.
pub const EMOTIONS: [&str; 11] = [
    "anger",
    "disgust",
    "excited",
    "fear",
    "frustration",
    "happiness",
    "neutral",
    "other",
    "sadness",
    "surprise",
    "unknown",
];

/// The emotion-number mapping: a label's index in the sorted vocabulary
pub fn emotion_num(label: &str) -> Option<i64> {
    EMOTIONS
        .iter()
        .position(|emotion| *emotion == label)
        .map(|index| index as i64)
}

/// The merged table, its two sources, and its three splits
#[derive(Debug)]
pub struct UnionCorpus {
    /// IEMOCAP source manifest
    pub iemocap: Frame,
    /// MELD source manifest (combined over its splits)
    pub meld: Frame,
    /// The merged table
    pub combined: Frame,
    /// Train split
    pub train: Frame,
    /// Validation split
    pub validation: Frame,
    /// Test split
    pub test: Frame,
}

/// Expected schema of the merged table and each split
pub fn schema() -> Vec<SchemaField> {
    vec![
        ("filename", DType::Text),
        ("filepath", DType::Text),
        ("dataset", DType::Text),
        ("emotion_label", DType::Text),
        ("emotion_num", DType::Int64),
        ("text", DType::Text),
        ("clean_text", DType::Text),
        ("asr_text", DType::Text),
        ("asr_clean_text", DType::Text),
        ("split", DType::Text),
        ("speaker", DType::Text),
    ]
}

/// Expectations on the merged table
pub fn combined_expectations() -> Vec<Expectation> {
    let mut expectations = vec![
        Expectation::NonEmpty,
        Expectation::RowCount(ROWS),
        Expectation::ColumnCount(COLUMNS),
    ];
    expectations.extend(schema_expectations(&schema()));
    expectations.extend([
        Expectation::vocabulary("emotion_label", EMOTIONS),
        Expectation::clean_text("clean_text"),
        Expectation::clean_text("asr_clean_text"),
        Expectation::NoNulls,
        Expectation::unique_key(["filename"]),
    ]);
    expectations
}

/// Verify the merged table, its sources, and its splits
pub fn verify(corpus: &UnionCorpus) -> Report {
    let mut report = Report::new("union");

    // source tables only need their row counts re-checked here; their own
    // profiles cover the rest
    report.merge(check::run(
        "union/iemocap",
        &corpus.iemocap,
        &[Expectation::RowCount(iemocap::ROWS)],
    ));
    report.merge(check::run(
        "union/meld",
        &corpus.meld,
        &[Expectation::RowCount(meld::TOTAL_ROWS)],
    ));

    report.merge(check::run(
        "union/combined",
        &corpus.combined,
        &combined_expectations(),
    ));

    let splits: [(&str, &Frame, usize); 3] = [
        ("union/train", &corpus.train, TRAIN_ROWS),
        ("union/validation", &corpus.validation, VALIDATION_ROWS),
        ("union/test", &corpus.test, TEST_ROWS),
    ];
    for (name, frame, rows) in splits {
        report.merge(check::run(
            name,
            frame,
            &[
                Expectation::RowCount(rows),
                Expectation::ColumnCount(COLUMNS),
            ],
        ));
    }

    // the splits must partition the merged table
    report.count_check();
    let split_total = corpus.train.n_rows() + corpus.validation.n_rows() + corpus.test.n_rows();
    if split_total != corpus.combined.n_rows() {
        report.violation(
            CheckKind::RowCount,
            "union",
            format!(
                "split rows sum to {}, combined table has {}",
                split_total,
                corpus.combined.n_rows()
            ),
        );
    }

    report
}
