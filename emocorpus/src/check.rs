//! Declarative structural expectations and per-assertion reporting.
//!
//! An [`Expectation`] is one assertion about a table. [`run`] evaluates a
//! list of them against a [`Frame`] and collects one [`Violation`] per failed
//! assertion. Failures are independent: a missing column fails the checks
//! that reference it without aborting the rest.

use std::fmt;

use crate::frame::{DType, Frame};
use crate::text::{self, TextDefect};

/// A single structural assertion about a table
#[derive(Debug, Clone)]
pub enum Expectation {
    /// The table has exactly this many rows
    RowCount(usize),
    /// The table has exactly this many columns
    ColumnCount(usize),
    /// The table has at least one row
    NonEmpty,
    /// Every named column is present
    HasColumns(Vec<String>),
    /// The named column has this dtype in every non-null cell
    DType {
        /// Column to inspect
        column: String,
        /// Expected dtype
        dtype: DType,
    },
    /// The named column has exactly this many distinct non-null values
    Cardinality {
        /// Column to inspect
        column: String,
        /// Expected number of distinct values
        expected: usize,
    },
    /// No cell anywhere in the table is null
    NoNulls,
    /// The named columns together form a unique key
    UniqueKey(Vec<String>),
    /// Every text cell in the named column is free of defects
    CleanText(String),
    /// The distinct values of the named column equal this vocabulary exactly
    Vocabulary {
        /// Column to inspect
        column: String,
        /// Allowed values (order-insensitive)
        allowed: Vec<String>,
    },
}

impl Expectation {
    /// Expect every column named in `names` to be present
    pub fn has_columns<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        Self::HasColumns(names.into_iter().map(Into::into).collect())
    }

    /// Expect `column` to hold values of `dtype`
    pub fn dtype(column: impl Into<String>, dtype: DType) -> Self {
        Self::DType {
            column: column.into(),
            dtype,
        }
    }

    /// Expect `column` to have exactly `expected` distinct values
    pub fn cardinality(column: impl Into<String>, expected: usize) -> Self {
        Self::Cardinality {
            column: column.into(),
            expected,
        }
    }

    /// Expect the named columns to uniquely identify every row
    pub fn unique_key<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Self {
        Self::UniqueKey(columns.into_iter().map(Into::into).collect())
    }

    /// Expect every cell of `column` to pass the text cleanliness checks
    pub fn clean_text(column: impl Into<String>) -> Self {
        Self::CleanText(column.into())
    }

    /// Expect the distinct values of `column` to equal `allowed` exactly
    pub fn vocabulary<S: Into<String>>(
        column: impl Into<String>,
        allowed: impl IntoIterator<Item = S>,
    ) -> Self {
        Self::Vocabulary {
            column: column.into(),
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }
}

/// The category of a failed check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CheckKind {
    /// Row count mismatch
    RowCount,
    /// Column count mismatch
    ColumnCount,
    /// Table unexpectedly empty
    Empty,
    /// Referenced column does not exist
    MissingColumn,
    /// Column dtype mismatch (or mixed dtypes)
    DType,
    /// Distinct-value count mismatch
    Cardinality,
    /// Unexpected null values
    Nulls,
    /// Key columns contain duplicate tuples
    DuplicateKey,
    /// Cleaned text contains control characters, URLs, or double spaces
    DirtyText,
    /// Categorical values differ from the expected vocabulary
    Vocabulary,
    /// Dataset folder missing
    MissingFolder,
    /// Audio file count does not match row count
    AudioCount,
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CheckKind::RowCount => "row-count",
            CheckKind::ColumnCount => "column-count",
            CheckKind::Empty => "empty",
            CheckKind::MissingColumn => "missing-column",
            CheckKind::DType => "dtype",
            CheckKind::Cardinality => "cardinality",
            CheckKind::Nulls => "nulls",
            CheckKind::DuplicateKey => "duplicate-key",
            CheckKind::DirtyText => "dirty-text",
            CheckKind::Vocabulary => "vocabulary",
            CheckKind::MissingFolder => "missing-folder",
            CheckKind::AudioCount => "audio-count",
        };
        write!(f, "{}", name)
    }
}

/// One failed assertion, with a description of the violated expectation
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Violation {
    /// Category of the failed check
    pub kind: CheckKind,
    /// Name of the table the check ran against
    pub table: String,
    /// Expected vs. actual, human readable
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.kind, self.table, self.message)
    }
}

/// The outcome of verifying one corpus (or one table)
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Report {
    name: String,
    checks_run: usize,
    /// Failed assertions
    pub violations: Vec<Violation>,
    /// Non-fatal observations
    pub warnings: Vec<String>,
}

impl Report {
    /// Create an empty report for the named subject
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            checks_run: 0,
            violations: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Subject of this report
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of assertions evaluated
    pub fn checks_run(&self) -> usize {
        self.checks_run
    }

    /// True when every assertion passed
    pub fn is_ok(&self) -> bool {
        self.violations.is_empty()
    }

    /// Record a failed assertion
    pub fn violation(&mut self, kind: CheckKind, table: &str, message: impl Into<String>) {
        self.violations.push(Violation {
            kind,
            table: table.to_string(),
            message: message.into(),
        });
    }

    /// Record a non-fatal observation
    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Note that one more assertion was evaluated
    pub fn count_check(&mut self) {
        self.checks_run += 1;
    }

    /// Fold another report's findings into this one
    pub fn merge(&mut self, other: Report) {
        self.checks_run += other.checks_run;
        self.violations.extend(other.violations);
        self.warnings.extend(other.warnings);
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}: {} checks, {} violations, {} warnings",
            self.name,
            self.checks_run,
            self.violations.len(),
            self.warnings.len()
        )?;
        for violation in &self.violations {
            writeln!(f, "  ✗ {}", violation)?;
        }
        for warning in &self.warnings {
            writeln!(f, "  ⚠ {}", warning)?;
        }
        Ok(())
    }
}

/// Evaluate `expectations` against `frame`, reporting each failure
pub fn run(table: &str, frame: &Frame, expectations: &[Expectation]) -> Report {
    let mut report = Report::new(table);
    for expectation in expectations {
        report.count_check();
        apply(table, frame, expectation, &mut report);
    }
    log::debug!(
        "{}: ran {} checks, {} violations",
        table,
        report.checks_run(),
        report.violations.len()
    );
    report
}

fn apply(table: &str, frame: &Frame, expectation: &Expectation, report: &mut Report) {
    match expectation {
        Expectation::RowCount(expected) => {
            if frame.n_rows() != *expected {
                report.violation(
                    CheckKind::RowCount,
                    table,
                    format!("row count is {}, expected {}", frame.n_rows(), expected),
                );
            }
        }
        Expectation::ColumnCount(expected) => {
            if frame.n_cols() != *expected {
                report.violation(
                    CheckKind::ColumnCount,
                    table,
                    format!("column count is {}, expected {}", frame.n_cols(), expected),
                );
            }
        }
        Expectation::NonEmpty => {
            if frame.is_empty() {
                report.violation(CheckKind::Empty, table, "table has no rows");
            }
        }
        Expectation::HasColumns(names) => {
            for name in names {
                if frame.column(name).is_none() {
                    report.violation(
                        CheckKind::MissingColumn,
                        table,
                        format!("missing column '{}'", name),
                    );
                }
            }
        }
        Expectation::DType { column, dtype } => {
            let Some(col) = frame.column(column) else {
                report.violation(
                    CheckKind::MissingColumn,
                    table,
                    format!("missing column '{}'", column),
                );
                return;
            };
            if col.dtype() != Some(*dtype) {
                let actual = col
                    .dtype()
                    .map_or_else(|| "indeterminate".to_string(), |d| d.to_string());
                report.violation(
                    CheckKind::DType,
                    table,
                    format!("column '{}' has dtype {}, expected {}", column, actual, dtype),
                );
            }
        }
        Expectation::Cardinality { column, expected } => {
            let Some(col) = frame.column(column) else {
                report.violation(
                    CheckKind::MissingColumn,
                    table,
                    format!("missing column '{}'", column),
                );
                return;
            };
            let actual = col.unique_count();
            if actual != *expected {
                report.violation(
                    CheckKind::Cardinality,
                    table,
                    format!(
                        "column '{}' has {} distinct values, expected {}",
                        column, actual, expected
                    ),
                );
            }
        }
        Expectation::NoNulls => {
            let total = frame.null_count();
            if total > 0 {
                let breakdown: Vec<String> = frame
                    .columns()
                    .iter()
                    .filter(|c| c.null_count() > 0)
                    .map(|c| format!("{} ({})", c.name(), c.null_count()))
                    .collect();
                report.violation(
                    CheckKind::Nulls,
                    table,
                    format!("found {} null values in: {}", total, breakdown.join(", ")),
                );
            }
        }
        Expectation::UniqueKey(columns) => {
            let key: Vec<&str> = columns.iter().map(String::as_str).collect();
            match frame.duplicate_key_count(&key) {
                Ok(0) => {}
                Ok(duplicates) => {
                    report.violation(
                        CheckKind::DuplicateKey,
                        table,
                        format!("key ({}) repeats in {} rows", key.join(", "), duplicates),
                    );
                }
                Err(e) => {
                    report.violation(CheckKind::MissingColumn, table, e.to_string());
                }
            }
        }
        Expectation::CleanText(column) => {
            let Some(col) = frame.column(column) else {
                report.violation(
                    CheckKind::MissingColumn,
                    table,
                    format!("missing column '{}'", column),
                );
                return;
            };
            let mut kinds: Vec<TextDefect> = Vec::new();
            let mut dirty_rows = 0;
            for cell in col.iter_text().flatten() {
                let found = text::defects(cell);
                if found.is_empty() {
                    continue;
                }
                dirty_rows += 1;
                for defect in found {
                    if !kinds.contains(&defect) {
                        kinds.push(defect);
                    }
                }
            }
            if dirty_rows > 0 {
                let names: Vec<String> = kinds.iter().map(ToString::to_string).collect();
                report.violation(
                    CheckKind::DirtyText,
                    table,
                    format!(
                        "column '{}' has {} unclean cells ({})",
                        column,
                        dirty_rows,
                        names.join(", ")
                    ),
                );
            }
        }
        Expectation::Vocabulary { column, allowed } => {
            let Some(col) = frame.column(column) else {
                report.violation(
                    CheckKind::MissingColumn,
                    table,
                    format!("missing column '{}'", column),
                );
                return;
            };
            let actual = col.unique_text_sorted();
            let mut expected: Vec<&str> = allowed.iter().map(String::as_str).collect();
            expected.sort_unstable();
            if actual != expected {
                report.violation(
                    CheckKind::Vocabulary,
                    table,
                    format!(
                        "column '{}' values [{}] do not match vocabulary [{}]",
                        column,
                        actual.join(", "),
                        expected.join(", ")
                    ),
                );
            }
        }
    }
}
