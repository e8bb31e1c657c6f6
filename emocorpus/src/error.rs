//! Error types for the emocorpus library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or inspecting corpus tables.
///
/// Expectation failures are *not* errors; they are collected as
/// [`Violation`](crate::check::Violation)s in a report. `Error` covers the
/// hard failures that prevent a check from running at all.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O failure while reading a manifest or scanning a directory
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Manifest file could not be parsed as CSV
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Table construction failed (ragged columns, duplicate column names)
    #[error("Malformed table: {0}")]
    MalformedTable(String),

    /// A check referenced a column the table does not have
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    /// The dataset folder does not exist or is not a directory
    #[error("Dataset folder not found: {}", .0.display())]
    FolderNotFound(PathBuf),
}

impl Error {
    /// Create a malformed-table error with a descriptive message
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedTable(message.into())
    }
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
