//! Cleanliness invariants for preprocessed text columns.
//!
//! The preprocessing pipeline strips control characters, URLs, and repeated
//! whitespace from transcriptions before they land in `clean_text` /
//! `asr_clean_text`. This module detects leftovers.

use std::fmt;

/// A cleanliness violation found in a text cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum TextDefect {
    /// Contains a line feed (`\n`)
    Newline,
    /// Contains a carriage return (`\r`)
    CarriageReturn,
    /// Contains a horizontal tab (`\t`)
    Tab,
    /// Contains the substring `http` (a leftover URL)
    Url,
    /// Contains two consecutive spaces
    DoubleSpace,
}

impl fmt::Display for TextDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextDefect::Newline => write!(f, "newline"),
            TextDefect::CarriageReturn => write!(f, "carriage return"),
            TextDefect::Tab => write!(f, "tab"),
            TextDefect::Url => write!(f, "url"),
            TextDefect::DoubleSpace => write!(f, "double space"),
        }
    }
}

/// Every defect present in `text`, in a fixed order
pub fn defects(text: &str) -> Vec<TextDefect> {
    let mut found = Vec::new();
    if text.contains('\n') {
        found.push(TextDefect::Newline);
    }
    if text.contains('\r') {
        found.push(TextDefect::CarriageReturn);
    }
    if text.contains('\t') {
        found.push(TextDefect::Tab);
    }
    if text.contains("http") {
        found.push(TextDefect::Url);
    }
    if text.contains("  ") {
        found.push(TextDefect::DoubleSpace);
    }
    found
}

/// Check whether `text` satisfies every cleanliness invariant
pub fn is_clean(text: &str) -> bool {
    defects(text).is_empty()
}
