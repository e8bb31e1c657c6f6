//! Column-oriented tables that integrity checks run against.
//!
//! A [`Frame`] is a deliberately small stand-in for the dataframes produced
//! by the preprocessing pipeline: named columns of equal length, nullable
//! cells, and just enough introspection (shape, dtype, distinct counts, key
//! uniqueness) for the structural checks in [`crate::check`].

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use crate::error::{Error, Result};

/// A single cell. `Null` models a missing field (an empty CSV cell).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// 64-bit signed integer
    Int(i64),
    /// UTF-8 text
    Text(String),
    /// Missing value
    Null,
}

impl Value {
    /// Check whether this cell is missing
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The dtype of this cell, or `None` for nulls
    pub fn dtype(&self) -> Option<DType> {
        match self {
            Value::Int(_) => Some(DType::Int64),
            Value::Text(_) => Some(DType::Text),
            Value::Null => None,
        }
    }

    /// Borrow the text content, if this is a text cell
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The integer content, if this is an integer cell
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{}", i),
            Value::Text(s) => write!(f, "{}", s),
            Value::Null => Ok(()),
        }
    }
}

/// Column data types recognized by the checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DType {
    /// 64-bit signed integer column
    Int64,
    /// Text column
    Text,
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DType::Int64 => write!(f, "int64"),
            DType::Text => write!(f, "text"),
        }
    }
}

/// A named column of nullable cells
#[derive(Debug, Clone)]
pub struct Column {
    name: String,
    values: Vec<Value>,
}

impl Column {
    /// Create a column from raw cells
    pub fn new(name: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Create an integer column with no nulls
    pub fn int(name: impl Into<String>, values: Vec<i64>) -> Self {
        Self::new(name, values.into_iter().map(Value::Int).collect())
    }

    /// Create a text column with no nulls
    pub fn text<S: Into<String>>(name: impl Into<String>, values: Vec<S>) -> Self {
        Self::new(
            name,
            values.into_iter().map(|s| Value::Text(s.into())).collect(),
        )
    }

    /// Column name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of cells (including nulls)
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check whether the column has no cells
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All cells in row order
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Number of missing cells
    pub fn null_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_null()).count()
    }

    /// The dtype shared by all non-null cells.
    ///
    /// Returns `None` when the column is all-null or mixes dtypes; callers
    /// treat both as a dtype violation.
    pub fn dtype(&self) -> Option<DType> {
        let mut dtype = None;
        for value in &self.values {
            let Some(d) = value.dtype() else { continue };
            match dtype {
                None => dtype = Some(d),
                Some(prev) if prev != d => return None,
                Some(_) => {}
            }
        }
        dtype
    }

    /// Number of distinct non-null cells
    pub fn unique_count(&self) -> usize {
        self.values
            .iter()
            .filter(|v| !v.is_null())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Distinct text cells in sorted order
    pub fn unique_text_sorted(&self) -> Vec<&str> {
        self.values
            .iter()
            .filter_map(Value::as_str)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Iterate over cells as text, yielding `None` for non-text cells
    pub fn iter_text(&self) -> impl Iterator<Item = Option<&str>> {
        self.values.iter().map(Value::as_str)
    }
}

/// An ordered collection of equal-length columns
#[derive(Debug, Clone, Default)]
pub struct Frame {
    columns: Vec<Column>,
    rows: usize,
}

impl Frame {
    /// Build a frame, rejecting ragged columns and duplicate column names
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let rows = columns.first().map_or(0, Column::len);
        let mut seen = HashSet::new();
        for column in &columns {
            if column.len() != rows {
                return Err(Error::malformed(format!(
                    "column '{}' has {} rows, expected {}",
                    column.name(),
                    column.len(),
                    rows
                )));
            }
            if !seen.insert(column.name().to_string()) {
                return Err(Error::malformed(format!(
                    "duplicate column name '{}'",
                    column.name()
                )));
            }
        }
        Ok(Self { columns, rows })
    }

    /// Number of rows
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// `(rows, columns)` pair
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns.len())
    }

    /// Check whether the frame has no rows
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    /// All columns in declaration order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column names in declaration order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    /// Total number of missing cells across all columns
    pub fn null_count(&self) -> usize {
        self.columns.iter().map(Column::null_count).sum()
    }

    /// Number of rows whose key tuple repeats an earlier row.
    ///
    /// A zero result means the given columns form a unique key.
    pub fn duplicate_key_count(&self, key: &[&str]) -> Result<usize> {
        let columns: Vec<&Column> = key
            .iter()
            .map(|name| {
                self.column(name)
                    .ok_or_else(|| Error::ColumnNotFound((*name).to_string()))
            })
            .collect::<Result<_>>()?;

        let mut seen = HashSet::with_capacity(self.rows);
        let mut duplicates = 0;
        for row in 0..self.rows {
            let tuple: Vec<&Value> = columns.iter().map(|c| &c.values()[row]).collect();
            if !seen.insert(tuple) {
                duplicates += 1;
            }
        }
        Ok(duplicates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Frame {
        Frame::new(vec![
            Column::text("name", vec!["a", "b", "a"]),
            Column::int("id", vec![1, 2, 3]),
            Column::new(
                "note",
                vec![
                    Value::Text("x".into()),
                    Value::Null,
                    Value::Text("y".into()),
                ],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn shape_and_lookup() {
        let frame = sample();
        assert_eq!(frame.shape(), (3, 3));
        assert!(!frame.is_empty());
        assert_eq!(frame.column("id").unwrap().len(), 3);
        assert!(frame.column("missing").is_none());
        assert_eq!(frame.column_names(), vec!["name", "id", "note"]);
    }

    #[test]
    fn ragged_columns_rejected() {
        let result = Frame::new(vec![
            Column::text("a", vec!["x"]),
            Column::int("b", vec![1, 2]),
        ]);
        assert!(matches!(result, Err(Error::MalformedTable(_))));
    }

    #[test]
    fn duplicate_names_rejected() {
        let result = Frame::new(vec![
            Column::text("a", vec!["x"]),
            Column::int("a", vec![1]),
        ]);
        assert!(matches!(result, Err(Error::MalformedTable(_))));
    }

    #[test]
    fn dtype_inference() {
        let frame = sample();
        assert_eq!(frame.column("name").unwrap().dtype(), Some(DType::Text));
        assert_eq!(frame.column("id").unwrap().dtype(), Some(DType::Int64));
        // nulls do not affect the dtype
        assert_eq!(frame.column("note").unwrap().dtype(), Some(DType::Text));
    }

    #[test]
    fn mixed_dtype_is_indeterminate() {
        let column = Column::new("m", vec![Value::Int(1), Value::Text("x".into())]);
        assert_eq!(column.dtype(), None);
        let all_null = Column::new("n", vec![Value::Null, Value::Null]);
        assert_eq!(all_null.dtype(), None);
    }

    #[test]
    fn null_counts() {
        let frame = sample();
        assert_eq!(frame.column("note").unwrap().null_count(), 1);
        assert_eq!(frame.null_count(), 1);
    }

    #[test]
    fn unique_counts_skip_nulls() {
        let frame = sample();
        assert_eq!(frame.column("name").unwrap().unique_count(), 2);
        assert_eq!(frame.column("note").unwrap().unique_count(), 2);
    }

    #[test]
    fn unique_text_sorted() {
        let frame = sample();
        assert_eq!(
            frame.column("name").unwrap().unique_text_sorted(),
            vec!["a", "b"]
        );
    }

    #[test]
    fn duplicate_key_detection() {
        let frame = sample();
        assert_eq!(frame.duplicate_key_count(&["name"]).unwrap(), 1);
        assert_eq!(frame.duplicate_key_count(&["name", "id"]).unwrap(), 0);
        assert!(matches!(
            frame.duplicate_key_count(&["nope"]),
            Err(Error::ColumnNotFound(_))
        ));
    }

    #[test]
    fn empty_frame() {
        let frame = Frame::new(vec![]).unwrap();
        assert_eq!(frame.shape(), (0, 0));
        assert!(frame.is_empty());
    }
}
