//! Manifest loading.
//!
//! Preprocessed corpus tables are exchanged as CSV manifests with a header
//! row. Loading infers one dtype per column: a column whose non-empty fields
//! all parse as `i64` becomes [`DType::Int64`](crate::DType::Int64),
//! everything else stays text. Empty fields load as nulls.

use std::path::Path;

use crate::error::Result;
use crate::frame::{Column, Frame, Value};

/// Read a CSV manifest into a [`Frame`]
pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<Frame> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new().flexible(false).from_path(path)?;

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];

    for record in reader.records() {
        let record = record?;
        for (index, field) in record.iter().enumerate() {
            cells[index].push(field.to_string());
        }
    }

    let columns: Vec<Column> = headers
        .into_iter()
        .zip(cells)
        .map(|(name, raw)| infer_column(name, raw))
        .collect();

    let frame = Frame::new(columns)?;
    log::debug!(
        "loaded {}: {} rows, {} columns",
        path.display(),
        frame.n_rows(),
        frame.n_cols()
    );
    Ok(frame)
}

fn infer_column(name: String, raw: Vec<String>) -> Column {
    let non_empty = raw.iter().filter(|field| !field.is_empty()).count();
    let parsed: Vec<Option<i64>> = raw.iter().map(|field| field.parse::<i64>().ok()).collect();
    let int_count = parsed.iter().flatten().count();

    let values: Vec<Value> = if non_empty > 0 && int_count == non_empty {
        parsed
            .into_iter()
            .map(|field| field.map_or(Value::Null, Value::Int))
            .collect()
    } else {
        raw.into_iter()
            .map(|field| {
                if field.is_empty() {
                    Value::Null
                } else {
                    Value::Text(field)
                }
            })
            .collect()
    };

    Column::new(name, values)
}
