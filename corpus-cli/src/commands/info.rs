//! Info command implementation

use anyhow::{Context, Result};
use colored::Colorize;
use emocorpus::{io, Column};
use serde::Serialize;

use crate::config::Config;
use crate::output;

#[derive(Serialize)]
struct ColumnSummary {
    name: String,
    dtype: String,
    nulls: usize,
    distinct: usize,
}

#[derive(Serialize)]
struct ManifestSummary {
    manifest: String,
    rows: usize,
    columns: usize,
    fields: Vec<ColumnSummary>,
}

/// Summarize a manifest: shape, per-column dtype, null and distinct counts
pub fn info(config: &Config, manifest: &str) -> Result<()> {
    let path = config.resolve(manifest);
    let frame = io::read_csv(&path)
        .with_context(|| format!("Failed to load manifest: {}", path.display()))?;

    let summary = ManifestSummary {
        manifest: path.display().to_string(),
        rows: frame.n_rows(),
        columns: frame.n_cols(),
        fields: frame.columns().iter().map(summarize).collect(),
    };

    if output::text_mode() {
        println!("Manifest: {}", summary.manifest.bold());
        println!("{} rows, {} columns", summary.rows, summary.columns);
        println!();
        println!("{:<20} {:<14} {:>8} {:>10}", "column", "dtype", "nulls", "distinct");
        for field in &summary.fields {
            println!(
                "{:<20} {:<14} {:>8} {:>10}",
                field.name, field.dtype, field.nulls, field.distinct
            );
        }
    } else {
        output::print_output(&summary)?;
    }

    Ok(())
}

fn summarize(column: &Column) -> ColumnSummary {
    ColumnSummary {
        name: column.name().to_string(),
        dtype: column
            .dtype()
            .map_or_else(|| "indeterminate".to_string(), |d| d.to_string()),
        nulls: column.null_count(),
        distinct: column.unique_count(),
    }
}
