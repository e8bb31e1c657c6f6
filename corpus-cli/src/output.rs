use crate::{OutputFormat, GLOBAL_OPTS};
use colored::*;
use serde::Serialize;
use std::io;

/// Print output according to the global format settings
pub fn print_output<T: Serialize>(data: &T) -> Result<(), io::Error> {
    let opts = GLOBAL_OPTS.get().expect("Global options not initialized");

    if opts.quiet {
        return Ok(());
    }

    match opts.output {
        OutputFormat::Json => print_json(data),
        OutputFormat::Csv => print_csv(data),
        OutputFormat::Text => Ok(()), // Text output is handled by individual commands
    }
}

/// Print JSON output
pub fn print_json<T: Serialize>(data: &T) -> Result<(), io::Error> {
    let json = serde_json::to_string_pretty(data)?;
    println!("{}", json);
    Ok(())
}

/// Print CSV output by flattening the serialized value: an array of objects
/// becomes rows, a single object becomes one row
pub fn print_csv<T: Serialize>(data: &T) -> Result<(), io::Error> {
    let value = serde_json::to_value(data)?;
    let rows = match value {
        serde_json::Value::Array(items) => items,
        other => vec![other],
    };

    if let Some(serde_json::Value::Object(first)) = rows.first() {
        println!("{}", first.keys().cloned().collect::<Vec<_>>().join(","));
    }
    for row in rows {
        if let serde_json::Value::Object(fields) = row {
            let cells: Vec<String> = fields
                .values()
                .map(|v| match v {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect();
            println!("{}", cells.join(","));
        }
    }

    Ok(())
}

/// Print verbose message (only if verbose mode is on)
pub fn verbose_println(level: u8, message: &str) {
    let opts = GLOBAL_OPTS.get().expect("Global options not initialized");

    if !opts.quiet && opts.verbose >= level {
        eprintln!("{} {}", "[VERBOSE]".dimmed(), message);
    }
}

/// Check if text output is active (structured formats handle their own layout)
pub fn text_mode() -> bool {
    let opts = GLOBAL_OPTS.get().expect("Global options not initialized");
    !opts.quiet && opts.output == OutputFormat::Text
}

/// Check if we should use color
pub fn use_color() -> bool {
    let opts = GLOBAL_OPTS.get().expect("Global options not initialized");
    !opts.no_color && opts.output == OutputFormat::Text
}
