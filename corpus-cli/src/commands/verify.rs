//! Verify command implementation

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use colored::Colorize;
use emocorpus::corpus::{iemocap, meld, union};
use emocorpus::{io, Frame, Report};
use indicatif::ProgressBar;

use crate::config::Config;
use crate::output;

/// Verify an IEMOCAP manifest, optionally checking the dataset folder
pub fn iemocap(config: &Config, manifest: &str, audio_dir: Option<&str>) -> Result<()> {
    let frame = load(config, manifest)?;
    let report = match audio_dir {
        Some(dir) => iemocap::verify_with_audio(&frame, &config.resolve(dir)),
        None => iemocap::verify(&frame),
    };
    finish(report)
}

/// Verify the MELD splits and combined table, optionally counting audio files
pub fn meld(
    config: &Config,
    train: &str,
    dev: &str,
    test: &str,
    combined: &str,
    audio_dir: Option<&str>,
) -> Result<()> {
    let corpus = meld::MeldCorpus {
        train: load(config, train)?,
        dev: load(config, dev)?,
        test: load(config, test)?,
        combined: load(config, combined)?,
    };

    let report = match audio_dir {
        Some(dir) => with_spinner("scanning audio files...", || {
            meld::verify_with_audio(&corpus, &config.resolve(dir))
        }),
        None => meld::verify(&corpus),
    };
    finish(report)
}

/// Verify the merged union dataset, its sources, and its splits
#[allow(clippy::too_many_arguments)]
pub fn union(
    config: &Config,
    combined: &str,
    iemocap: &str,
    meld: &str,
    train: &str,
    validation: &str,
    test: &str,
) -> Result<()> {
    let corpus = union::UnionCorpus {
        iemocap: load(config, iemocap)?,
        meld: load(config, meld)?,
        combined: load(config, combined)?,
        train: load(config, train)?,
        validation: load(config, validation)?,
        test: load(config, test)?,
    };
    finish(union::verify(&corpus))
}

fn load(config: &Config, manifest: &str) -> Result<Frame> {
    let path: PathBuf = config.resolve(manifest);
    let frame = io::read_csv(&path)
        .with_context(|| format!("Failed to load manifest: {}", path.display()))?;
    output::verbose_println(
        1,
        &format!(
            "loaded {}: {} rows, {} columns",
            path.display(),
            frame.n_rows(),
            frame.n_cols()
        ),
    );
    Ok(frame)
}

fn with_spinner<T>(message: &'static str, f: impl FnOnce() -> T) -> T {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    let result = f();
    spinner.finish_and_clear();
    result
}

fn finish(report: Report) -> Result<()> {
    if output::text_mode() {
        print_text_report(&report);
    } else {
        output::print_output(&report)?;
    }

    if report.is_ok() {
        Ok(())
    } else {
        Err(anyhow::anyhow!(
            "verification of {} failed with {} violations",
            report.name(),
            report.violations.len()
        ))
    }
}

fn print_text_report(report: &Report) {
    let (ok_mark, bad_mark, warn_mark) = if output::use_color() {
        (
            "✓".green().to_string(),
            "✗".red().to_string(),
            "⚠".yellow().to_string(),
        )
    } else {
        ("✓".to_string(), "✗".to_string(), "⚠".to_string())
    };

    println!("Verifying corpus: {}", report.name());
    println!();
    println!("Verification Results:");
    println!("====================");
    println!("{} checks run", report.checks_run());

    if report.is_ok() && report.warnings.is_empty() {
        println!("{} All structural checks passed", ok_mark);
        return;
    }

    if !report.violations.is_empty() {
        println!();
        println!("Violations ({}):", report.violations.len());
        for violation in &report.violations {
            println!("  {} {}", bad_mark, violation);
        }
    }

    if !report.warnings.is_empty() {
        println!();
        println!("Warnings ({}):", report.warnings.len());
        for warning in &report.warnings {
            println!("  {} {}", warn_mark, warning);
        }
    }
}
