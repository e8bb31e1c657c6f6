//! Filesystem checks: dataset folder existence and audio file counts.

use std::path::Path;

use walkdir::WalkDir;

use crate::check::{CheckKind, Report};
use crate::error::{Error, Result};

/// Recursively count `.wav` files under `dir` (extension match is
/// case-insensitive, symlinks are not followed)
pub fn count_wav_files(dir: &Path) -> Result<usize> {
    if !dir.is_dir() {
        return Err(Error::FolderNotFound(dir.to_path_buf()));
    }

    let mut count = 0;
    for entry in WalkDir::new(dir).follow_links(false) {
        let entry = entry.map_err(|e| Error::Io(e.into()))?;
        if entry.file_type().is_file() && is_wav(entry.path()) {
            count += 1;
        }
    }
    log::debug!("counted {} wav files under {}", count, dir.display());
    Ok(count)
}

fn is_wav(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("wav"))
        .unwrap_or(false)
}

/// Assert that the dataset folder exists
pub fn check_folder(report: &mut Report, table: &str, dir: &Path) {
    report.count_check();
    if !dir.is_dir() {
        report.violation(
            CheckKind::MissingFolder,
            table,
            format!("dataset folder does not exist: {}", dir.display()),
        );
    }
}

/// Assert that the recursive `.wav` count under `dir` equals `expected_rows`
/// (one audio file per manifest row)
pub fn check_audio_count(report: &mut Report, table: &str, expected_rows: usize, dir: &Path) {
    report.count_check();
    match count_wav_files(dir) {
        Ok(count) if count == expected_rows => {}
        Ok(count) => {
            report.violation(
                CheckKind::AudioCount,
                table,
                format!(
                    "found {} wav files under {}, expected {}",
                    count,
                    dir.display(),
                    expected_rows
                ),
            );
        }
        Err(e) => {
            report.violation(CheckKind::MissingFolder, table, e.to_string());
        }
    }
}
