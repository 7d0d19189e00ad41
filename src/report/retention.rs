use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
    time::SystemTime,
};

use chrono::{
    DateTime,
    Local,
};
use log::{
    info,
    warn,
};

use crate::core::LexError;

pub const REPORT_EXTENSION: &str = "csv";

pub fn timestamped_report_name(prefix: &str, now: DateTime<Local>) -> String {
    format!("{}_{}.{}", prefix, now.format("%Y%m%d_%H%M%S"), REPORT_EXTENSION)
}

/// Deletes the oldest reports in `folder` so at most `max_files` remain.
/// Returns the number of files removed.
pub fn prune_old_reports(folder: &Path, max_files: usize) -> Result<usize, LexError> {
    let mut reports: Vec<(SystemTime, PathBuf)> = fs::read_dir(folder)?
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path.extension().and_then(|e| e.to_str()) == Some(REPORT_EXTENSION)
        })
        .map(|path| {
            let modified =
                fs::metadata(&path).and_then(|m| m.modified()).unwrap_or(SystemTime::UNIX_EPOCH);
            (modified, path)
        })
        .collect();

    if reports.len() <= max_files {
        return Ok(0);
    }

    // Oldest first; equal timestamps fall back to name order.
    reports.sort();
    let excess = reports.len() - max_files;
    let mut removed = 0;
    for (_, path) in reports.into_iter().take(excess) {
        match fs::remove_file(&path) {
            Ok(()) => {
                info!("Removed old report {}", path.display());
                removed += 1;
            }
            Err(e) => warn!("Could not remove {}: {}", path.display(), e),
        }
    }
    Ok(removed)
}
