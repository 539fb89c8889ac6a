use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::IoError;

/// What a pre-scan cleanup removed and what it could not.
#[derive(Debug, Default)]
pub struct HousekeepingReport {
    pub removed: Vec<PathBuf>,
    pub failures: Vec<IoError>,
}

impl HousekeepingReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Removes the previous results directory and the stale diff report.
/// Best-effort: failures are logged and reported, never returned as errors.
pub fn clean_previous_results(results_dir: &Path, diffs_file: &Path) -> HousekeepingReport {
    let mut report = HousekeepingReport::default();

    if results_dir.is_dir() {
        match fs::remove_dir_all(results_dir) {
            Ok(()) => {
                debug!("Removed old results directory {}", results_dir.display());
                report.removed.push(results_dir.to_path_buf());
            }
            Err(e) => {
                warn!(
                    "Could not delete old test directory {}: {}",
                    results_dir.display(),
                    e
                );
                report.failures.push(IoError::remove_directory(results_dir, e));
            }
        }
    }

    match fs::remove_file(diffs_file) {
        Ok(()) => {
            debug!("Removed stale diff report {}", diffs_file.display());
            report.removed.push(diffs_file.to_path_buf());
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => {
            warn!(
                "Could not delete diff report {}: {}",
                diffs_file.display(),
                e
            );
            report.failures.push(IoError::remove_file(diffs_file, e));
        }
    }

    report
}
