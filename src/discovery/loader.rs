use std::fs;
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;

use super::descriptor::{ScanRoot, TestCaseDescriptor};
use super::test_type::TestType;
use crate::error::DiscoveryError;
use crate::settings::ScanSettings;

/// Walks the configured roots and yields one descriptor per test-case
/// directory.
pub struct TestCaseLoader {
    settings: ScanSettings,
}

impl TestCaseLoader {
    pub fn new(settings: ScanSettings) -> Self {
        Self { settings }
    }

    /// Lazily scans every root in declaration order. Each call re-reads the
    /// filesystem. Roots that do not exist contribute nothing; per-case
    /// failures are yielded as `Err` items and the scan continues.
    pub fn discover(
        &self,
    ) -> impl Iterator<Item = Result<TestCaseDescriptor, DiscoveryError>> + '_ {
        self.settings
            .roots
            .iter()
            .filter_map(move |relative| self.open_root(relative))
            .flat_map(move |root| self.walk_root(root))
    }

    /// Runs [`discover`](Self::discover) to completion, splitting the
    /// results.
    pub fn discover_all(&self) -> (Vec<TestCaseDescriptor>, Vec<DiscoveryError>) {
        let mut cases = Vec::new();
        let mut errors = Vec::new();
        for item in self.discover() {
            match item {
                Ok(case) => cases.push(case),
                Err(e) => errors.push(e),
            }
        }
        info!(
            "Discovered {} test case(s), {} failure(s)",
            cases.len(),
            errors.len()
        );
        (cases, errors)
    }

    fn open_root(&self, relative: &Path) -> Option<ScanRoot> {
        let root = self.settings.base_dir.join(relative);
        let scan = ScanRoot::open(&root, &self.settings.build);
        if scan.is_none() {
            debug!("Skipping missing test root {}", root.display());
        }
        scan
    }

    fn walk_root(
        &self,
        root: ScanRoot,
    ) -> impl Iterator<Item = Result<TestCaseDescriptor, DiscoveryError>> + '_ {
        debug!("Scanning test root {}", root.path.display());

        WalkDir::new(&root.path)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(move |entry| {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(source) => {
                        return Some(Err(DiscoveryError::Walk {
                            root: root.path.clone(),
                            source,
                        }))
                    }
                };

                if !entry.file_type().is_dir() || !is_test_case_dir(entry.path()) {
                    return None;
                }

                let descriptor = TestCaseDescriptor::assemble(
                    entry.path(),
                    &root,
                    &self.settings.config_file_name,
                    &self.settings.separator,
                );
                if let Ok(ref case) = descriptor {
                    debug!("Found test case {}", case.name);
                }
                Some(descriptor)
            })
    }
}

/// True when `dir` has at least one immediate subdirectory named after a
/// [`TestType`].
pub fn is_test_case_dir(dir: &Path) -> bool {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("Cannot list {}: {}", dir.display(), e);
            return false;
        }
    };

    entries.flatten().any(|entry| {
        entry
            .file_name()
            .to_str()
            .and_then(TestType::from_dir_name)
            .is_some()
            && entry.path().is_dir()
    })
}
