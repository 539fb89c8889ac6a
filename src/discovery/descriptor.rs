use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::category::{derive_category, qualified_category};
use super::config::{load_test_config, TestConfig};
use super::test_type::TestType;
use super::variables::VariableMap;
use crate::error::DiscoveryError;
use crate::settings::BuildSettings;

/// One existing scan root together with the variables its configs resolve
/// against.
#[derive(Debug, Clone)]
pub struct ScanRoot {
    pub path: PathBuf,
    pub name: String,
    pub variables: VariableMap,
}

impl ScanRoot {
    /// Returns `None` when `root` is not an existing directory.
    pub fn open(root: &Path, build: &BuildSettings) -> Option<ScanRoot> {
        if !root.is_dir() {
            return None;
        }

        let name = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let path = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
        let variables = build.variables_for_root(&path);

        Some(ScanRoot {
            path,
            name,
            variables,
        })
    }
}

/// A discovered test case, ready to hand to a runner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestCaseDescriptor {
    pub name: String,
    pub category: String,
    pub directory: PathBuf,
    pub configs: BTreeMap<TestType, TestConfig>,
}

impl TestCaseDescriptor {
    pub fn assemble(
        dir: &Path,
        root: &ScanRoot,
        config_file_name: &str,
        separator: &str,
    ) -> Result<TestCaseDescriptor, DiscoveryError> {
        let mut configs = BTreeMap::new();
        for test_type in TestType::ALL {
            let config_path = dir.join(test_type.as_str()).join(config_file_name);
            if !config_path.is_file() {
                continue;
            }
            let config = load_test_config(&config_path, &root.variables).map_err(|source| {
                DiscoveryError::Config {
                    directory: dir.to_path_buf(),
                    test_type,
                    source,
                }
            })?;
            if let Some(config) = config {
                configs.insert(test_type, config);
            }
        }

        let category = qualified_category(
            &root.name,
            &derive_category(dir, &root.path, separator),
            separator,
        );
        let dir_name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let name = format!("{category}{separator}{dir_name}");

        Ok(TestCaseDescriptor {
            name,
            category,
            directory: dir.to_path_buf(),
            configs,
        })
    }

    pub fn test_types(&self) -> impl Iterator<Item = TestType> + '_ {
        self.configs.keys().copied()
    }
}
