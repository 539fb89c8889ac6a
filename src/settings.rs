use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::constants::{
    CATEGORY_SEPARATOR, DEFAULT_TEST_DIRS, TEST_CONFIG_FILE_NAME, VAR_CONFIGURATION,
    VAR_PLATFORM, VAR_TEST_BINARIES, VAR_TEST_ROOT,
};
use crate::discovery::VariableMap;

/// Build constants the loader treats as opaque inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSettings {
    pub platform: String,
    pub configuration: String,
    pub solution_dir: PathBuf,
}

impl BuildSettings {
    pub fn new(
        platform: impl Into<String>,
        configuration: impl Into<String>,
        solution_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            platform: platform.into(),
            configuration: configuration.into(),
            solution_dir: solution_dir.into(),
        }
    }

    pub fn binaries_dir(&self) -> PathBuf {
        self.solution_dir
            .join("bld")
            .join("drops")
            .join(&self.configuration)
            .join(&self.platform)
            .join("binaries")
    }

    /// Variables visible to every config file found under `root`.
    pub fn variables_for_root(&self, root: &Path) -> VariableMap {
        let root = std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf());

        let mut variables = VariableMap::new();
        variables.insert(VAR_PLATFORM, self.platform.as_str());
        variables.insert(VAR_TEST_ROOT, root.to_string_lossy());
        variables.insert(VAR_CONFIGURATION, self.configuration.as_str());
        variables.insert(VAR_TEST_BINARIES, self.binaries_dir().to_string_lossy());
        variables
    }
}

/// Everything one discovery run needs.
#[derive(Debug, Clone)]
pub struct ScanSettings {
    pub base_dir: PathBuf,
    pub roots: Vec<PathBuf>,
    pub build: BuildSettings,
    pub separator: String,
    pub config_file_name: String,
}

impl ScanSettings {
    pub fn new(base_dir: impl Into<PathBuf>, build: BuildSettings) -> Self {
        Self {
            base_dir: base_dir.into(),
            roots: DEFAULT_TEST_DIRS.iter().map(PathBuf::from).collect(),
            build,
            separator: CATEGORY_SEPARATOR.to_string(),
            config_file_name: TEST_CONFIG_FILE_NAME.to_string(),
        }
    }

    pub fn with_roots<I, P>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.roots = roots.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}

/// On-disk form of the run settings. Every field is optional; command-line
/// flags take precedence.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields, rename_all = "snake_case")]
pub struct SettingsFile {
    pub base_dir: Option<PathBuf>,
    pub roots: Option<Vec<PathBuf>>,
    pub platform: Option<String>,
    pub configuration: Option<String>,
    pub solution_dir: Option<PathBuf>,
    pub separator: Option<String>,
    pub results_dir: Option<PathBuf>,
    pub diffs_file: Option<PathBuf>,
}

pub fn load_settings_file(path: &Path) -> Result<SettingsFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse settings file: {}", path.display()))
}
