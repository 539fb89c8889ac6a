use anyhow::{Context as AnyhowContext, Result};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

use crate::constants::{
    DEFAULT_CONFIGURATION, DEFAULT_PLATFORM, DISPLAY_DIFFS_FILE_NAME, TEST_RESULTS_DIR_NAME,
};
use crate::settings::{load_settings_file, BuildSettings, ScanSettings, SettingsFile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
    Text,
}

#[derive(Parser, Debug)]
#[command(name = "testcase-loader")]
#[command(about = "Discover regression test cases and resolve their test configs", long_about = None)]
pub struct Args {
    /// Test directory the roots are resolved against (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Root-relative directory to scan. Can be specified multiple times.
    #[arg(long = "root", value_name = "SUBPATH")]
    pub roots: Vec<PathBuf>,

    /// Platform label exposed as $(platform)
    #[arg(long)]
    pub platform: Option<String>,

    /// Build configuration exposed as $(configuration)
    #[arg(long)]
    pub configuration: Option<String>,

    /// Solution directory used to derive $(testbinaries)
    #[arg(long, value_name = "DIR")]
    pub solution_dir: Option<PathBuf>,

    /// Separator used in categories and test names
    #[arg(long)]
    pub separator: Option<String>,

    /// JSON settings file; explicit flags override its values
    #[arg(long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Previous results directory removed before scanning
    #[arg(long, value_name = "DIR")]
    pub results_dir: Option<PathBuf>,

    /// Stale diff report removed before scanning
    #[arg(long, value_name = "FILE")]
    pub diffs_file: Option<PathBuf>,

    /// Skip removing previous results before scanning
    #[arg(long)]
    pub no_clean: bool,

    /// Output file path (prints to stdout if not specified)
    #[arg(short = 'O', long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Output format (json, yaml, text)
    #[arg(short = 'f', long, default_value = "json")]
    pub format: OutputFormat,

    /// Exit with an error if any test case failed to resolve
    #[arg(long)]
    pub fail_on_error: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Settings for one invocation after merging flags, settings file and
/// defaults.
#[derive(Debug, Clone)]
pub struct RunPlan {
    pub scan: ScanSettings,
    pub results_dir: PathBuf,
    pub diffs_file: PathBuf,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        if let Some(ref base_dir) = self.base_dir {
            validate_dir(base_dir)?;
        }
        if let Some(ref settings) = self.settings {
            if !settings.is_file() {
                anyhow::bail!("Settings file does not exist: {}", settings.display());
            }
        }
        if matches!(self.separator.as_deref(), Some("")) {
            anyhow::bail!("Separator must not be empty");
        }
        Ok(())
    }

    pub fn resolve(&self) -> Result<RunPlan> {
        let file = match self.settings {
            Some(ref path) => load_settings_file(path)?,
            None => SettingsFile::default(),
        };
        self.merge(file)
    }

    fn merge(&self, file: SettingsFile) -> Result<RunPlan> {
        let base_dir = match self.base_dir.clone().or(file.base_dir) {
            Some(dir) => dir,
            None => std::env::current_dir().context("Cannot determine current directory")?,
        };

        let solution_dir = self
            .solution_dir
            .clone()
            .or(file.solution_dir)
            .unwrap_or_else(|| {
                base_dir
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| base_dir.clone())
            });

        let build = BuildSettings::new(
            self.platform
                .clone()
                .or(file.platform)
                .unwrap_or_else(|| DEFAULT_PLATFORM.to_string()),
            self.configuration
                .clone()
                .or(file.configuration)
                .unwrap_or_else(|| DEFAULT_CONFIGURATION.to_string()),
            solution_dir,
        );

        let mut scan = ScanSettings::new(base_dir.clone(), build);
        if !self.roots.is_empty() {
            scan = scan.with_roots(self.roots.clone());
        } else if let Some(roots) = file.roots {
            scan = scan.with_roots(roots);
        }
        if let Some(separator) = self.separator.clone().or(file.separator) {
            if separator.is_empty() {
                anyhow::bail!("Separator must not be empty");
            }
            scan = scan.with_separator(separator);
        }

        let results_dir = self
            .results_dir
            .clone()
            .or(file.results_dir)
            .unwrap_or_else(|| base_dir.join(TEST_RESULTS_DIR_NAME));
        let diffs_file = self
            .diffs_file
            .clone()
            .or(file.diffs_file)
            .unwrap_or_else(|| base_dir.join(DISPLAY_DIFFS_FILE_NAME));

        Ok(RunPlan {
            scan,
            results_dir,
            diffs_file,
        })
    }
}

pub fn validate_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }
    if !path.is_dir() {
        anyhow::bail!("Path is not a directory: {}", path.display());
    }
    std::fs::read_dir(path).with_context(|| format!("Cannot read directory: {}", path.display()))?;
    Ok(())
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Text => "text",
        }
    }
}
