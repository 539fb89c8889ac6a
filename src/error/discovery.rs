use std::path::PathBuf;
use thiserror::Error;

use super::ConfigError;
use crate::discovery::TestType;

/// A failure scoped to one test case or one unreadable subtree. Discovery
/// keeps going after yielding one of these.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("failed to scan directory under {root}: {source}")]
    Walk {
        root: PathBuf,
        source: walkdir::Error,
    },

    #[error("failed to resolve {test_type} config for {directory}: {source}")]
    Config {
        directory: PathBuf,
        test_type: TestType,
        source: ConfigError,
    },
}
