use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read test config '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed line {line_number} in '{path}' (expected 'key: value'): {line}")]
    MalformedLine {
        path: PathBuf,
        line_number: usize,
        line: String,
    },
}

impl ConfigError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn malformed_line(
        path: impl Into<PathBuf>,
        line_number: usize,
        line: impl Into<String>,
    ) -> Self {
        Self::MalformedLine {
            path: path.into(),
            line_number,
            line: line.into(),
        }
    }
}
