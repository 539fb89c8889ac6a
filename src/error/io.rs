use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IoError {
    #[error("failed to remove directory '{path}': {source}")]
    RemoveDirectory {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to remove file '{path}': {source}")]
    RemoveFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl IoError {
    pub fn remove_directory(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::RemoveDirectory {
            path: path.into(),
            source,
        }
    }

    pub fn remove_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::RemoveFile {
            path: path.into(),
            source,
        }
    }

    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::RemoveDirectory { path, .. } | Self::RemoveFile { path, .. } => path,
        }
    }
}
