//! Error types for locale-fs

use std::path::PathBuf;

/// Result type for locale-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading a locale tree
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("Entry name is not valid UTF-8 in {path}")]
    InvalidEntryName { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
