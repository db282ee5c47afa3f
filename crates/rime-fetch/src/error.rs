//! Error types for rime-fetch

use std::path::PathBuf;

/// Result type for rime-fetch operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while fetching and unpacking a bundle
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to download {url} after {attempts} attempts: {source}")]
    FetchFailed {
        url: String,
        attempts: u32,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to extract archive {path}: {message}")]
    Extract { path: PathBuf, message: String },

    #[error("Unknown config source: {id}")]
    UnknownSource { id: String },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
