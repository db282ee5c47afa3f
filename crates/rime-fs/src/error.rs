//! Error types for rime-fs

use std::path::PathBuf;

/// Result type for rime-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in rime-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "{path} is in use by another process. \
         Quit the input method (right-click its tray icon and exit), then retry."
    )]
    ResourceBusy { path: PathBuf },

    #[error("Failed to parse {format} config at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Failed to serialize {format} config for {path}: {message}")]
    ConfigSerialize {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported config format: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error means another process holds the resource.
    pub fn is_resource_busy(&self) -> bool {
        matches!(self, Self::ResourceBusy { .. })
    }
}
