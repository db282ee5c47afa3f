//! Error types for rime-core
//!
//! Each install/sync stage either completes or raises a stage-tagged
//! failure; nothing is swallowed and nothing is rolled back. The
//! timestamped backup is the recovery mechanism.

use std::path::PathBuf;

/// Result type for rime-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in rime-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Backup failed: {0}")]
    BackupFailed(#[source] rime_fs::Error),

    #[error(transparent)]
    Fetch(#[from] rime_fetch::Error),

    #[error("Failed to copy bundle into {path}: {source}")]
    CopyFailed {
        path: PathBuf,
        #[source]
        source: rime_fs::Error,
    },

    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: rime_fs::Error,
    },

    #[error("Sync failed on {file}: {source}")]
    SyncFailed {
        file: String,
        #[source]
        source: rime_fs::Error,
    },

    #[error("Could not resolve a user config directory for settings")]
    NoConfigDir,

    #[error(transparent)]
    Fs(#[from] rime_fs::Error),
}

impl Error {
    /// Whether the root cause is another process holding the target,
    /// the one failure with a user-actionable fix (stop the engine).
    pub fn is_resource_busy(&self) -> bool {
        match self {
            Self::BackupFailed(e) | Self::Fs(e) => e.is_resource_busy(),
            Self::CopyFailed { source, .. }
            | Self::WriteFailed { source, .. }
            | Self::SyncFailed { source, .. } => source.is_resource_busy(),
            _ => false,
        }
    }
}
