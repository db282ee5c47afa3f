//! Error types for rime-platform

/// Result type for rime-platform operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in platform dispatch
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unsupported operating system: {os}")]
    UnsupportedPlatform { os: String },

    #[error("Could not resolve the user home directory")]
    NoHomeDir,
}
