//! Error types for rime-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from rime-core
    #[error(transparent)]
    Core(#[from] rime_core::Error),

    /// Error from rime-fs
    #[error(transparent)]
    Fs(#[from] rime_fs::Error),

    /// Error from rime-platform
    #[error(transparent)]
    Platform(#[from] rime_platform::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Interactive prompt error
    #[error("Interactive prompt error: {0}")]
    Dialoguer(#[from] dialoguer::Error),

    /// User cancelled the current operation
    #[error("Cancelled by user")]
    Cancelled,

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }

    /// Whether this error is a user interruption (Ctrl-C inside a prompt
    /// or an explicit cancel), which exits zero instead of failing.
    pub fn is_interruption(&self) -> bool {
        match self {
            Self::Cancelled => true,
            Self::Dialoguer(dialoguer::Error::IO(e)) => {
                e.kind() == std::io::ErrorKind::Interrupted
            }
            _ => false,
        }
    }

    /// Whether the root cause is the input method holding the target
    /// directory, so the user can be told to quit it and retry.
    pub fn is_resource_busy(&self) -> bool {
        match self {
            Self::Core(e) => e.is_resource_busy(),
            Self::Fs(e) => e.is_resource_busy(),
            _ => false,
        }
    }
}
