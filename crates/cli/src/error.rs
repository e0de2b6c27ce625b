//! CLI error types.

use thiserror::Error;

/// CLI errors.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// No log file exists yet for the given identifier.
    #[error("no log file for identifier '{identifier}'. Run 'eventlog add' first")]
    LogNotFound { identifier: String },

    /// Configuration is invalid or missing required fields.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// The logger rejected its construction parameters.
    #[error(transparent)]
    Logger(#[from] logger::ConfigError),

    /// An error occurred in the storage layer.
    #[error(transparent)]
    Storage(#[from] logger::StorageError),

    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
