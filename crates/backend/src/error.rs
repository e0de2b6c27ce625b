use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    /// Nothing is stored under the requested name.
    #[error("not found: {0}")]
    NotFound(String),

    /// The backing medium failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;
