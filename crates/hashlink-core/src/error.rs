use thiserror::Error;

/// Errors related to the core value types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid short id: {0}")]
    InvalidShortId(String),
}

/// Errors surfaced by a [`UrlStorage`](crate::UrlStorage) backend.
///
/// A missing key is not an error; backends report it as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("storage has been closed")]
    Closed,
    #[error("storage operation failed: {0}")]
    Operation(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortenerError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
