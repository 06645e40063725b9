use crate::deadline::Deadline;
use crate::error::StorageError;
use crate::short_id::ShortId;
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, StorageError>;

/// Key/value persistence for short id to URL mappings.
///
/// The backend is the single source of truth for the mapping set; callers
/// never cache mappings themselves. Implementations must be safe to call
/// concurrently from any number of tasks.
#[async_trait]
pub trait UrlStorage: Send + Sync + 'static {
    /// Stores or overwrites the URL for `id`.
    async fn set(&self, id: &ShortId, url: &str, deadline: Deadline) -> Result<()>;

    /// Retrieves the URL stored for `id`.
    ///
    /// Returns `Ok(None)` if the id is unknown. Only connectivity or protocol
    /// failures are reported as errors.
    async fn get(&self, id: &ShortId, deadline: Deadline) -> Result<Option<String>>;

    /// Releases held connections. Idempotent.
    async fn close(&self) -> Result<()>;
}
