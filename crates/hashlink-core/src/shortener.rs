use crate::deadline::Deadline;
use crate::error::ShortenerError;
use crate::short_id::ShortId;
use async_trait::async_trait;

type Result<T> = std::result::Result<T, ShortenerError>;

#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Persists the mapping for `url` and returns its short id.
    async fn shorten(&self, url: &str, deadline: Deadline) -> Result<ShortId>;

    /// Shortens `url` and returns the full short URL, `<host>/<id>`.
    async fn short_url(&self, url: &str, deadline: Deadline) -> Result<String>;

    /// Resolves a short id to the URL it was created from.
    /// Returns `None` if the id is unknown.
    async fn resolve(&self, id: &ShortId, deadline: Deadline) -> Result<Option<String>>;
}
