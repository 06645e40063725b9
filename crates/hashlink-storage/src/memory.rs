use async_trait::async_trait;
use hashlink_core::storage::{Result, UrlStorage};
use hashlink_core::{Deadline, ShortId};
use parking_lot::RwLock;
use std::collections::HashMap;

/// In-memory implementation of [`UrlStorage`].
///
/// A single `HashMap` guarded by a reader/writer lock: lookups run
/// concurrently, writes are exclusive. Nothing survives a restart and
/// nothing is evicted.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    urls: RwLock<HashMap<ShortId, String>>,
}

impl InMemoryStorage {
    /// Creates an empty in-memory storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty in-memory storage with room for `capacity` mappings.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            urls: RwLock::new(HashMap::with_capacity(capacity)),
        }
    }

    /// Returns the number of stored mappings.
    pub fn len(&self) -> usize {
        self.urls.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.read().is_empty()
    }
}

// No I/O happens here, so deadlines are ignored.
#[async_trait]
impl UrlStorage for InMemoryStorage {
    async fn set(&self, id: &ShortId, url: &str, _deadline: Deadline) -> Result<()> {
        self.urls.write().insert(id.clone(), url.to_owned());
        Ok(())
    }

    async fn get(&self, id: &ShortId, _deadline: Deadline) -> Result<Option<String>> {
        Ok(self.urls.read().get(id).cloned())
    }

    async fn close(&self) -> Result<()> {
        Ok(())
    }
}
