//! Storage backends for short id to URL mappings.
//!
//! Two interchangeable implementations of [`UrlStorage`]:
//!
//! - [`InMemoryStorage`]: a process-local map behind a reader/writer lock.
//! - [`RedisStorage`]: a Redis client with namespaced keys and optional TTL.

pub mod memory;
pub mod redis;

pub use hashlink_core::storage::Result;
pub use hashlink_core::{StorageError, UrlStorage};
pub use self::memory::InMemoryStorage;
pub use self::redis::{RedisStorage, RedisStorageConfig, DEFAULT_KEY_PREFIX};
