use async_trait::async_trait;
use hashlink_core::storage::{Result, UrlStorage};
use hashlink_core::{Deadline, ShortId, StorageError};
use parking_lot::RwLock;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use std::time::Duration;
use tracing::{debug, info, trace, warn};
use typed_builder::TypedBuilder;

/// Key namespace used when none is configured.
pub const DEFAULT_KEY_PREFIX: &str = "url:";

/// Connection settings for [`RedisStorage`].
///
/// # Example
///
/// ```rust
/// use hashlink_storage::RedisStorageConfig;
/// use std::time::Duration;
///
/// let config = RedisStorageConfig::builder()
///     .addr("localhost:6379")
///     .ttl(Duration::from_secs(3600))
///     .build();
/// assert_eq!(config.key_prefix, "url:");
/// ```
#[derive(Clone, TypedBuilder)]
pub struct RedisStorageConfig {
    /// Server address, `host:port` or a full `redis://` URL.
    #[builder(setter(into))]
    pub addr: String,

    /// Password sent with `AUTH` after connecting.
    #[builder(default, setter(into))]
    pub password: Option<String>,

    /// Logical database index selected after connecting.
    #[builder(default = 0)]
    pub db: i64,

    /// Expiry applied to every write. `None` or zero stores forever.
    #[builder(default, setter(into))]
    pub ttl: Option<Duration>,

    /// Prefix prepended to every short id to form the Redis key.
    #[builder(default = DEFAULT_KEY_PREFIX.to_string(), setter(into))]
    pub key_prefix: String,

    /// Upper bound on connecting, authenticating and the liveness `PING`.
    #[builder(default = Duration::from_secs(5))]
    pub connect_timeout: Duration,
}

impl std::fmt::Debug for RedisStorageConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisStorageConfig")
            .field("addr", &self.addr)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("db", &self.db)
            .field("ttl", &self.ttl)
            .field("key_prefix", &self.key_prefix)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

/// A Redis implementation of [`UrlStorage`].
///
/// Each mapping is stored as a plain string under `<key_prefix><id>`, with the
/// configured TTL applied at write time. The connection is established and
/// checked once in [`RedisStorage::connect`]; every later call is one round
/// trip bounded by the caller's [`Deadline`].
#[derive(Debug)]
pub struct RedisStorage {
    conn: RwLock<Option<MultiplexedConnection>>,
    key_prefix: String,
    ttl: Option<Duration>,
}

fn connection_url(addr: &str) -> String {
    if addr.contains("://") {
        addr.to_string()
    } else {
        format!("redis://{addr}")
    }
}

/// PSETEX rejects zero, so sub-millisecond TTLs round up.
fn ttl_millis(ttl: Duration) -> u64 {
    u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX).max(1)
}

fn map_redis_error(operation: &str, err: redis::RedisError) -> StorageError {
    let message = format!("{operation}: {err}");
    if err.is_timeout() {
        StorageError::Timeout(message)
    } else if err.is_io_error() || err.is_connection_refusal() || err.is_connection_dropped() {
        StorageError::Unavailable(message)
    } else {
        StorageError::Operation(message)
    }
}

impl RedisStorage {
    /// Connects to Redis and verifies the connection with `PING`.
    ///
    /// Fails with [`StorageError::Unavailable`] if the server cannot be
    /// reached, rejects the credentials, or does not answer within
    /// `connect_timeout`.
    pub async fn connect(config: RedisStorageConfig) -> Result<Self> {
        let url = connection_url(&config.addr);
        let client = redis::Client::open(url.as_str()).map_err(|e| {
            StorageError::Unavailable(format!("invalid redis address '{}': {e}", config.addr))
        })?;

        let password = config.password.clone();
        let db = config.db;
        let handshake = async move {
            let mut conn = client.get_multiplexed_async_connection().await?;
            if let Some(password) = password {
                redis::cmd("AUTH")
                    .arg(password)
                    .query_async::<()>(&mut conn)
                    .await?;
            }
            if db != 0 {
                redis::cmd("SELECT")
                    .arg(db)
                    .query_async::<()>(&mut conn)
                    .await?;
            }
            redis::cmd("PING").query_async::<String>(&mut conn).await?;
            Ok::<_, redis::RedisError>(conn)
        };

        let conn = match tokio::time::timeout(config.connect_timeout, handshake).await {
            Ok(Ok(conn)) => conn,
            Ok(Err(e)) => {
                return Err(StorageError::Unavailable(format!(
                    "failed to connect to Redis at {}: {e}",
                    config.addr
                )));
            }
            Err(_) => {
                return Err(StorageError::Unavailable(format!(
                    "timed out connecting to Redis at {} after {:?}",
                    config.addr, config.connect_timeout
                )));
            }
        };

        info!(addr = %config.addr, db = config.db, ttl = ?config.ttl, "connected to Redis");

        Ok(Self {
            conn: RwLock::new(Some(conn)),
            key_prefix: config.key_prefix,
            ttl: config.ttl.filter(|ttl| !ttl.is_zero()),
        })
    }

    /// Generates the Redis key for a short id.
    fn key(&self, id: &ShortId) -> String {
        format!("{}{}", self.key_prefix, id.as_str())
    }

    fn connection(&self) -> Result<MultiplexedConnection> {
        self.conn.read().clone().ok_or(StorageError::Closed)
    }
}

#[async_trait]
impl UrlStorage for RedisStorage {
    async fn set(&self, id: &ShortId, url: &str, deadline: Deadline) -> Result<()> {
        let key = self.key(id);
        let mut conn = self.connection()?;
        trace!(short_id = %id, "Storing URL in Redis");

        let write = async {
            match self.ttl {
                Some(ttl) => {
                    conn.pset_ex::<_, _, ()>(&key, url, ttl_millis(ttl))
                        .await
                }
                None => conn.set::<_, _, ()>(&key, url).await,
            }
        };

        match deadline.run(write).await {
            Ok(Ok(())) => {
                debug!(short_id = %id, "Stored URL in Redis");
                Ok(())
            }
            Ok(Err(e)) => {
                warn!(short_id = %id, error = %e, "Failed to store URL in Redis");
                Err(map_redis_error("failed to write value to Redis", e))
            }
            Err(_) => {
                warn!(short_id = %id, "Deadline elapsed storing URL in Redis");
                Err(StorageError::Timeout(format!(
                    "deadline elapsed writing key '{key}'"
                )))
            }
        }
    }

    async fn get(&self, id: &ShortId, deadline: Deadline) -> Result<Option<String>> {
        let key = self.key(id);
        let mut conn = self.connection()?;
        trace!(short_id = %id, "Fetching URL from Redis");

        match deadline.run(conn.get::<_, Option<String>>(&key)).await {
            Ok(Ok(Some(url))) => {
                debug!(short_id = %id, "Found URL in Redis");
                Ok(Some(url))
            }
            Ok(Ok(None)) => {
                trace!(short_id = %id, "No URL in Redis");
                Ok(None)
            }
            Ok(Err(e)) => {
                warn!(short_id = %id, error = %e, "Redis error on get");
                Err(map_redis_error("failed to fetch value from Redis", e))
            }
            Err(_) => {
                warn!(short_id = %id, "Deadline elapsed fetching URL from Redis");
                Err(StorageError::Timeout(format!(
                    "deadline elapsed reading key '{key}'"
                )))
            }
        }
    }

    async fn close(&self) -> Result<()> {
        // Dropping the last handle shuts the multiplexed connection down.
        if self.conn.write().take().is_some() {
            info!("closed Redis connection");
        }
        Ok(())
    }
}
