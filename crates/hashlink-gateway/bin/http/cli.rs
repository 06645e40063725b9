use clap::{Parser, ValueEnum};
use hashlink_telemetry::LogFormat;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "HASHLINK_LISTEN_ADDR";
pub const PUBLIC_HOST_ENV: &str = "SHORTENER_HOST";
pub const STORAGE_BACKEND_ENV: &str = "HASHLINK_STORAGE_BACKEND";
pub const REDIS_ADDR_ENV: &str = "REDIS_ADDR";
pub const REDIS_PASSWORD_ENV: &str = "REDIS_PASSWORD";
pub const REDIS_DB_ENV: &str = "REDIS_DB";
pub const REDIS_TTL_SECS_ENV: &str = "HASHLINK_REDIS_TTL_SECS";
pub const REDIS_KEY_PREFIX_ENV: &str = "HASHLINK_REDIS_KEY_PREFIX";
pub const REQUEST_TIMEOUT_MS_ENV: &str = "HASHLINK_REQUEST_TIMEOUT_MS";
pub const MAX_BODY_BYTES_ENV: &str = "HASHLINK_MAX_BODY_BYTES";
pub const LOG_FORMAT_ENV: &str = "HASHLINK_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_PUBLIC_HOST: &str = "http://localhost:3000";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    #[value(name = "in-memory")]
    InMemory,
    #[value(name = "redis")]
    Redis,
}

impl Display for StorageBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendArg::InMemory => write!(f, "in-memory"),
            StorageBackendArg::Redis => write!(f, "redis"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "hashlink-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Base of every short URL handed out, without a trailing slash.
    #[arg(long, env = PUBLIC_HOST_ENV, default_value = DEFAULT_PUBLIC_HOST)]
    pub public_host: String,

    #[arg(
        long,
        env = STORAGE_BACKEND_ENV,
        value_enum,
        default_value_t = StorageBackendArg::InMemory
    )]
    pub storage: StorageBackendArg,

    #[arg(long, env = REDIS_ADDR_ENV, required_if_eq("storage", "redis"))]
    pub redis_addr: Option<String>,

    #[arg(long, env = REDIS_PASSWORD_ENV, hide_env_values = true)]
    pub redis_password: Option<String>,

    #[arg(long, env = REDIS_DB_ENV, default_value_t = 0)]
    pub redis_db: i64,

    /// Expiry of stored mappings in seconds, 0 keeps them forever.
    #[arg(long, env = REDIS_TTL_SECS_ENV, default_value_t = 0)]
    pub redis_ttl_secs: u64,

    #[arg(long, env = REDIS_KEY_PREFIX_ENV, default_value = hashlink_storage::DEFAULT_KEY_PREFIX)]
    pub redis_key_prefix: String,

    #[arg(long, env = REQUEST_TIMEOUT_MS_ENV, default_value_t = 5_000)]
    pub request_timeout_ms: u64,

    /// Largest accepted `POST /` body, larger ones are answered with 413.
    #[arg(long, env = MAX_BODY_BYTES_ENV, default_value_t = hashlink_gateway::DEFAULT_MAX_BODY_BYTES)]
    pub max_body_bytes: usize,

    #[arg(long, env = LOG_FORMAT_ENV, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}
