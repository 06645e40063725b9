mod cli;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use hashlink_core::UrlStorage;
use hashlink_gateway::{App, AppState};
use hashlink_shortener::ShortenerService;
use hashlink_storage::{InMemoryStorage, RedisStorage, RedisStorageConfig};
use tracing::{info, warn};

use crate::cli::{StorageBackendArg, CLI};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::parse();

    hashlink_telemetry::init(config.log_format)?;

    info!(
        listen_addr = %config.listen_addr,
        public_host = %config.public_host,
        storage_backend = %config.storage,
        "starting URL shortener"
    );

    match config.storage {
        StorageBackendArg::InMemory => run_server(&config, InMemoryStorage::new()).await,
        StorageBackendArg::Redis => {
            let addr = config
                .redis_addr
                .clone()
                .context("redis address is required when storage backend is redis")?;
            let storage = RedisStorage::connect(
                RedisStorageConfig::builder()
                    .addr(addr)
                    .password(config.redis_password.clone())
                    .db(config.redis_db)
                    .ttl(Duration::from_secs(config.redis_ttl_secs))
                    .key_prefix(config.redis_key_prefix.clone())
                    .build(),
            )
            .await
            .context("failed to initialise Redis storage")?;
            run_server(&config, storage).await
        }
    }
}

async fn run_server<S: UrlStorage>(config: &CLI, storage: S) -> anyhow::Result<()> {
    let service = Arc::new(ShortenerService::new(storage, config.public_host.clone()));
    let state = AppState::new(
        service.clone(),
        Duration::from_millis(config.request_timeout_ms),
    )
    .with_max_body_bytes(config.max_body_bytes);

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    info!(
        listen_addr = %listener.local_addr()?,
        public_host = %service.host(),
        max_body_bytes = config.max_body_bytes,
        "URL Shortener serving"
    );

    axum::serve(listener, App::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("shutting down, closing storage");
    service.storage().close().await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
