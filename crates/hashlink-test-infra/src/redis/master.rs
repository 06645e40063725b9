use crate::error::Result;
use testcontainers::core::{IntoContainerPort, WaitFor};
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, GenericImage, ImageExt};

const REDIS_PORT: u16 = 6379;

/// A single disposable Redis server. The container stops when dropped.
pub struct RedisMaster {
    container: ContainerAsync<GenericImage>,
    password: Option<String>,
}

fn redis_image() -> GenericImage {
    GenericImage::new("redis", "8.6.0")
        .with_exposed_port(REDIS_PORT.tcp())
        .with_wait_for(WaitFor::message_on_stdout("Ready to accept connections"))
}

impl RedisMaster {
    /// Starts a Redis server without authentication.
    pub async fn new() -> Result<Self> {
        let container = redis_image().start().await?;
        Ok(Self {
            container,
            password: None,
        })
    }

    /// Starts a Redis server that requires `password`.
    pub async fn with_password(password: impl Into<String>) -> Result<Self> {
        let password = password.into();
        let container = redis_image()
            .with_cmd(["redis-server", "--requirepass", password.as_str()])
            .start()
            .await?;
        Ok(Self {
            container,
            password: Some(password),
        })
    }

    pub async fn host(&self) -> Result<String> {
        let host = self.container.get_host().await?.to_string();

        Ok(match host.as_str() {
            "localhost" => String::from("127.0.0.1"),
            _ => host,
        })
    }

    pub async fn port(&self) -> Result<u16> {
        Ok(self.container.get_host_port_ipv4(REDIS_PORT).await?)
    }

    /// Returns `host:port` as reachable from the test process.
    pub async fn addr(&self) -> Result<String> {
        Ok(format!("{}:{}", self.host().await?, self.port().await?))
    }

    /// Opens a raw connection, for asserting on keys directly.
    pub async fn connection(&self) -> Result<redis::aio::MultiplexedConnection> {
        let url = match &self.password {
            Some(password) => format!("redis://:{}@{}", password, self.addr().await?),
            None => format!("redis://{}", self.addr().await?),
        };
        let client = redis::Client::open(url.as_str())?;
        Ok(client.get_multiplexed_async_connection().await?)
    }
}
