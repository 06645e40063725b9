use thiserror::Error;

/// Failure starting a fixture or talking to it once it runs.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("fixture container failed: {0}")]
    Start(#[from] testcontainers::TestcontainersError),
    #[error("fixture redis unreachable: {0}")]
    Connect(#[from] redis::RedisError),
}

pub type Result<T> = std::result::Result<T, FixtureError>;
