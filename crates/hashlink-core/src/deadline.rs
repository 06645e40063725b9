use std::future::Future;
use std::time::Duration;
use tokio::time::error::Elapsed;
use tokio::time::Instant;

/// An optional absolute cutoff carried by every storage and shortener call.
///
/// Networked backends must not block past the cutoff. In-process backends
/// perform no I/O and may ignore it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Deadline(Option<Instant>);

impl Deadline {
    /// A deadline that never elapses.
    pub const fn none() -> Self {
        Self(None)
    }

    /// A deadline `timeout` from now.
    pub fn after(timeout: Duration) -> Self {
        Self(Some(Instant::now() + timeout))
    }

    /// A deadline at the given instant.
    pub fn at(instant: Instant) -> Self {
        Self(Some(instant))
    }

    /// Returns the cutoff, if any.
    pub fn instant(&self) -> Option<Instant> {
        self.0
    }

    /// Returns `true` if the cutoff has already passed.
    pub fn is_elapsed(&self) -> bool {
        self.0.is_some_and(|instant| Instant::now() >= instant)
    }

    /// Drives `future` to completion, or fails once the cutoff passes.
    pub async fn run<F: Future>(self, future: F) -> Result<F::Output, Elapsed> {
        match self.0 {
            Some(instant) => tokio::time::timeout_at(instant, future).await,
            None => Ok(future.await),
        }
    }
}
