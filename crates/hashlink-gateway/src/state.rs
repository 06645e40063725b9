use std::sync::Arc;
use std::time::Duration;

use hashlink_core::{Deadline, Shortener};

/// Default time budget for the storage work of a single request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Largest `POST /` body read in full; bigger bodies get `413`.
pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    shortener: Arc<dyn Shortener>,
    request_timeout: Duration,
    max_body_bytes: usize,
}

impl AppState {
    pub fn new(shortener: Arc<dyn Shortener>, request_timeout: Duration) -> Self {
        Self {
            shortener,
            request_timeout,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }

    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }

    pub fn max_body_bytes(&self) -> usize {
        self.max_body_bytes
    }

    pub fn shortener(&self) -> &dyn Shortener {
        self.shortener.as_ref()
    }

    /// A fresh deadline for the request being served.
    pub fn deadline(&self) -> Deadline {
        Deadline::after(self.request_timeout)
    }
}
