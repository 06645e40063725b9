//! HTTP surface of the Hashlink URL shortener.
//!
//! A single stateless adapter over a [`Shortener`](hashlink_core::Shortener):
//! `POST /` creates a short URL from the raw request body, `GET /<id>`
//! answers with a `301` to the stored URL.

pub mod app;
pub mod error;
pub mod handlers;
pub mod state;

pub use app::App;
pub use error::AppError;
pub use state::{AppState, DEFAULT_MAX_BODY_BYTES, DEFAULT_REQUEST_TIMEOUT};
