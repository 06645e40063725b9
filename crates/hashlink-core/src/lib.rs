//! Core types and traits for the Hashlink URL shortener.
//!
//! This crate provides the content-addressed [`ShortId`], the per-call
//! [`Deadline`], the error taxonomy, and the [`UrlStorage`] / [`Shortener`]
//! contracts shared by the storage backends, the service, and the gateway.

pub mod deadline;
pub mod error;
pub mod short_id;
pub mod shortener;
pub mod storage;

pub use deadline::Deadline;
pub use error::{CoreError, ShortenerError, StorageError};
pub use short_id::ShortId;
pub use shortener::Shortener;
pub use storage::UrlStorage;
