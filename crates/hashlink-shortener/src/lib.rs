//! URL shortener service implementation.
//!
//! This crate provides [`ShortenerService`], which fingerprints URLs into
//! short ids, persists them through any [`UrlStorage`](hashlink_core::UrlStorage)
//! backend, and composes full short URLs. Core types are re-exported from
//! `hashlink_core`.

pub mod service;

pub use hashlink_core::{Shortener, ShortenerError};
pub use service::ShortenerService;
