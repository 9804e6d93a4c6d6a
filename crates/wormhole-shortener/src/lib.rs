//! URL shortener service implementation.
//!
//! This crate provides the save, resolve and remove operations and the
//! [`ShortenerService`] that combines them behind the `Shortener` trait.
//! Core types are re-exported from `wormhole_core`.

pub mod remove;
pub mod resolve;
pub mod save;
pub mod service;

#[cfg(test)]
mod testing;

pub use remove::RemoveUrl;
pub use resolve::ResolveUrl;
pub use save::{validate_url, RetryPolicy, SaveUrl, DEFAULT_MAX_ATTEMPTS};
pub use service::ShortenerService;
pub use wormhole_core::{ErrorKind, SaveParams, SavedUrl, Shortener, ShortenerError};
