//! Core types and traits for the Wormhole URL shortener.
//!
//! This crate provides the alias type, the error taxonomy, the storage
//! capability traits and the [`Shortener`] operation surface shared by the
//! storage engines, the shortener service and the HTTP gateway.

pub mod alias;
pub mod error;
pub mod repository;
pub mod shortener;

pub use alias::Alias;
pub use error::{ErrorKind, ShortenerError, StorageError};
pub use repository::{
    DeleteRepository, ReadRepository, RecordId, Repository, UrlRecord, WriteRepository,
};
pub use shortener::{SaveParams, SavedUrl, Shortener};
