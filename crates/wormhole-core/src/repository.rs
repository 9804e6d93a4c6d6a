use crate::alias::Alias;
use crate::error::StorageError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::sync::Arc;

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Store-assigned identity of a record. Never reused or reassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub i64);

impl Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored URL record in the repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlRecord {
    pub id: RecordId,
    pub alias: Alias,
    /// The target URL, stored exactly as it was saved.
    pub url: String,
}

/// A read-only view of a repository.
///
/// This trait provides only the read operations from [`Repository`],
/// allowing the resolve path to have read-only access.
#[async_trait]
pub trait ReadRepository: Send + Sync + 'static {
    /// Retrieves the URL stored under `alias`.
    /// Returns `Err(NotFound)` if no active record exists.
    async fn get(&self, alias: &Alias) -> Result<String>;
}

#[async_trait]
pub trait WriteRepository: Send + Sync + 'static {
    /// Inserts a new record and returns its identity.
    /// Returns `Err(Conflict)` if the alias already exists.
    ///
    /// The uniqueness check and the insert happen as one atomic step:
    /// concurrent inserts of the same alias produce exactly one success.
    async fn insert(&self, alias: &Alias, url: &str) -> Result<RecordId>;
}

#[async_trait]
pub trait DeleteRepository: Send + Sync + 'static {
    /// Deletes the record stored under `alias`.
    /// Returns `Err(NotFound)` if no active record exists.
    async fn delete(&self, alias: &Alias) -> Result<()>;
}

/// A store supporting every operation on the alias relation.
pub trait Repository: ReadRepository + WriteRepository + DeleteRepository {}

impl<T: ReadRepository + WriteRepository + DeleteRepository> Repository for T {}

#[async_trait]
impl<T: ReadRepository + ?Sized> ReadRepository for Arc<T> {
    async fn get(&self, alias: &Alias) -> Result<String> {
        (**self).get(alias).await
    }
}

#[async_trait]
impl<T: WriteRepository + ?Sized> WriteRepository for Arc<T> {
    async fn insert(&self, alias: &Alias, url: &str) -> Result<RecordId> {
        (**self).insert(alias, url).await
    }
}

#[async_trait]
impl<T: DeleteRepository + ?Sized> DeleteRepository for Arc<T> {
    async fn delete(&self, alias: &Alias) -> Result<()> {
        (**self).delete(alias).await
    }
}
