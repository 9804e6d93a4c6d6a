use async_trait::async_trait;
use dashmap::mapref::entry::Entry as MapEntry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use wormhole_core::error::StorageError;
#[cfg(test)]
use wormhole_core::repository::UrlRecord;
use wormhole_core::repository::{
    DeleteRepository, ReadRepository, RecordId, Result, WriteRepository,
};
use wormhole_core::Alias;

/// In-memory storage entry for a URL mapping.
#[derive(Debug, Clone)]
struct Entry {
    id: RecordId,
    url: String,
}

/// In-memory implementation of the repository traits using DashMap.
///
/// DashMap provides better concurrency than RwLock<HashMap> because it
/// uses sharded locks, allowing concurrent reads and writes to different
/// buckets without blocking.
#[derive(Debug)]
pub struct InMemoryRepository {
    storage: DashMap<String, Entry>,
    next_id: AtomicI64,
}

impl InMemoryRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of active records.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Snapshot of every active record, ordered by id.
    #[cfg(test)]
    pub(crate) fn records(&self) -> Vec<UrlRecord> {
        let mut records: Vec<UrlRecord> = self
            .storage
            .iter()
            .map(|item| UrlRecord {
                id: item.value().id,
                alias: Alias::new_unchecked(item.key().clone()),
                url: item.value().url.clone(),
            })
            .collect();
        records.sort_by_key(|record| record.id);
        records
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReadRepository for InMemoryRepository {
    async fn get(&self, alias: &Alias) -> Result<String> {
        self.storage
            .get(alias.as_str())
            .map(|entry| entry.url.clone())
            .ok_or_else(|| StorageError::NotFound(alias.to_string()))
    }
}

#[async_trait]
impl WriteRepository for InMemoryRepository {
    async fn insert(&self, alias: &Alias, url: &str) -> Result<RecordId> {
        // The entry guard holds the shard lock, so check-and-insert is atomic.
        match self.storage.entry(alias.as_str().to_owned()) {
            MapEntry::Occupied(_) => Err(StorageError::Conflict(alias.to_string())),
            MapEntry::Vacant(vacant) => {
                let id = RecordId(self.next_id.fetch_add(1, Ordering::Relaxed));
                vacant.insert(Entry {
                    id,
                    url: url.to_owned(),
                });
                Ok(id)
            }
        }
    }
}

#[async_trait]
impl DeleteRepository for InMemoryRepository {
    async fn delete(&self, alias: &Alias) -> Result<()> {
        self.storage
            .remove(alias.as_str())
            .map(|_| ())
            .ok_or_else(|| StorageError::NotFound(alias.to_string()))
    }
}
