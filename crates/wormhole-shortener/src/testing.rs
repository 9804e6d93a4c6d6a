//! Test doubles for the operations.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use parking_lot::Mutex;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use wormhole_core::repository::Result;
use wormhole_core::{
    Alias, DeleteRepository, ReadRepository, RecordId, StorageError, WriteRepository,
};
use wormhole_generator::Generator;

/// Hands out a fixed sequence of aliases.
#[derive(Debug, Clone)]
pub(crate) struct ScriptedGenerator {
    script: Arc<Mutex<VecDeque<String>>>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedGenerator {
    pub(crate) fn new<const N: usize>(aliases: [&str; N]) -> Self {
        Self {
            script: Arc::new(Mutex::new(
                aliases.iter().map(|a| a.to_string()).collect(),
            )),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Generator for ScriptedGenerator {
    fn generate(&self) -> Alias {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self
            .script
            .lock()
            .pop_front()
            .expect("scripted generator ran out of aliases");
        Alias::new_unchecked(next)
    }
}

/// A store that counts calls and can be told to fail.
#[derive(Debug, Default)]
pub(crate) struct CountingStore {
    records: Mutex<HashMap<String, String>>,
    next_id: AtomicI64,
    inserts: AtomicUsize,
    gets: AtomicUsize,
    deletes: AtomicUsize,
    failure: Mutex<Option<StorageError>>,
    cancel_after_insert: Mutex<Option<CancellationToken>>,
}

impl CountingStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Puts a record in place without counting it as an insert.
    pub(crate) fn occupy(&self, alias: &str) {
        self.records
            .lock()
            .insert(alias.to_string(), "https://occupied.example".to_string());
    }

    pub(crate) fn fail_with(&self, err: StorageError) {
        *self.failure.lock() = Some(err);
    }

    pub(crate) fn cancel_after_insert(&self, token: CancellationToken) {
        *self.cancel_after_insert.lock() = Some(token);
    }

    pub(crate) fn inserts(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }

    pub(crate) fn gets(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub(crate) fn deletes(&self) -> usize {
        self.deletes.load(Ordering::SeqCst)
    }

    pub(crate) fn len(&self) -> usize {
        self.records.lock().len()
    }

    fn injected_failure(&self) -> Option<StorageError> {
        self.failure.lock().clone()
    }
}

#[async_trait]
impl WriteRepository for CountingStore {
    async fn insert(&self, alias: &Alias, url: &str) -> Result<RecordId> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        if let Some(token) = self.cancel_after_insert.lock().as_ref() {
            token.cancel();
        }
        if let Some(err) = self.injected_failure() {
            return Err(err);
        }

        let mut records = self.records.lock();
        if records.contains_key(alias.as_str()) {
            return Err(StorageError::Conflict(alias.to_string()));
        }
        records.insert(alias.to_string(), url.to_string());
        Ok(RecordId(self.next_id.fetch_add(1, Ordering::SeqCst) + 1))
    }
}

#[async_trait]
impl ReadRepository for CountingStore {
    async fn get(&self, alias: &Alias) -> Result<String> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.injected_failure() {
            return Err(err);
        }
        self.records
            .lock()
            .get(alias.as_str())
            .cloned()
            .ok_or_else(|| StorageError::NotFound(alias.to_string()))
    }
}

#[async_trait]
impl DeleteRepository for CountingStore {
    async fn delete(&self, alias: &Alias) -> Result<()> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.injected_failure() {
            return Err(err);
        }
        self.records
            .lock()
            .remove(alias.as_str())
            .map(|_| ())
            .ok_or_else(|| StorageError::NotFound(alias.to_string()))
    }
}
