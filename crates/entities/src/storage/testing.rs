//! Store doubles for handler tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use entities_core::entity::{EntityKey, EntityRecord};
use entities_core::storage::{EntityStore, Result, StoreError};

use super::InMemoryStore;

/// Wraps an in-memory store and counts every call that reaches it.
#[derive(Debug, Default)]
pub struct CountingStore {
    inner: InMemoryStore,
    puts: AtomicUsize,
    deletes: AtomicUsize,
    queries: AtomicUsize,
    scans: AtomicUsize,
}

impl CountingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn puts(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }

    pub fn deletes(&self) -> usize {
        self.deletes.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    pub fn scans(&self) -> usize {
        self.scans.load(Ordering::SeqCst)
    }

    /// Total number of store calls of any kind.
    pub fn calls(&self) -> usize {
        self.puts() + self.deletes() + self.queries() + self.scans()
    }
}

#[async_trait]
impl EntityStore for CountingStore {
    async fn put_item(&self, record: &EntityRecord) -> Result<()> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        self.inner.put_item(record).await
    }

    async fn delete_item(&self, key: &EntityKey) -> Result<()> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        self.inner.delete_item(key).await
    }

    async fn query_exact(&self, key: &EntityKey) -> Result<Vec<EntityRecord>> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.inner.query_exact(key).await
    }

    async fn scan_all(&self) -> Result<Vec<EntityRecord>> {
        self.scans.fetch_add(1, Ordering::SeqCst);
        self.inner.scan_all().await
    }
}

/// A store whose every call fails.
#[derive(Debug, Default)]
pub struct FailingStore;

fn unavailable() -> StoreError {
    StoreError::ConnectionFailed("store unavailable".to_string())
}

#[async_trait]
impl EntityStore for FailingStore {
    async fn put_item(&self, _record: &EntityRecord) -> Result<()> {
        Err(unavailable())
    }

    async fn delete_item(&self, _key: &EntityKey) -> Result<()> {
        Err(unavailable())
    }

    async fn query_exact(&self, _key: &EntityKey) -> Result<Vec<EntityRecord>> {
        Err(unavailable())
    }

    async fn scan_all(&self) -> Result<Vec<EntityRecord>> {
        Err(unavailable())
    }
}
