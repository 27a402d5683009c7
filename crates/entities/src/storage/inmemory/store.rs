//! In-memory store implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use entities_core::entity::{EntityKey, EntityRecord};
use entities_core::storage::{EntityStore, Result};

/// In-memory store backend.
///
/// Each call takes the lock once, which gives the same per-item atomicity the
/// real table offers.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    items: Arc<RwLock<HashMap<EntityKey, EntityRecord>>>,
}

impl InMemoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored items.
    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }
}

#[async_trait]
impl EntityStore for InMemoryStore {
    async fn put_item(&self, record: &EntityRecord) -> Result<()> {
        let mut items = self.items.write().await;
        items.insert(record.key.clone(), record.clone());
        Ok(())
    }

    async fn delete_item(&self, key: &EntityKey) -> Result<()> {
        let mut items = self.items.write().await;
        items.remove(key);
        Ok(())
    }

    async fn query_exact(&self, key: &EntityKey) -> Result<Vec<EntityRecord>> {
        let items = self.items.read().await;
        Ok(items.get(key).cloned().into_iter().collect())
    }

    async fn scan_all(&self) -> Result<Vec<EntityRecord>> {
        let items = self.items.read().await;
        Ok(items.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn record(id: &str, details: serde_json::Value) -> EntityRecord {
        EntityRecord::new(EntityKey::for_id(id), details)
    }

    #[tokio::test]
    async fn test_put_then_query() {
        let store = InMemoryStore::new();
        store.put_item(&record("1", json!({"a": 1}))).await.unwrap();

        let found = store.query_exact(&EntityKey::for_id("1")).await.unwrap();
        assert_eq!(found, vec![record("1", json!({"a": 1}))]);
    }

    #[tokio::test]
    async fn test_put_overwrites() {
        let store = InMemoryStore::new();
        store.put_item(&record("1", json!({"a": 1}))).await.unwrap();
        store.put_item(&record("1", json!({"b": 2}))).await.unwrap();

        let found = store.query_exact(&EntityKey::for_id("1")).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].details, json!({"b": 2}));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_query_missing_is_empty() {
        let store = InMemoryStore::new();
        let found = store.query_exact(&EntityKey::for_id("nope")).await.unwrap();
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = InMemoryStore::new();
        store.put_item(&record("1", json!({}))).await.unwrap();

        store.delete_item(&EntityKey::for_id("1")).await.unwrap();
        store.delete_item(&EntityKey::for_id("1")).await.unwrap();

        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_scan_returns_everything() {
        let store = InMemoryStore::new();
        store.put_item(&record("1", json!({"n": 1}))).await.unwrap();
        store.put_item(&record("2", json!({"n": 2}))).await.unwrap();

        let mut details: Vec<_> = store
            .scan_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.details["n"].as_i64().unwrap())
            .collect();
        details.sort();

        assert_eq!(details, vec![1, 2]);
    }
}
