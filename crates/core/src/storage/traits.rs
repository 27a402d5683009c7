use async_trait::async_trait;

use crate::entity::{EntityKey, EntityRecord};

use super::Result;

/// Single-table entity store.
///
/// Every operation is a single store call. Writes overwrite unconditionally and
/// deletes succeed whether or not the item existed.
#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Writes a record, replacing any item at the same key.
    async fn put_item(&self, record: &EntityRecord) -> Result<()>;

    /// Deletes the item at `key`, if any.
    async fn delete_item(&self, key: &EntityKey) -> Result<()>;

    /// Returns the items whose partition and sort key both equal `key`.
    async fn query_exact(&self, key: &EntityKey) -> Result<Vec<EntityRecord>>;

    /// Returns the items of a single, unpaginated scan.
    ///
    /// Backends with page limits return only the first page.
    async fn scan_all(&self) -> Result<Vec<EntityRecord>>;
}
