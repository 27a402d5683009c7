//! Entity key derivation.
//!
//! Every entity lives in its own single-item partition: the partition key and
//! the sort key are the same canonical string, `ent#<id>`.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Prefix shared by every entity key.
pub const ENTITY_PREFIX: &str = "ent#";

/// Canonical storage key of an entity.
///
/// Pattern: `ent#<id>`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityKey(String);

impl EntityKey {
    /// Builds the key for a known id.
    pub fn for_id(id: &str) -> Self {
        Self(format!("{ENTITY_PREFIX}{id}"))
    }

    /// Wraps a raw key read back from the store.
    ///
    /// No prefix check is done; foreign items in the table keep their key.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Partition key value (`PK`).
    pub fn partition_key(&self) -> &str {
        &self.0
    }

    /// Sort key value (`SK`). Always equal to the partition key.
    pub fn sort_key(&self) -> &str {
        &self.0
    }

    /// The id part of the key, if the key carries the entity prefix.
    pub fn id(&self) -> Option<&str> {
        self.0.strip_prefix(ENTITY_PREFIX)
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Generates a fresh entity id (UUID v4).
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// Derives the canonical key for an optional id.
///
/// A missing id is replaced with a freshly generated one.
pub fn derive_key(id: Option<&str>) -> EntityKey {
    match id {
        Some(id) => EntityKey::for_id(id),
        None => EntityKey::for_id(&generate_id()),
    }
}
