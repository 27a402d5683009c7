use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::keys::EntityKey;

/// Discriminator written to the `Type` attribute of every entity item.
pub const ENTITY_KIND: &str = "Entity";

/// A stored entity item.
///
/// `key` is used for both the partition and the sort key. `details` is the
/// caller payload, stored and returned verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub key: EntityKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub details: Value,
}

impl EntityRecord {
    /// Creates a record tagged with the entity discriminator.
    pub fn new(key: EntityKey, details: Value) -> Self {
        Self {
            key,
            kind: Some(ENTITY_KIND.to_string()),
            details,
        }
    }
}
