//! DynamoDB key attributes.
//!
//! Pure functions mapping an [`EntityKey`] onto the table's key schema.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use entities_core::entity::EntityKey;

// ============================================================================
// Attribute names
// ============================================================================

pub const PARTITION_KEY: &str = "PK";
pub const SORT_KEY: &str = "SK";
pub const TYPE_ATTRIBUTE: &str = "Type";
pub const DETAILS_ATTRIBUTE: &str = "Details";

/// Key condition matching exactly one self-paired item.
pub const EXACT_KEY_CONDITION: &str = "PK = :pk AND SK = :sk";

/// Primary key map for GetItem/DeleteItem.
///
/// Pattern: `{PK: ent#<id>, SK: ent#<id>}`
pub fn key_attributes(key: &EntityKey) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (
            PARTITION_KEY.to_string(),
            AttributeValue::S(key.partition_key().to_string()),
        ),
        (
            SORT_KEY.to_string(),
            AttributeValue::S(key.sort_key().to_string()),
        ),
    ])
}

/// Values for [`EXACT_KEY_CONDITION`].
pub fn exact_key_values(key: &EntityKey) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (
            ":pk".to_string(),
            AttributeValue::S(key.partition_key().to_string()),
        ),
        (
            ":sk".to_string(),
            AttributeValue::S(key.sort_key().to_string()),
        ),
    ])
}
