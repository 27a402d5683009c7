//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! entity records. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use entities_core::entity::{EntityKey, EntityRecord};
use entities_core::storage::StoreError;
use serde_json::{Map, Number, Value};

use super::keys::{DETAILS_ATTRIBUTE, PARTITION_KEY, SORT_KEY, TYPE_ATTRIBUTE};

// ============================================================================
// Record conversions
// ============================================================================

/// Convert an EntityRecord to a DynamoDB item.
pub fn record_to_item(record: &EntityRecord) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    // Keys
    item.insert(
        PARTITION_KEY.to_string(),
        AttributeValue::S(record.key.partition_key().to_string()),
    );
    item.insert(
        SORT_KEY.to_string(),
        AttributeValue::S(record.key.sort_key().to_string()),
    );

    // Entity type
    if let Some(kind) = &record.kind {
        item.insert(TYPE_ATTRIBUTE.to_string(), AttributeValue::S(kind.clone()));
    }

    // Data
    item.insert(
        DETAILS_ATTRIBUTE.to_string(),
        json_to_attribute(&record.details),
    );

    item
}

/// Convert a DynamoDB item to an EntityRecord.
///
/// Only `PK` and `Details` are required; reads never look at the rest.
pub fn item_to_record(item: &HashMap<String, AttributeValue>) -> Result<EntityRecord, StoreError> {
    let key = get_string(item, PARTITION_KEY)?;
    let details = item
        .get(DETAILS_ATTRIBUTE)
        .ok_or_else(|| StoreError::InvalidData(format!("Missing field: {DETAILS_ATTRIBUTE}")))
        .and_then(attribute_to_json)?;

    Ok(EntityRecord {
        key: EntityKey::from_raw(key),
        kind: get_optional_string(item, TYPE_ATTRIBUTE),
        details,
    })
}

// ============================================================================
// JSON <-> AttributeValue
// ============================================================================

/// Convert a JSON value to its structural DynamoDB counterpart.
pub fn json_to_attribute(value: &Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(*b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s.clone()),
        Value::Array(items) => AttributeValue::L(items.iter().map(json_to_attribute).collect()),
        Value::Object(map) => AttributeValue::M(
            map.iter()
                .map(|(k, v)| (k.clone(), json_to_attribute(v)))
                .collect(),
        ),
    }
}

/// Convert a DynamoDB attribute back to JSON.
///
/// Numbers parse as integers first and fall back to floats. Binary and set
/// attributes have no JSON counterpart and are rejected.
pub fn attribute_to_json(attr: &AttributeValue) -> Result<Value, StoreError> {
    match attr {
        AttributeValue::S(s) => Ok(Value::String(s.clone())),
        AttributeValue::N(n) => parse_number(n).map(Value::Number),
        AttributeValue::Bool(b) => Ok(Value::Bool(*b)),
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::L(items) => items
            .iter()
            .map(attribute_to_json)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        AttributeValue::M(map) => map
            .iter()
            .map(|(k, v)| attribute_to_json(v).map(|v| (k.clone(), v)))
            .collect::<Result<Map<_, _>, _>>()
            .map(Value::Object),
        other => Err(StoreError::InvalidData(format!(
            "Unsupported attribute type: {other:?}"
        ))),
    }
}

fn parse_number(n: &str) -> Result<Number, StoreError> {
    if let Ok(i) = n.parse::<i64>() {
        return Ok(i.into());
    }
    if let Ok(u) = n.parse::<u64>() {
        return Ok(u.into());
    }
    n.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .ok_or_else(|| StoreError::InvalidData(format!("Invalid number: {n}")))
}

// ============================================================================
// Helper functions
// ============================================================================

fn get_string(item: &HashMap<String, AttributeValue>, key: &str) -> Result<String, StoreError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .cloned()
        .ok_or_else(|| StoreError::InvalidData(format!("Missing field: {key}")))
}

fn get_optional_string(item: &HashMap<String, AttributeValue>, key: &str) -> Option<String> {
    item.get(key).and_then(|v| v.as_s().ok()).cloned()
}
