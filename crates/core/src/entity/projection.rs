//! Response projection.
//!
//! Reads only ever expose the caller payload; keys and the discriminator stay
//! inside the store.

use serde_json::Value;

use super::types::EntityRecord;

/// Projects a single record to its caller-visible payload.
pub fn project_record(record: EntityRecord) -> Value {
    record.details
}

/// Projects records to their payloads, keeping store order.
pub fn project_details(records: impl IntoIterator<Item = EntityRecord>) -> Vec<Value> {
    records.into_iter().map(project_record).collect()
}
