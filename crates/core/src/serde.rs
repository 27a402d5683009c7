//! Serde helpers for inbound invocation events.
//!
//! API gateways send `null` for absent structures instead of omitting the
//! key, so "present but null" and "missing" have to be told apart.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};

/// Deserialize a map whose presence matters more than its content.
///
/// Use together with `#[serde(default)]`: a missing key stays `None`, while a
/// key carrying `null` becomes `Some` of an empty map.
pub fn deserialize_present_map<'de, D>(
    deserializer: D,
) -> Result<Option<HashMap<String, String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let map: Option<HashMap<String, String>> = Option::deserialize(deserializer)?;
    Ok(Some(map.unwrap_or_default()))
}
