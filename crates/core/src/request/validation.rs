//! Request validation.
//!
//! Each operation checks its preconditions here and gets back exactly what it
//! needs to talk to the store. Nothing in this module touches the store, so a
//! rejected request can never cause a store call.

use serde_json::Value;

use crate::entity::{derive_key, EntityKey, EntityRecord};

use super::error::RequestError;
use super::types::{ApiRequest, HttpMethod};

/// A validated create request.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateEntity {
    /// Caller-supplied id, if the body carried one.
    pub id: Option<String>,
    /// The full body, stored verbatim.
    pub payload: Value,
}

impl CreateEntity {
    /// Resolve the key (generating an id when needed) and build the record.
    pub fn into_record(self) -> EntityRecord {
        let key = derive_key(self.id.as_deref());
        EntityRecord::new(key, self.payload)
    }
}

fn require_method(request: &ApiRequest, expected: HttpMethod) -> Result<(), RequestError> {
    match request.method() {
        Some(method) if method == expected => Ok(()),
        _ => Err(RequestError::MethodNotAllowed {
            expected: expected.as_str(),
            actual: request.http_method.clone(),
        }),
    }
}

fn require_path_id(request: &ApiRequest) -> Result<EntityKey, RequestError> {
    if request.path_parameters.is_none() {
        return Err(RequestError::MissingPathParameters);
    }
    request
        .path_id()
        .map(|id| derive_key(Some(id)))
        .ok_or(RequestError::MissingId)
}

/// Extract the id from a create body.
///
/// String ids are used as-is; any other JSON value is rendered as JSON text
/// (`42`, `null`, `true`).
fn body_id(payload: &Value) -> Option<String> {
    match payload.get("id")? {
        Value::String(id) => Some(id.clone()),
        other => Some(other.to_string()),
    }
}

/// Validate a create request: `POST` with a JSON body.
pub fn validate_create(request: &ApiRequest) -> Result<CreateEntity, RequestError> {
    require_method(request, HttpMethod::Post)?;
    let body = request.body.as_deref().ok_or(RequestError::MissingBody)?;
    let payload: Value =
        serde_json::from_str(body).map_err(|e| RequestError::InvalidBody(e.to_string()))?;

    Ok(CreateEntity {
        id: body_id(&payload),
        payload,
    })
}

/// Build the record for a validated create request.
pub fn create_record(request: &ApiRequest) -> Result<EntityRecord, RequestError> {
    validate_create(request).map(CreateEntity::into_record)
}

/// Validate a get request: `GET` with an `id` path parameter.
pub fn validate_get(request: &ApiRequest) -> Result<EntityKey, RequestError> {
    require_method(request, HttpMethod::Get)?;
    require_path_id(request)
}

/// Validate a list request: `GET` with path parameters present.
///
/// The parameter values are ignored; only their presence is checked.
pub fn validate_list(request: &ApiRequest) -> Result<(), RequestError> {
    require_method(request, HttpMethod::Get)?;
    if request.path_parameters.is_none() {
        return Err(RequestError::MissingPathParameters);
    }
    Ok(())
}

/// Validate a delete request: `DELETE` with an `id` path parameter.
pub fn validate_delete(request: &ApiRequest) -> Result<EntityKey, RequestError> {
    require_method(request, HttpMethod::Delete)?;
    require_path_id(request)
}
