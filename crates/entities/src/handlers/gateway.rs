//! REST adapter.
//!
//! Translates plain HTTP requests into gateway events, the same way an API
//! gateway would, and the function responses back into HTTP.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderName, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
};

use entities_core::request::{ApiRequest, ApiResponse};

use super::create::CREATE_ENTITY;
use super::delete::DELETE_ENTITY;
use super::get::GET_ENTITY;
use super::list::LIST_ENTITIES;
use crate::{error::AppError, state::AppState};

/// Build the event for an HTTP request.
///
/// Path parameters are always present (empty for collection routes). An empty
/// body, or one that is not valid UTF-8, is sent as no body at all.
pub fn to_event(method: &Method, id: Option<String>, body: &[u8]) -> ApiRequest {
    let mut request = ApiRequest::new(method.as_str()).with_path_parameters();
    if let Some(id) = id {
        request = request.with_id(id);
    }
    if !body.is_empty() {
        match std::str::from_utf8(body) {
            Ok(body) => request = request.with_body(body),
            Err(e) => tracing::info!(error = %e, "Dropping request body that is not UTF-8"),
        }
    }
    request
}

/// Turn a function response into an HTTP response.
pub fn into_http_response(response: ApiResponse) -> Response {
    let status =
        StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let mut http = (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        response.body,
    )
        .into_response();

    for (name, value) in response.headers {
        match (HeaderName::try_from(name), HeaderValue::try_from(value)) {
            (Ok(name), Ok(value)) => {
                http.headers_mut().insert(name, value);
            }
            _ => tracing::warn!("Dropping invalid response header"),
        }
    }

    http
}

async fn dispatch(
    state: &AppState,
    function: &str,
    request: ApiRequest,
) -> Result<Response, AppError> {
    let response = state.invoke(function, request).await?;
    Ok(into_http_response(response))
}

/// Create an entity (POST /entities).
pub async fn create_entity(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> Result<Response, AppError> {
    dispatch(&state, CREATE_ENTITY, to_event(&method, None, &body)).await
}

/// List entities (GET /entities).
pub async fn list_entities(
    State(state): State<AppState>,
    method: Method,
) -> Result<Response, AppError> {
    dispatch(&state, LIST_ENTITIES, to_event(&method, None, &[])).await
}

/// Get an entity by ID (GET /entities/{id}).
pub async fn get_entity(
    State(state): State<AppState>,
    method: Method,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    dispatch(&state, GET_ENTITY, to_event(&method, Some(id), &[])).await
}

/// Delete an entity by ID (DELETE /entities/{id}).
pub async fn delete_entity(
    State(state): State<AppState>,
    method: Method,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    dispatch(&state, DELETE_ENTITY, to_event(&method, Some(id), &[])).await
}

/// Any other method on an entity route.
pub async fn unsupported_method(method: Method) -> Response {
    tracing::info!(method = %method, "Bad request: unsupported method");
    into_http_response(ApiResponse::bad_request())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_to_event_collection_route() {
        let event = to_event(&Method::GET, None, &[]);

        assert_eq!(event.http_method, "GET");
        assert_eq!(event.path_parameters, Some(HashMap::new()));
        assert_eq!(event.body, None);
    }

    #[test]
    fn test_to_event_item_route_with_body() {
        let event = to_event(&Method::POST, Some("7".to_string()), br#"{"a":1}"#);

        assert_eq!(event.path_id(), Some("7"));
        assert_eq!(event.body.as_deref(), Some(r#"{"a":1}"#));
    }

    #[test]
    fn test_to_event_drops_invalid_utf8_body() {
        let event = to_event(&Method::POST, None, &[b'{', 0xff, b'}']);
        assert_eq!(event.body, None);
    }

    #[test]
    fn test_into_http_response_keeps_status_and_headers() {
        let mut response = ApiResponse::created();
        response
            .headers
            .insert("x-request-source".to_string(), "test".to_string());

        let http = into_http_response(response);

        assert_eq!(http.status(), StatusCode::CREATED);
        assert_eq!(http.headers()["content-type"], "application/json");
        assert_eq!(http.headers()["x-request-source"], "test");
    }
}
