//! Function invocation endpoint.
//!
//! Accepts a raw gateway event and answers with the raw function response,
//! like the invoke API local emulators expose
//! (`POST /2015-03-31/functions/{function}/invocations`).
//!
//! Invoke clients rarely send a JSON content type, so the body is parsed
//! regardless of headers.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use entities_core::request::ApiRequest;

use crate::{error::AppError, state::AppState};

/// Invoke a function by name with a gateway event.
pub async fn invoke_function(
    State(state): State<AppState>,
    Path(function): Path<String>,
    body: Bytes,
) -> Result<Response, AppError> {
    let event: ApiRequest = match serde_json::from_slice(&body) {
        Ok(event) => event,
        Err(e) => {
            tracing::info!(function = %function, error = %e, "Invalid invocation event");
            return Ok((
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": format!("Invalid invocation event: {e}") })),
            )
                .into_response());
        }
    };

    match state.functions.invoke(&function, event).await {
        Some(result) => Ok(Json(result?).into_response()),
        None => {
            tracing::warn!(function = %function, "Unknown function");
            Ok((
                StatusCode::NOT_FOUND,
                Json(json!({ "message": format!("Function not found: {function}") })),
            )
                .into_response())
        }
    }
}
