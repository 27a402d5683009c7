//! Entity request handlers.
//!
//! Each handler is a stateless `validate → operate → format` sequence over an
//! [`ApiRequest`]. Handlers share nothing but the store; cross-cutting
//! instrumentation is layered on from [`crate::middleware`].

use async_trait::async_trait;

use entities_core::request::{ApiRequest, ApiResponse, RequestError};

pub mod create;
pub mod delete;
pub mod error;
pub mod gateway;
pub mod get;
pub mod health;
pub mod invoke;
pub mod list;
pub mod registry;

pub use error::HandlerError;
pub use registry::Functions;

/// A single invocable function.
#[async_trait]
pub trait EntityHandler: Send + Sync {
    /// Function name, used for routing, logs and metrics.
    fn name(&self) -> &'static str;

    /// Handle one invocation.
    ///
    /// Client errors are returned as `Ok` 400 responses; `Err` is reserved for
    /// failures the host layer has to report.
    async fn handle(&self, request: ApiRequest) -> Result<ApiResponse, HandlerError>;
}

/// Answer a rejected request with the fixed 400 response.
fn reject(function: &'static str, error: RequestError) -> ApiResponse {
    tracing::info!(function, reason = %error, "Bad request");
    ApiResponse::bad_request()
}
