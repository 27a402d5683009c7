//! Shared application state.
//!
//! Built once at startup from the configuration and cloned into every
//! request. The only thing shared between invocations is the store behind the
//! functions.

use std::sync::Arc;

use anyhow::anyhow;

use entities_core::request::{ApiRequest, ApiResponse};
use entities_core::storage::EntityStore;

use crate::error::AppError;
use crate::handlers::Functions;
use crate::metrics::{HandlerMetrics, HANDLER_METRICS};
use crate::storage::InMemoryStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Instrumented entity functions.
    pub functions: Arc<Functions>,
}

impl AppState {
    /// Creates a new AppState reporting to the default metrics registry.
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self::with_metrics(store, HANDLER_METRICS.clone())
    }

    /// Creates a new AppState with its own metrics.
    pub fn with_metrics(store: Arc<dyn EntityStore>, metrics: Arc<HandlerMetrics>) -> Self {
        Self {
            functions: Arc::new(Functions::new(store, metrics)),
        }
    }

    /// Invoke a function that is known to exist.
    pub async fn invoke(&self, function: &str, request: ApiRequest) -> Result<ApiResponse, AppError> {
        let result = self
            .functions
            .invoke(function, request)
            .await
            .ok_or_else(|| anyhow!("Function not found: {function}"))?;
        Ok(result?)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(InMemoryStore::new()))
    }
}
