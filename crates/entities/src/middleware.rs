//! Instrumentation middleware for entity handlers.
//!
//! Logging, tracing and metrics are decorators over [`EntityHandler`], so
//! every function gets the same treatment without repeating it in the
//! handler bodies:
//!
//! ```ignore
//! let handler = GetEntityHandler::new(store).metered(metrics).traced();
//! ```

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use tracing::Instrument;
use uuid::Uuid;

use entities_core::request::{ApiRequest, ApiResponse};

use crate::handlers::{EntityHandler, HandlerError};
use crate::metrics::HandlerMetrics;

/// Runs each invocation in its own span and logs how it ended.
///
/// Unhandled errors are logged here and then passed on unchanged.
pub struct Traced<H> {
    inner: H,
}

#[async_trait]
impl<H: EntityHandler> EntityHandler for Traced<H> {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    async fn handle(&self, request: ApiRequest) -> Result<ApiResponse, HandlerError> {
        let function = self.inner.name();
        let span = tracing::info_span!(
            "invocation",
            function,
            request_id = %Uuid::new_v4(),
            method = %request.http_method,
        );

        async move {
            tracing::info!("Invocation started");
            match self.inner.handle(request).await {
                Ok(response) => {
                    tracing::info!(status = response.status_code, "Invocation completed");
                    Ok(response)
                }
                Err(err) => {
                    tracing::error!(error = %err, "Caught exception");
                    Err(err)
                }
            }
        }
        .instrument(span)
        .await
    }
}

/// Counts invocations, successes and errors, and times each call.
pub struct Metered<H> {
    inner: H,
    metrics: Arc<HandlerMetrics>,
}

#[async_trait]
impl<H: EntityHandler> EntityHandler for Metered<H> {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    async fn handle(&self, request: ApiRequest) -> Result<ApiResponse, HandlerError> {
        let function = self.inner.name();
        self.metrics.record_request(function);

        let started = Instant::now();
        let result = self.inner.handle(request).await;
        self.metrics
            .observe_duration(function, started.elapsed().as_secs_f64());

        match &result {
            Ok(response) if (200..300).contains(&response.status_code) => {
                self.metrics.record_success(function)
            }
            Ok(_) => {}
            Err(_) => self.metrics.record_error(function),
        }

        result
    }
}

/// Decorator constructors for any handler.
pub trait HandlerExt: EntityHandler + Sized {
    fn traced(self) -> Traced<Self> {
        Traced { inner: self }
    }

    fn metered(self, metrics: Arc<HandlerMetrics>) -> Metered<Self> {
        Metered {
            inner: self,
            metrics,
        }
    }
}

impl<H: EntityHandler> HandlerExt for H {}
