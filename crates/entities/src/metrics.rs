//! Prometheus metrics for handler invocations.

use std::sync::Arc;

use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder,
};

/// Handler metrics registered on the default registry.
pub static HANDLER_METRICS: Lazy<Arc<HandlerMetrics>> = Lazy::new(|| {
    Arc::new(
        HandlerMetrics::register(prometheus::default_registry())
            .expect("register handler metrics"),
    )
});

/// Per-function invocation counters and latency.
#[derive(Clone)]
pub struct HandlerMetrics {
    requests: IntCounterVec,
    successes: IntCounterVec,
    errors: IntCounterVec,
    duration: HistogramVec,
}

impl HandlerMetrics {
    /// Create the metrics and register them on `registry`.
    pub fn register(registry: &Registry) -> prometheus::Result<Self> {
        let requests = IntCounterVec::new(
            Opts::new("entities_requests_total", "Total handler invocations"),
            &["function"],
        )?;
        let successes = IntCounterVec::new(
            Opts::new(
                "entities_success_total",
                "Invocations answered with a 2xx status",
            ),
            &["function"],
        )?;
        let errors = IntCounterVec::new(
            Opts::new(
                "entities_errors_total",
                "Invocations that failed with an unhandled error",
            ),
            &["function"],
        )?;
        let duration = HistogramVec::new(
            HistogramOpts::new(
                "entities_invocation_duration_seconds",
                "Handler invocation duration in seconds",
            )
            .buckets(vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]),
            &["function"],
        )?;

        registry.register(Box::new(requests.clone()))?;
        registry.register(Box::new(successes.clone()))?;
        registry.register(Box::new(errors.clone()))?;
        registry.register(Box::new(duration.clone()))?;

        Ok(Self {
            requests,
            successes,
            errors,
            duration,
        })
    }

    pub fn record_request(&self, function: &str) {
        self.requests.with_label_values(&[function]).inc();
    }

    pub fn record_success(&self, function: &str) {
        self.successes.with_label_values(&[function]).inc();
    }

    pub fn record_error(&self, function: &str) {
        self.errors.with_label_values(&[function]).inc();
    }

    pub fn observe_duration(&self, function: &str, seconds: f64) {
        self.duration.with_label_values(&[function]).observe(seconds);
    }

    #[cfg(test)]
    pub fn requests(&self, function: &str) -> u64 {
        self.requests.with_label_values(&[function]).get()
    }

    #[cfg(test)]
    pub fn successes(&self, function: &str) -> u64 {
        self.successes.with_label_values(&[function]).get()
    }

    #[cfg(test)]
    pub fn errors(&self, function: &str) -> u64 {
        self.errors.with_label_values(&[function]).get()
    }
}

/// Render every metric of the default registry in text format.
pub fn encode_metrics() -> (StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    match String::from_utf8(buffer) {
        Ok(text) => (StatusCode::OK, text),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        ),
    }
}
