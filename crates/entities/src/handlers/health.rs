//! Operational endpoints.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/metrics` - Prometheus metrics in text format

use axum::http::StatusCode;

use crate::metrics::encode_metrics;

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately; the store is not contacted.
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /metrics - Prometheus scrape endpoint.
pub async fn metrics() -> (StatusCode, String) {
    encode_metrics()
}
