use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Application error type that wraps `anyhow::Error`.
///
/// Unhandled handler failures end up here and are reported as 500s by the
/// HTTP host layer.
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "Application error");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Something went wrong: {}", self.0),
        )
            .into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
