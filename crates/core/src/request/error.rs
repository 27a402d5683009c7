use thiserror::Error;

/// Reasons a request is rejected before any store access.
///
/// Every variant is answered with the same fixed 400 response; the variant
/// only feeds the logs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("Method not allowed: expected {expected}, got {actual:?}")]
    MethodNotAllowed {
        expected: &'static str,
        actual: String,
    },
    #[error("Request body is missing")]
    MissingBody,
    #[error("Request body is not valid JSON: {0}")]
    InvalidBody(String),
    #[error("Path parameters are missing")]
    MissingPathParameters,
    #[error("Path parameter 'id' is missing")]
    MissingId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_not_allowed_display() {
        let error = RequestError::MethodNotAllowed {
            expected: "POST",
            actual: "GET".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Method not allowed: expected POST, got \"GET\""
        );
    }

    #[test]
    fn test_missing_id_display() {
        assert_eq!(
            RequestError::MissingId.to_string(),
            "Path parameter 'id' is missing"
        );
    }
}
