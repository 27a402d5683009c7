use thiserror::Error;

/// Errors raised by a store backend.
///
/// Handlers never recover from these; they are logged and propagated to the
/// host layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Store operation failed: {0}")]
    OperationFailed(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
