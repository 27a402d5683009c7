use entities_core::storage::StoreError;
use thiserror::Error;

/// Failures a handler does not recover from.
///
/// Client mistakes never end up here: they are answered with a 400 response.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error(transparent)]
    Store(#[from] StoreError),
}
