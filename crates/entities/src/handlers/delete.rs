//! Delete entity (`DELETE /{id}`).

use std::sync::Arc;

use async_trait::async_trait;

use entities_core::request::{validate_delete, ApiRequest, ApiResponse};
use entities_core::storage::EntityStore;

use super::{reject, EntityHandler, HandlerError};

pub const DELETE_ENTITY: &str = "delete_entity";

/// Deletes one entity by the `id` path parameter.
///
/// Idempotent: deleting a missing entity still answers 200.
pub struct DeleteEntityHandler {
    store: Arc<dyn EntityStore>,
}

impl DeleteEntityHandler {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl EntityHandler for DeleteEntityHandler {
    fn name(&self) -> &'static str {
        DELETE_ENTITY
    }

    async fn handle(&self, request: ApiRequest) -> Result<ApiResponse, HandlerError> {
        let key = match validate_delete(&request) {
            Ok(key) => key,
            Err(err) => return Ok(reject(DELETE_ENTITY, err)),
        };

        self.store.delete_item(&key).await?;

        tracing::info!(key = %key, "Deleted entity");
        Ok(ApiResponse::deleted())
    }
}
