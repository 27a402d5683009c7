//! Create entity (`POST`).

use std::sync::Arc;

use async_trait::async_trait;

use entities_core::request::{create_record, ApiRequest, ApiResponse};
use entities_core::storage::EntityStore;

use super::{reject, EntityHandler, HandlerError};

pub const CREATE_ENTITY: &str = "create_entity";

/// Writes the request body as a new entity, overwriting any previous one.
///
/// An id generated for a body without `id` is not echoed back.
pub struct CreateEntityHandler {
    store: Arc<dyn EntityStore>,
}

impl CreateEntityHandler {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl EntityHandler for CreateEntityHandler {
    fn name(&self) -> &'static str {
        CREATE_ENTITY
    }

    async fn handle(&self, request: ApiRequest) -> Result<ApiResponse, HandlerError> {
        let record = match create_record(&request) {
            Ok(record) => record,
            Err(err) => return Ok(reject(CREATE_ENTITY, err)),
        };

        self.store.put_item(&record).await?;

        tracing::info!(key = %record.key, "Created entity");
        Ok(ApiResponse::created())
    }
}
