//! Get entity (`GET /{id}`).

use std::sync::Arc;

use async_trait::async_trait;

use entities_core::entity::project_details;
use entities_core::request::{validate_get, ApiRequest, ApiResponse};
use entities_core::storage::EntityStore;

use super::{reject, EntityHandler, HandlerError};

pub const GET_ENTITY: &str = "get_entity";

/// Looks up one entity by the `id` path parameter.
///
/// Answers with a JSON array of payloads: one element when found, empty when
/// not. A missing entity is never a 404.
pub struct GetEntityHandler {
    store: Arc<dyn EntityStore>,
}

impl GetEntityHandler {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl EntityHandler for GetEntityHandler {
    fn name(&self) -> &'static str {
        GET_ENTITY
    }

    async fn handle(&self, request: ApiRequest) -> Result<ApiResponse, HandlerError> {
        let key = match validate_get(&request) {
            Ok(key) => key,
            Err(err) => return Ok(reject(GET_ENTITY, err)),
        };

        let records = self.store.query_exact(&key).await?;
        tracing::debug!(key = %key, items = records.len(), "Query results");

        Ok(ApiResponse::payloads(project_details(records)))
    }
}
