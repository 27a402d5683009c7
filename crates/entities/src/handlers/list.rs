//! List entities (`GET`, full scan).

use std::sync::Arc;

use async_trait::async_trait;

use entities_core::entity::project_details;
use entities_core::request::{validate_list, ApiRequest, ApiResponse};
use entities_core::storage::EntityStore;

use super::{reject, EntityHandler, HandlerError};

pub const LIST_ENTITIES: &str = "list_entities";

/// Returns the payload of every item in the table, in store order.
///
/// Backed by a single scan call, so large tables come back truncated to the
/// first page.
pub struct ListEntitiesHandler {
    store: Arc<dyn EntityStore>,
}

impl ListEntitiesHandler {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl EntityHandler for ListEntitiesHandler {
    fn name(&self) -> &'static str {
        LIST_ENTITIES
    }

    async fn handle(&self, request: ApiRequest) -> Result<ApiResponse, HandlerError> {
        if let Err(err) = validate_list(&request) {
            return Ok(reject(LIST_ENTITIES, err));
        }

        let records = self.store.scan_all().await?;
        tracing::debug!(items = records.len(), "Scan results");

        Ok(ApiResponse::payloads(project_details(records)))
    }
}
