//! Named functions, each wrapped in the instrumentation middleware.

use std::collections::HashMap;
use std::sync::Arc;

use entities_core::request::{ApiRequest, ApiResponse};
use entities_core::storage::EntityStore;

use crate::metrics::HandlerMetrics;
use crate::middleware::HandlerExt;

use super::create::CreateEntityHandler;
use super::delete::DeleteEntityHandler;
use super::get::GetEntityHandler;
use super::list::ListEntitiesHandler;
use super::{EntityHandler, HandlerError};

/// Every invocable function, keyed by name.
pub struct Functions {
    handlers: HashMap<&'static str, Arc<dyn EntityHandler>>,
}

impl Functions {
    /// Build all functions over one store, with the same middleware stack.
    pub fn new(store: Arc<dyn EntityStore>, metrics: Arc<HandlerMetrics>) -> Self {
        let mut functions = Self {
            handlers: HashMap::new(),
        };
        functions.register(
            CreateEntityHandler::new(store.clone())
                .metered(metrics.clone())
                .traced(),
        );
        functions.register(
            GetEntityHandler::new(store.clone())
                .metered(metrics.clone())
                .traced(),
        );
        functions.register(
            ListEntitiesHandler::new(store.clone())
                .metered(metrics.clone())
                .traced(),
        );
        functions.register(DeleteEntityHandler::new(store).metered(metrics).traced());
        functions
    }

    fn register(&mut self, handler: impl EntityHandler + 'static) {
        self.handlers.insert(handler.name(), Arc::new(handler));
    }

    /// Look up a function by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn EntityHandler>> {
        self.handlers.get(name).cloned()
    }

    /// Registered function names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.handlers.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Invoke a function by name. `None` when no such function exists.
    pub async fn invoke(
        &self,
        name: &str,
        request: ApiRequest,
    ) -> Option<Result<ApiResponse, HandlerError>> {
        let handler = self.get(name)?;
        Some(handler.handle(request).await)
    }
}

#[cfg(test)]
mod tests {
    use prometheus::Registry;
    use serde_json::json;

    use super::*;
    use crate::storage::testing::CountingStore;

    fn functions(store: Arc<CountingStore>) -> Functions {
        let metrics = Arc::new(HandlerMetrics::register(&Registry::new()).unwrap());
        Functions::new(store, metrics)
    }

    #[test]
    fn test_all_functions_registered() {
        let functions = functions(Arc::new(CountingStore::new()));
        assert_eq!(
            functions.names(),
            vec!["create_entity", "delete_entity", "get_entity", "list_entities"]
        );
    }

    #[tokio::test]
    async fn test_unknown_function() {
        let functions = functions(Arc::new(CountingStore::new()));
        assert!(functions
            .invoke("update_entity", ApiRequest::new("GET"))
            .await
            .is_none());
    }

    #[tokio::test]
    async fn test_create_then_get_round_trip() {
        let functions = functions(Arc::new(CountingStore::new()));

        let created = functions
            .invoke(
                "create_entity",
                ApiRequest::new("POST").with_json_body(&json!({"id": "42", "x": 1})),
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(created.status_code, 201);

        let fetched = functions
            .invoke("get_entity", ApiRequest::new("GET").with_id("42"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.json_body().unwrap(), json!([{"id": "42", "x": 1}]));
    }

    #[tokio::test]
    async fn test_create_overwrites_without_merge() {
        let functions = functions(Arc::new(CountingStore::new()));

        for body in [json!({"id": "1", "a": 1}), json!({"id": "1", "b": 2})] {
            functions
                .invoke("create_entity", ApiRequest::new("POST").with_json_body(&body))
                .await
                .unwrap()
                .unwrap();
        }

        let fetched = functions
            .invoke("get_entity", ApiRequest::new("GET").with_id("1"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.json_body().unwrap(), json!([{"id": "1", "b": 2}]));
    }

    #[tokio::test]
    async fn test_wrong_method_performs_no_store_call() {
        let store = Arc::new(CountingStore::new());
        let functions = functions(store.clone());

        let response = functions
            .invoke(
                "create_entity",
                ApiRequest::new("GET").with_json_body(&json!({"id": "1"})),
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(response.status_code, 400);
        assert_eq!(response.json_body().unwrap(), json!({"msg": "Bad Request"}));
        assert_eq!(store.calls(), 0);
    }
}
