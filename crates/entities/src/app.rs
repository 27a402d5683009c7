use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        gateway::{create_entity, delete_entity, get_entity, list_entities, unsupported_method},
        health::{livez, metrics},
        invoke::invoke_function,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, request_timeout: Duration) -> Router {
    // CORS configuration for the entity routes
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let entity_routes = Router::new()
        .route(
            "/entities",
            get(list_entities)
                .post(create_entity)
                .fallback(unsupported_method),
        )
        .route(
            "/entities/{id}",
            get(get_entity)
                .delete(delete_entity)
                .fallback(unsupported_method),
        )
        .layer(cors);

    Router::new()
        .merge(entity_routes)
        .route(
            "/2015-03-31/functions/{function}/invocations",
            post(invoke_function),
        )
        .route("/livez", get(livez))
        .route("/metrics", get(metrics))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use prometheus::Registry;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::metrics::HandlerMetrics;
    use crate::storage::testing::FailingStore;
    use crate::storage::InMemoryStore;

    fn test_app() -> Router {
        let metrics = Arc::new(HandlerMetrics::register(&Registry::new()).unwrap());
        let state = AppState::with_metrics(Arc::new(InMemoryStore::new()), metrics);
        create_app(state, Duration::from_secs(10))
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_livez() {
        let app = create_app(AppState::default(), Duration::from_secs(10));
        let response = app
            .oneshot(Request::builder().uri("/livez").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_entities_empty() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/entities")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_create_get_delete_entity() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/entities")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"id":"abc","name":"widget"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            body_json(response).await,
            json!({"Message": "Entity created"})
        );

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/entities/abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!([{"id": "abc", "name": "widget"}])
        );

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/entities/abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"Message": "Entity deleted"})
        );

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/entities/abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_create_without_body_is_bad_request() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/entities")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({"msg": "Bad Request"}));
    }

    #[tokio::test]
    async fn test_unsupported_method_is_bad_request() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/entities/abc")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({"msg": "Bad Request"}));
    }

    #[tokio::test]
    async fn test_invoke_function_endpoint() {
        let app = test_app();

        let event = json!({
            "httpMethod": "POST",
            "body": r#"{"id":"7","v":1}"#
        });
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/2015-03-31/functions/create_entity/invocations")
                    .header("Content-Type", "application/json")
                    .body(Body::from(event.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let result = body_json(response).await;
        assert_eq!(result["statusCode"], 201);
        assert_eq!(result["body"], r#"{"Message":"Entity created"}"#);

        let event = json!({"httpMethod": "GET", "pathParameters": null});
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/2015-03-31/functions/list_entities/invocations")
                    .header("Content-Type", "application/json")
                    .body(Body::from(event.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let result = body_json(response).await;
        assert_eq!(result["statusCode"], 200);
        let payloads: Value = serde_json::from_str(result["body"].as_str().unwrap()).unwrap();
        assert_eq!(payloads, json!([{"id": "7", "v": 1}]));
    }

    #[tokio::test]
    async fn test_invoke_without_json_content_type() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/2015-03-31/functions/list_entities/invocations")
                    .body(Body::from(r#"{"httpMethod":"GET","pathParameters":null}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let result = body_json(response).await;
        assert_eq!(result["statusCode"], 200);
        assert_eq!(result["body"], "[]");
    }

    #[tokio::test]
    async fn test_invoke_malformed_event_is_bad_request() {
        let app = test_app();

        for event in [r#"{"httpMethod":"GET","pathParameters":{"id":42}}"#, "not json"] {
            let response = app
                .clone()
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/2015-03-31/functions/get_entity/invocations")
                        .body(Body::from(event))
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            let result = body_json(response).await;
            assert!(result["message"]
                .as_str()
                .unwrap()
                .starts_with("Invalid invocation event"));
        }
    }

    #[tokio::test]
    async fn test_create_with_invalid_utf8_body_is_bad_request() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/entities")
                    .body(Body::from(vec![b'{', 0xff, 0xfe, b'}']))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({"msg": "Bad Request"}));
    }

    #[tokio::test]
    async fn test_invoke_unknown_function() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/2015-03-31/functions/update_entity/invocations")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"httpMethod":"GET"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_store_failure_is_internal_error() {
        let metrics = Arc::new(HandlerMetrics::register(&Registry::new()).unwrap());
        let state = AppState::with_metrics(Arc::new(FailingStore), metrics.clone());
        let app = create_app(state, Duration::from_secs(10));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/entities")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(metrics.errors("list_entities"), 1);
    }
}
