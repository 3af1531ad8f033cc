//! HTTP API route definitions.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{
    health, random_number, save_number, saved_number, subscribe, topic_a, topic_b, AppState,
};

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Service invocation endpoints
        .route("/randomNumber", get(random_number))
        .route("/saveNumber", post(save_number))
        .route("/savedNumber", get(saved_number))
        // Pub/sub discovery and topic callbacks
        .route("/dapr/subscribe", get(subscribe))
        .route("/A", post(topic_a))
        .route("/B", post(topic_b))
        // Health endpoint
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dapr::DaprClient;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    fn test_state() -> AppState {
        // Points at a port nothing listens on; fine for handlers that never
        // touch the sidecar.
        AppState::new(DaprClient::with_state_url("http://localhost:1/v1.0/state"))
    }

    #[tokio::test]
    async fn health_endpoint_returns_ok() {
        let app = create_router(test_state());

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn random_number_returns_integer_in_range() {
        let app = create_router(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/randomNumber")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let number: u32 = serde_json::from_slice(&body).unwrap();
        assert!(number <= 101);
    }

    #[tokio::test]
    async fn subscribe_lists_both_topics() {
        let app = create_router(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/dapr/subscribe")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let topics: Vec<String> = serde_json::from_slice(&body).unwrap();
        assert_eq!(topics, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn topic_handlers_acknowledge_delivery() {
        for topic in ["/A", "/B"] {
            let app = create_router(test_state());

            let response = app
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri(topic)
                        .header(header::CONTENT_TYPE, "application/json")
                        .body(Body::from(r#"{"msg": "hi"}"#))
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK);

            let body = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            let ack: serde_json::Value = serde_json::from_slice(&body).unwrap();
            assert_eq!(ack, serde_json::json!({ "success": true }));
        }
    }

    #[tokio::test]
    async fn save_number_rejects_body_without_number() {
        let app = create_router(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/saveNumber")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"value": 42}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(!response.status().is_success());
    }

    #[tokio::test]
    async fn saved_number_maps_unreachable_sidecar_to_bad_gateway() {
        let app = create_router(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/savedNumber")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
