/// Common test utilities for router tests
///
/// Builds the full router over an in-memory store, so these tests need no
/// database. Requests are driven with `tower::ServiceExt::oneshot`.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use quill_api::app::{build_router, AppState};
use quill_api::config::{ApiConfig, Config, DatabaseConfig};
use quill_shared::store::memory::MemoryStore;
use serde_json::Value;
use tower::ServiceExt;

/// Test context holding the router and its backing store
pub struct TestContext {
    pub app: Router,
    pub store: MemoryStore,
}

impl TestContext {
    /// Creates a context with an empty store
    pub fn new() -> Self {
        let config = Config {
            api: ApiConfig {
                static_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/../static").to_string(),
                ..Default::default()
            },
            database: DatabaseConfig {
                url: "postgresql://unused".to_string(),
                max_connections: 1,
            },
        };

        let store = MemoryStore::new();
        let app = build_router(AppState::new(store.clone(), config));

        Self { app, store }
    }

    /// Sends a request and returns status and raw body
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, body.to_vec())
    }

    /// GET returning parsed JSON
    pub async fn get_json(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let (status, body) = self.send(request).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    /// POST a JSON body returning parsed JSON
    pub async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let (status, body) = self.send(request).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    /// Creates a user through the API and returns its ID
    pub async fn create_user(&self, email: &str) -> i64 {
        let (status, body) = self
            .post_json("/users/", serde_json::json!({ "email": email, "password": "p" }))
            .await;
        assert_eq!(status, StatusCode::OK, "create user failed: {body}");
        body["id"].as_i64().unwrap()
    }
}
