//! Shared fixtures for HTTP-level integration tests.
//!
//! Requests are sent straight to the router via `tower::ServiceExt`, no TCP
//! listener involved. The app is backed by the in-memory store, so each
//! test starts from empty collections.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use leadlink_api::config::ServerConfig;
use leadlink_api::router::build_app_router;
use leadlink_api::state::AppState;
use leadlink_db::mem::MemStore;
use leadlink_db::Store;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router (production middleware stack) over the
/// given store.
pub fn build_test_app(store: Arc<dyn Store>) -> Router {
    let config = test_config();
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Fresh app over a fresh in-memory store. Returns both so tests can build
/// further apps over the same collections.
pub fn test_app() -> (Router, Arc<MemStore>) {
    let store = Arc::new(MemStore::new());
    (build_test_app(store.clone()), store)
}

async fn send(app: Router, method: Method, path: &str, body: Option<serde_json::Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(path);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("failed to build request");
    app.oneshot(request).await.expect("request failed")
}

pub async fn get(app: Router, path: &str) -> Response<Body> {
    send(app, Method::GET, path, None).await
}

pub async fn post_json(app: Router, path: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, path, Some(json)).await
}

pub async fn put_json(app: Router, path: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, path, Some(json)).await
}

pub async fn delete(app: Router, path: &str) -> Response<Body> {
    send(app, Method::DELETE, path, None).await
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("failed to read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body was not valid JSON")
}

/// Create a project through the API, returning `(project_id, secret_id)`
/// as strings ready for URL interpolation.
pub async fn create_project(store: Arc<MemStore>, name: &str, goal: i64) -> (String, String) {
    let app = build_test_app(store);
    let response = post_json(
        app,
        "/api/v1/projects",
        serde_json::json!({ "name": name, "leads": goal }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    (
        json["projectId"].as_str().unwrap().to_string(),
        json["secretId"].as_str().unwrap().to_string(),
    )
}
