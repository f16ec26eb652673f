#![allow(dead_code)]

use axum::body::Body;
use axum::http::{HeaderValue, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use notekeeper_api::config::{LogFormat, ServerConfig};
use notekeeper_api::router::build_app_router;
use notekeeper_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults and the cache enabled.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: String::new(),
        db_max_connections: 5,
        cors_origins: vec![HeaderValue::from_static("http://localhost:5500")],
        request_timeout_secs: 30,
        cache_enabled: true,
        log_format: LogFormat::Pretty,
    }
}

/// Build the full application router (same middleware stack as `main.rs`)
/// on the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_state(pool).0
}

/// Like [`build_test_app`] but also hands back the state, so tests can look
/// into the entity caches.
pub fn build_test_app_with_state(pool: PgPool) -> (Router, AppState) {
    let config = test_config();
    let state = AppState::new(pool, config.clone());
    (build_app_router(state.clone(), &config), state)
}

/// Read a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: Router, uri: &str) -> Response {
    send(app, Method::POST, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put(app: Router, uri: &str) -> Response {
    send(app, Method::PUT, uri, None).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

/// POST `body` to `uri` and return the created entity's id.
pub async fn create_id(app: Router, uri: &str, body: serde_json::Value) -> i64 {
    let response = post_json(app, uri, body).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}
