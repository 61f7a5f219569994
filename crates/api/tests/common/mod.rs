#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use eznotes_api::config::{ServerConfig, StoreBackend};
use eznotes_api::router::build_app_router;
use eznotes_api::state::AppState;
use eznotes_core::types::NoteId;
use eznotes_db::models::note::{Note, NoteFields};
use eznotes_db::{InMemoryNoteStore, NoteStore, StoreError};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        store: StoreBackend::Memory,
        database_url: None,
        db_max_connections: 1,
    }
}

/// Build the full application router over the given store.
///
/// Goes through `build_app_router` so tests exercise the same middleware
/// stack (CORS, request ID, timeout, tracing, panic recovery) production
/// uses.
pub fn build_test_app(store: Arc<dyn NoteStore>) -> Router {
    build_app_router(AppState::new(store, test_config()))
}

/// A fresh, empty in-memory store.
pub fn memory_store() -> Arc<dyn NoteStore> {
    Arc::new(InMemoryNoteStore::new())
}

/// A store whose every operation fails, as if the database were down.
pub struct BrokenStore;

fn broken() -> StoreError {
    StoreError::Unavailable("connection refused to secret-host:5432".into())
}

#[async_trait]
impl NoteStore for BrokenStore {
    async fn list(&self) -> Result<Vec<Note>, StoreError> {
        Err(broken())
    }

    async fn find_by_id(&self, _id: NoteId) -> Result<Option<Note>, StoreError> {
        Err(broken())
    }

    async fn create(&self, _input: &NoteFields) -> Result<Note, StoreError> {
        Err(broken())
    }

    async fn update(&self, _id: NoteId, _input: &NoteFields) -> Result<Option<Note>, StoreError> {
        Err(broken())
    }

    async fn delete(&self, _id: NoteId) -> Result<bool, StoreError> {
        Err(broken())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(broken())
    }
}

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(
        app,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(
        app,
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, body).await
}

pub async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send_raw(app, method, uri, body.to_string()).await
}

pub async fn send_raw(app: Router, method: Method, uri: &str, body: String) -> Response<Body> {
    send(
        app,
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap(),
    )
    .await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
