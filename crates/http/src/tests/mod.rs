#![expect(clippy::unwrap_used, reason = "test code")]

mod router_tests;

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use kanban_core::KanbanConfig;
use kanban_storage::{Storage, StorageBackend};
use tempfile::TempDir;
use tower::ServiceExt;

use crate::{AppState, create_router};

pub(crate) fn test_app() -> (Router, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let storage = Storage::new(&temp_dir.path().join("http.db"), 2).unwrap();
    let backend = Arc::new(StorageBackend::Sqlite(storage));
    let state = AppState::new(backend, &KanbanConfig::default());
    (create_router(Arc::new(state)), temp_dir)
}

pub(crate) async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1_000_000).await.unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| serde_json::Value::String(String::from_utf8_lossy(&bytes).into()))
    };
    (status, json)
}
