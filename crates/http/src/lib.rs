//! HTTP API server for the kanban board.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]

pub mod api_error;
mod handlers;
mod request_types;
mod response_types;
#[cfg(test)]
mod tests;

use std::sync::Arc;

use axum::{
    Json, Router,
    routing::{get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use kanban_core::KanbanConfig;
use kanban_service::{BoardService, TaskService};
use kanban_storage::StorageBackend;

pub use response_types::{MessageResponse, VersionResponse};

/// Shared application state for all HTTP handlers.
pub struct AppState {
    pub board_service: Arc<BoardService>,
    pub task_service: Arc<TaskService>,
    /// Attach the underlying failure text to 500 bodies.
    pub expose_error_details: bool,
}

impl AppState {
    #[must_use]
    pub fn new(storage: Arc<StorageBackend>, config: &KanbanConfig) -> Self {
        Self {
            board_service: Arc::new(BoardService::new(
                Arc::clone(&storage),
                config.default_board_id.clone(),
            )),
            task_service: Arc::new(TaskService::new(storage)),
            expose_error_details: config.expose_error_details,
        }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route("/api/board", get(handlers::board::get_board).post(handlers::board::create_board))
        .route("/api/tasks", post(handlers::tasks::create_task))
        .route("/api/tasks/move", post(handlers::tasks::move_task))
        .route(
            "/api/tasks/{taskId}",
            put(handlers::tasks::update_task).delete(handlers::tasks::delete_task),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
