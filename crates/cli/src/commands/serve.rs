use std::sync::Arc;

use anyhow::Result;
use kanban_core::KanbanConfig;
use kanban_http::{AppState, create_router};

use crate::open_backend;

pub(crate) async fn run(config: &KanbanConfig, port: u16, host: &str) -> Result<()> {
    let storage = Arc::new(open_backend(config).await?);
    tracing::info!(
        backend = storage.kind(),
        default_board_id = %config.default_board_id,
        "storage ready"
    );

    let state = Arc::new(AppState::new(storage, config));
    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl+C: {e}");
        std::future::pending::<()>().await;
    }
}
