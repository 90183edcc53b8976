use anyhow::Result;
use kanban_core::KanbanConfig;
use kanban_storage::traits::SchemaStore;

use crate::open_backend;

pub(crate) async fn init(config: &KanbanConfig) -> Result<()> {
    let backend = open_backend(config).await?;
    backend.initialize_database().await?;
    println!("Database initialized ({})", backend.kind());
    Ok(())
}

/// Round-trip to the database and print its clock.
pub(crate) async fn check(config: &KanbanConfig) -> Result<()> {
    let backend = open_backend(config).await?;
    match backend.ping().await {
        Ok(now) => {
            println!("Connected to {} database, server time {}", backend.kind(), now.to_rfc3339());
            Ok(())
        },
        Err(e) => {
            if e.is_transient() {
                tracing::warn!("Database busy or unreachable, try again: {e}");
            }
            Err(e.into())
        },
    }
}
