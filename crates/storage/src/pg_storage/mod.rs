//! PostgreSQL storage backend using sqlx.

mod boards;
mod tasks;

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use kanban_core::{
    PG_POOL_ACQUIRE_TIMEOUT_SECS, PG_POOL_IDLE_TIMEOUT_SECS, PG_POOL_MAX_CONNECTIONS, Task,
    TaskStatus,
};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};

use crate::error::StorageError;
use crate::pg_migrations::run_pg_migrations;
use crate::traits::SchemaStore;

pub(crate) const TASK_COLUMNS: &str = "id, title, description, status, created_at, updated_at";

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(PG_POOL_MAX_CONNECTIONS)
            .acquire_timeout(Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(Duration::from_secs(PG_POOL_IDLE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        run_pg_migrations(&pool).await.map_err(|e| StorageError::Migration(e.to_string()))?;
        tracing::info!("PgStorage initialized");
        Ok(Self { pool })
    }
}

pub(crate) fn row_to_task(row: &sqlx::postgres::PgRow) -> Result<Task, StorageError> {
    let status_str: String = row.try_get("status")?;
    let status = status_str.parse::<TaskStatus>().map_err(|e| StorageError::DataCorruption {
        context: format!("task status column holds {status_str:?}"),
        source: Box::new(e),
    })?;
    Ok(Task {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        status,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

#[async_trait]
impl SchemaStore for PgStorage {
    async fn initialize_database(&self) -> Result<(), StorageError> {
        run_pg_migrations(&self.pool).await.map_err(|e| StorageError::Migration(e.to_string()))
    }

    async fn ping(&self) -> Result<DateTime<Utc>, StorageError> {
        let row = sqlx::query("SELECT NOW() AS now").fetch_one(&self.pool).await?;
        Ok(row.try_get("now")?)
    }
}
