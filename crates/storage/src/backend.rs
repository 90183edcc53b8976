//! Unified storage backend with enum dispatch.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use kanban_core::{Board, DatabaseConfig, NewTask, Task};

use crate::error::StorageError;
use crate::traits::{BoardStore, SchemaStore, TaskStore};
use crate::{PgStorage, Storage};

macro_rules! dispatch {
    ($self:expr, $trait:path, $method:ident ( $($arg:expr),* $(,)? )) => {
        match $self {
            StorageBackend::Sqlite(s) => <Storage as $trait>::$method(s, $($arg),*).await,
            StorageBackend::Postgres(s) => <PgStorage as $trait>::$method(s, $($arg),*).await,
        }
    };
}

#[derive(Clone, Debug)]
pub enum StorageBackend {
    Sqlite(Storage),
    Postgres(PgStorage),
}

impl StorageBackend {
    /// Open the backend described by `config`. Both variants ensure the
    /// schema exists before returning.
    pub async fn open(config: &DatabaseConfig) -> Result<Self, StorageError> {
        match config {
            DatabaseConfig::Postgres { url } => Ok(Self::Postgres(PgStorage::new(url).await?)),
            DatabaseConfig::Sqlite { path, pool_size } => {
                let path = path.clone();
                let pool_size = *pool_size;
                let storage =
                    tokio::task::spawn_blocking(move || Storage::new(&path, pool_size)).await??;
                Ok(Self::Sqlite(storage))
            },
        }
    }

    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Sqlite(_) => "sqlite",
            Self::Postgres(_) => "postgres",
        }
    }
}

// ── SchemaStore ──────────────────────────────────────────────────

#[async_trait]
impl SchemaStore for StorageBackend {
    async fn initialize_database(&self) -> Result<(), StorageError> {
        dispatch!(self, SchemaStore, initialize_database())
    }

    async fn ping(&self) -> Result<DateTime<Utc>, StorageError> {
        dispatch!(self, SchemaStore, ping())
    }
}

// ── BoardStore ───────────────────────────────────────────────────

#[async_trait]
impl BoardStore for StorageBackend {
    async fn create_board(&self, title: &str) -> Result<Board, StorageError> {
        dispatch!(self, BoardStore, create_board(title))
    }

    async fn create_board_with_id(&self, id: &str, title: &str) -> Result<Board, StorageError> {
        dispatch!(self, BoardStore, create_board_with_id(id, title))
    }

    async fn get_board(&self, id: &str) -> Result<Option<Board>, StorageError> {
        dispatch!(self, BoardStore, get_board(id))
    }

    async fn delete_board(&self, id: &str) -> Result<bool, StorageError> {
        dispatch!(self, BoardStore, delete_board(id))
    }
}

// ── TaskStore ────────────────────────────────────────────────────

#[async_trait]
impl TaskStore for StorageBackend {
    async fn add_task(&self, column_id: &str, task: NewTask) -> Result<Task, StorageError> {
        dispatch!(self, TaskStore, add_task(column_id, task))
    }

    async fn move_task(&self, task_id: &str, new_column_id: &str) -> Result<bool, StorageError> {
        dispatch!(self, TaskStore, move_task(task_id, new_column_id))
    }

    async fn update_task(
        &self,
        task_id: &str,
        title: &str,
        description: Option<&str>,
    ) -> Result<Option<Task>, StorageError> {
        dispatch!(self, TaskStore, update_task(task_id, title, description))
    }

    async fn delete_task(&self, task_id: &str) -> Result<Option<Task>, StorageError> {
        dispatch!(self, TaskStore, delete_task(task_id))
    }
}
