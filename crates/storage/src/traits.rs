//! Async store traits implemented by every backend.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use kanban_core::{Board, NewTask, Task};

use crate::error::StorageError;

/// Schema management and connectivity.
#[async_trait]
pub trait SchemaStore: Send + Sync {
    /// Create the boards, columns and tasks tables if they do not exist.
    async fn initialize_database(&self) -> Result<(), StorageError>;

    /// Current time according to the database server.
    async fn ping(&self) -> Result<DateTime<Utc>, StorageError>;
}

/// Board lifecycle and the assembled board read path.
#[async_trait]
pub trait BoardStore: Send + Sync {
    /// Persist a board with a generated id and its three default columns.
    async fn create_board(&self, title: &str) -> Result<Board, StorageError>;

    /// Same as [`BoardStore::create_board`] with a caller-chosen board id.
    async fn create_board_with_id(&self, id: &str, title: &str) -> Result<Board, StorageError>;

    /// Board with nested columns and tasks, or `None` if the id is unknown.
    async fn get_board(&self, id: &str) -> Result<Option<Board>, StorageError>;

    /// Delete a board; columns and tasks cascade. Returns `true` if a row was deleted.
    async fn delete_board(&self, id: &str) -> Result<bool, StorageError>;
}

/// Task mutations.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Insert a task into a column and return it as constructed (not re-read).
    async fn add_task(&self, column_id: &str, task: NewTask) -> Result<Task, StorageError>;

    /// Reassign a task's column and bump `updated_at`. The stored status is
    /// left untouched. Returns `true` if a row matched.
    async fn move_task(&self, task_id: &str, new_column_id: &str) -> Result<bool, StorageError>;

    /// Replace title and description. `None` if no row matched.
    async fn update_task(
        &self,
        task_id: &str,
        title: &str,
        description: Option<&str>,
    ) -> Result<Option<Task>, StorageError>;

    /// Delete a task and return the removed row. `None` if no row matched.
    async fn delete_task(&self, task_id: &str) -> Result<Option<Task>, StorageError>;
}
