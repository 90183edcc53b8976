//! Async store traits for SQLite `Storage` via `spawn_blocking`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use kanban_core::{Board, NewTask, Task};

use crate::Storage;
use crate::error::StorageError;
use crate::traits::{BoardStore, SchemaStore, TaskStore};

async fn blocking<F, T>(f: F) -> Result<T, StorageError>
where
    F: FnOnce() -> Result<T, StorageError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await?
}

/// Async-to-blocking delegation.
///
/// Each argument is annotated with how it is captured:
/// - `@str arg`    : `.to_owned()` a `&str`, pass as `&arg`
/// - `@opt_str arg`: `.map(ToOwned::to_owned)` an `Option<&str>`, pass as `arg.as_deref()`
/// - `@val arg`    : move directly
macro_rules! delegate {
    ($self:ident, $method:ident $(, @$kind:ident $arg:ident)*) => {{
        let s = $self.clone();
        $(delegate!(@capture $kind $arg);)*
        blocking(move || s.$method($(delegate!(@pass $kind $arg)),*)).await
    }};
    (@capture str $arg:ident) => { let $arg = $arg.to_owned(); };
    (@capture opt_str $arg:ident) => { let $arg = $arg.map(ToOwned::to_owned); };
    (@capture val $arg:ident) => { };
    (@pass str $arg:ident) => { &$arg };
    (@pass opt_str $arg:ident) => { $arg.as_deref() };
    (@pass val $arg:ident) => { $arg };
}

#[async_trait]
impl SchemaStore for Storage {
    async fn initialize_database(&self) -> Result<(), StorageError> {
        delegate!(self, initialize_database)
    }
    async fn ping(&self) -> Result<DateTime<Utc>, StorageError> {
        delegate!(self, ping)
    }
}

#[async_trait]
impl BoardStore for Storage {
    async fn create_board(&self, title: &str) -> Result<Board, StorageError> {
        delegate!(self, create_board, @str title)
    }
    async fn create_board_with_id(&self, id: &str, title: &str) -> Result<Board, StorageError> {
        delegate!(self, create_board_with_id, @str id, @str title)
    }
    async fn get_board(&self, id: &str) -> Result<Option<Board>, StorageError> {
        delegate!(self, get_board, @str id)
    }
    async fn delete_board(&self, id: &str) -> Result<bool, StorageError> {
        delegate!(self, delete_board, @str id)
    }
}

#[async_trait]
impl TaskStore for Storage {
    async fn add_task(&self, column_id: &str, task: NewTask) -> Result<Task, StorageError> {
        delegate!(self, add_task, @str column_id, @val task)
    }
    async fn move_task(&self, task_id: &str, new_column_id: &str) -> Result<bool, StorageError> {
        delegate!(self, move_task, @str task_id, @str new_column_id)
    }
    async fn update_task(
        &self,
        task_id: &str,
        title: &str,
        description: Option<&str>,
    ) -> Result<Option<Task>, StorageError> {
        delegate!(self, update_task, @str task_id, @str title, @opt_str description)
    }
    async fn delete_task(&self, task_id: &str) -> Result<Option<Task>, StorageError> {
        delegate!(self, delete_task, @str task_id)
    }
}
