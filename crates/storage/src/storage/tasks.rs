use chrono::Utc;
use kanban_core::{NewTask, Task};
use rusqlite::{OptionalExtension as _, params};

use super::{Storage, TASK_COLUMNS, get_conn, row_to_task};
use crate::error::StorageError;

impl Storage {
    /// Insert a task and return it as built, without reading it back.
    pub fn add_task(&self, column_id: &str, new_task: NewTask) -> Result<Task, StorageError> {
        let task = new_task.into_task(Utc::now());
        let conn = get_conn(&self.pool)?;
        conn.execute(
            "INSERT INTO tasks (id, column_id, title, description, status, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                task.id,
                column_id,
                task.title,
                task.description,
                task.status.as_str(),
                task.created_at,
                task.updated_at,
            ],
        )?;
        Ok(task)
    }

    /// Point a task at another column. `status` is not touched.
    pub fn move_task(&self, task_id: &str, new_column_id: &str) -> Result<bool, StorageError> {
        let conn = get_conn(&self.pool)?;
        let updated = conn.execute(
            "UPDATE tasks SET column_id = ?1, updated_at = ?2 WHERE id = ?3",
            params![new_column_id, Utc::now(), task_id],
        )?;
        Ok(updated > 0)
    }

    pub fn update_task(
        &self,
        task_id: &str,
        title: &str,
        description: Option<&str>,
    ) -> Result<Option<Task>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let task = conn
            .query_row(
                &format!(
                    "UPDATE tasks SET title = ?1, description = ?2, updated_at = ?3
                     WHERE id = ?4 RETURNING {TASK_COLUMNS}"
                ),
                params![title, description, Utc::now(), task_id],
                row_to_task,
            )
            .optional()?;
        Ok(task)
    }

    pub fn delete_task(&self, task_id: &str) -> Result<Option<Task>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let task = conn
            .query_row(
                &format!("DELETE FROM tasks WHERE id = ?1 RETURNING {TASK_COLUMNS}"),
                params![task_id],
                row_to_task,
            )
            .optional()?;
        Ok(task)
    }
}
