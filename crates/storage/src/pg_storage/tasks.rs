//! TaskStore implementation for PgStorage.

use async_trait::async_trait;
use chrono::Utc;
use kanban_core::{NewTask, Task};

use super::{PgStorage, TASK_COLUMNS, row_to_task};
use crate::error::StorageError;
use crate::traits::TaskStore;

#[async_trait]
impl TaskStore for PgStorage {
    async fn add_task(&self, column_id: &str, new_task: NewTask) -> Result<Task, StorageError> {
        let task = new_task.into_task(Utc::now());
        sqlx::query(
            "INSERT INTO tasks (id, column_id, title, description, status, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(&task.id)
        .bind(column_id)
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.status.as_str())
        .bind(task.created_at)
        .bind(task.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(task)
    }

    async fn move_task(&self, task_id: &str, new_column_id: &str) -> Result<bool, StorageError> {
        let result = sqlx::query("UPDATE tasks SET column_id = $1, updated_at = $2 WHERE id = $3")
            .bind(new_column_id)
            .bind(Utc::now())
            .bind(task_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn update_task(
        &self,
        task_id: &str,
        title: &str,
        description: Option<&str>,
    ) -> Result<Option<Task>, StorageError> {
        let row = sqlx::query(&format!(
            "UPDATE tasks SET title = $1, description = $2, updated_at = NOW()
             WHERE id = $3 RETURNING {TASK_COLUMNS}"
        ))
        .bind(title)
        .bind(description)
        .bind(task_id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(|r| row_to_task(&r)).transpose()
    }

    async fn delete_task(&self, task_id: &str) -> Result<Option<Task>, StorageError> {
        let row = sqlx::query(&format!("DELETE FROM tasks WHERE id = $1 RETURNING {TASK_COLUMNS}"))
            .bind(task_id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| row_to_task(&r)).transpose()
    }
}
