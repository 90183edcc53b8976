//! BoardStore implementation for PgStorage.

use async_trait::async_trait;
use kanban_core::{Board, Column};
use sqlx::Row;
use uuid::Uuid;

use super::{PgStorage, TASK_COLUMNS, row_to_task};
use crate::assembly::assemble_board;
use crate::error::StorageError;
use crate::traits::BoardStore;

#[async_trait]
impl BoardStore for PgStorage {
    async fn create_board(&self, title: &str) -> Result<Board, StorageError> {
        self.create_board_with_id(&Uuid::new_v4().to_string(), title).await
    }

    async fn create_board_with_id(&self, id: &str, title: &str) -> Result<Board, StorageError> {
        let board = Board::with_default_columns(id.to_owned(), title.to_owned());
        sqlx::query("INSERT INTO boards (id, title) VALUES ($1, $2)")
            .bind(&board.id)
            .bind(&board.title)
            .execute(&self.pool)
            .await?;
        for (position, column) in (0_i32..).zip(&board.columns) {
            sqlx::query("INSERT INTO columns (id, board_id, title, position) VALUES ($1, $2, $3, $4)")
                .bind(&column.id)
                .bind(&board.id)
                .bind(&column.title)
                .bind(position)
                .execute(&self.pool)
                .await?;
        }
        tracing::info!(board_id = %board.id, title = %board.title, "created board");
        Ok(board)
    }

    async fn get_board(&self, id: &str) -> Result<Option<Board>, StorageError> {
        let Some(board_row) = sqlx::query("SELECT id, title FROM boards WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
        else {
            return Ok(None);
        };

        let columns = sqlx::query(
            "SELECT id, title FROM columns WHERE board_id = $1 ORDER BY position, id",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?
        .iter()
        .map(|r| Ok(Column::new(r.try_get("id")?, r.try_get("title")?)))
        .collect::<Result<Vec<_>, StorageError>>()?;

        let tasks = sqlx::query(&format!(
            "SELECT column_id, {TASK_COLUMNS} FROM tasks
             WHERE column_id IN (SELECT id FROM columns WHERE board_id = $1)
             ORDER BY created_at, id"
        ))
        .bind(id)
        .fetch_all(&self.pool)
        .await?
        .iter()
        .map(|r| Ok((r.try_get::<String, _>("column_id")?, row_to_task(r)?)))
        .collect::<Result<Vec<_>, StorageError>>()?;

        Ok(Some(assemble_board(
            board_row.try_get("id")?,
            board_row.try_get("title")?,
            columns,
            tasks,
        )))
    }

    async fn delete_board(&self, id: &str) -> Result<bool, StorageError> {
        let result = sqlx::query("DELETE FROM boards WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
