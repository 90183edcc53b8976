use kanban_core::{Board, Column};
use rusqlite::{OptionalExtension as _, params};
use uuid::Uuid;

use super::{Storage, TASK_COLUMNS, get_conn, row_to_task};
use crate::assembly::assemble_board;
use crate::error::StorageError;

impl Storage {
    /// Create a board with a generated id and its default columns.
    ///
    /// # Errors
    /// Returns error if any insert fails. Rows inserted before the failure stay.
    pub fn create_board(&self, title: &str) -> Result<Board, StorageError> {
        self.create_board_with_id(&Uuid::new_v4().to_string(), title)
    }

    pub fn create_board_with_id(&self, id: &str, title: &str) -> Result<Board, StorageError> {
        let board = Board::with_default_columns(id.to_owned(), title.to_owned());
        let conn = get_conn(&self.pool)?;
        conn.execute("INSERT INTO boards (id, title) VALUES (?1, ?2)", params![board.id, board.title])?;
        for (position, column) in board.columns.iter().enumerate() {
            conn.execute(
                "INSERT INTO columns (id, board_id, title, position) VALUES (?1, ?2, ?3, ?4)",
                params![column.id, board.id, column.title, position as i64],
            )?;
        }
        tracing::info!(board_id = %board.id, title = %board.title, "created board");
        Ok(board)
    }

    /// Get the board with its columns and tasks.
    ///
    /// # Errors
    /// Returns error if a query fails or a task row carries an unknown status.
    pub fn get_board(&self, id: &str) -> Result<Option<Board>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let title: Option<String> = conn
            .query_row("SELECT title FROM boards WHERE id = ?1", params![id], |row| row.get(0))
            .optional()?;
        let Some(title) = title else {
            return Ok(None);
        };

        let mut stmt =
            conn.prepare("SELECT id, title FROM columns WHERE board_id = ?1 ORDER BY position, id")?;
        let columns = stmt
            .query_map(params![id], |row| Ok(Column::new(row.get(0)?, row.get(1)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        let mut stmt = conn.prepare(&format!(
            "SELECT column_id, {TASK_COLUMNS} FROM tasks
             WHERE column_id IN (SELECT id FROM columns WHERE board_id = ?1)
             ORDER BY created_at, id"
        ))?;
        let tasks = stmt
            .query_map(params![id], |row| Ok((row.get::<_, String>("column_id")?, row_to_task(row)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(assemble_board(id.to_owned(), title, columns, tasks)))
    }

    pub fn delete_board(&self, id: &str) -> Result<bool, StorageError> {
        let conn = get_conn(&self.pool)?;
        let deleted = conn.execute("DELETE FROM boards WHERE id = ?1", params![id])?;
        Ok(deleted > 0)
    }
}
