use std::sync::Arc;

use kanban_core::{Board, DEFAULT_BOARD_TITLE};
use kanban_storage::StorageBackend;
use kanban_storage::traits::{BoardStore, SchemaStore};
use tokio::sync::OnceCell;

use crate::ServiceError;
use crate::error::check_title;

pub struct BoardService {
    storage: Arc<StorageBackend>,
    default_board_id: String,
    schema_ready: OnceCell<()>,
}

impl BoardService {
    #[must_use]
    pub fn new(storage: Arc<StorageBackend>, default_board_id: String) -> Self {
        Self { storage, default_board_id, schema_ready: OnceCell::new() }
    }

    /// Ensure the schema, then return the singleton board, creating it on first use.
    ///
    /// The schema is initialized once per service; a failed attempt is retried
    /// on the next call.
    pub async fn fetch_or_create(&self) -> Result<Board, ServiceError> {
        self.schema_ready.get_or_try_init(|| self.storage.initialize_database()).await?;

        let id = self.default_board_id.as_str();
        if let Some(board) = self.get_board(id).await {
            return Ok(board);
        }

        match self.storage.create_board_with_id(id, DEFAULT_BOARD_TITLE).await {
            Ok(board) => Ok(board),
            // Another request created it between our read and insert.
            Err(e) if e.is_duplicate() => match self.storage.get_board(id).await? {
                Some(board) => Ok(board),
                None => Err(e.into()),
            },
            Err(e) => Err(e.into()),
        }
    }

    /// Load a board. Storage failures are logged and reported as absence,
    /// so callers cannot tell a broken database from a missing board.
    pub async fn get_board(&self, id: &str) -> Option<Board> {
        match self.storage.get_board(id).await {
            Ok(board) => board,
            Err(e) => {
                tracing::error!(board_id = %id, error = %e, "Error fetching board");
                None
            },
        }
    }

    pub async fn create_board(&self, title: &str) -> Result<Board, ServiceError> {
        check_title("Board title", title)?;
        Ok(self.storage.create_board(title).await?)
    }

    /// Delete a board with all its columns and tasks.
    pub async fn delete_board(&self, id: &str) -> Result<bool, ServiceError> {
        Ok(self.storage.delete_board(id).await?)
    }
}
