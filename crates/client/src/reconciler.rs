//! Keeps the local board in step with the server.
//!
//! Drag moves are optimistic: the new state is published before the move
//! request is sent and the pre-drag state is published again if it fails.
//! Adds, edits and deletes wait for the server's answer and only then
//! touch local state.

use kanban_core::TaskStatus;
use tokio::sync::watch;

use crate::api::KanbanClient;
use crate::error::{ReconcileError, StateError};
use crate::state::{BoardState, DragEnd, DropOutcome};

/// Result of a drag that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Dropped outside a column or back where it started. Nothing was sent.
    Unchanged,
    /// The server accepted the move; the optimistic state stands.
    Committed,
}

pub struct Reconciler {
    client: KanbanClient,
    state: Option<BoardState>,
    tx: watch::Sender<Option<BoardState>>,
}

impl Reconciler {
    #[must_use]
    pub fn new(client: KanbanClient) -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { client, state: None, tx }
    }

    /// Receiver that sees every published board state, `None` until loaded.
    pub fn subscribe(&self) -> watch::Receiver<Option<BoardState>> {
        self.tx.subscribe()
    }

    pub fn state(&self) -> Option<&BoardState> {
        self.state.as_ref()
    }

    fn current(&self) -> Result<&BoardState, ReconcileError> {
        self.state.as_ref().ok_or(ReconcileError::NotLoaded)
    }

    fn publish(&mut self, state: BoardState) {
        self.tx.send_replace(Some(state.clone()));
        self.state = Some(state);
    }

    /// Fetch the board and publish it.
    pub async fn load(&mut self) -> Result<(), ReconcileError> {
        let board = self.client.fetch_board().await.inspect_err(|e| {
            tracing::error!(error = %e, "Failed to fetch board");
        })?;
        self.publish(BoardState::from(board));
        Ok(())
    }

    /// Apply a drag locally, then tell the server.
    ///
    /// # Errors
    /// A drag that does not fit the board is rejected before anything is
    /// published. If the move request fails, the pre-drag state has already
    /// been published again when the error is returned.
    pub async fn on_drag_end(&mut self, drag: &DragEnd) -> Result<MoveOutcome, ReconcileError> {
        let snapshot = self.current()?.clone();
        let (next, request) = match snapshot.drop_task(drag)? {
            DropOutcome::Unchanged => return Ok(MoveOutcome::Unchanged),
            DropOutcome::Moved { state, request } => (state, request),
        };

        self.publish(next);
        match self.client.move_task(&request).await {
            Ok(()) => Ok(MoveOutcome::Committed),
            Err(e) => {
                tracing::error!(task_id = %request.task_id, error = %e, "Failed to move task, reverting");
                self.publish(snapshot);
                Err(e.into())
            },
        }
    }

    /// Create a task in `column_id`. Its status follows the column title.
    pub async fn add_task(
        &mut self,
        column_id: &str,
        title: &str,
        description: Option<&str>,
    ) -> Result<(), ReconcileError> {
        let column = self
            .current()?
            .column(column_id)
            .ok_or_else(|| StateError::UnknownColumn(column_id.to_owned()))?;
        let status = TaskStatus::from_column_title(&column.title).map_err(StateError::from)?;

        let task = self
            .client
            .create_task(column_id, title, description, status)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to create task"))?;
        let next = self.current()?.with_task_added(column_id, task)?;
        self.publish(next);
        Ok(())
    }

    pub async fn update_task(
        &mut self,
        task_id: &str,
        title: &str,
        description: Option<&str>,
    ) -> Result<(), ReconcileError> {
        self.current()?;
        let task = self
            .client
            .update_task(task_id, title, description)
            .await
            .inspect_err(|e| tracing::error!(%task_id, error = %e, "Failed to update task"))?;
        let next = self.current()?.with_task_replaced(task)?;
        self.publish(next);
        Ok(())
    }

    pub async fn delete_task(&mut self, task_id: &str) -> Result<(), ReconcileError> {
        self.current()?;
        self.client
            .delete_task(task_id)
            .await
            .inspect_err(|e| tracing::error!(%task_id, error = %e, "Failed to delete task"))?;
        let next = self.current()?.without_task(task_id)?;
        self.publish(next);
        Ok(())
    }
}
