//! Client-side board tree.
//!
//! A [`BoardState`] is never mutated in place. Every update returns a new
//! state in which untouched columns are the same `Arc` as before and only
//! the affected columns are copied.

use std::sync::Arc;

use kanban_core::{Board, Column, Task, TaskStatus};
use serde::Serialize;

use crate::error::StateError;

/// A column and a position inside it, as reported by the drag source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragLocation {
    pub column_id: String,
    pub index: usize,
}

impl DragLocation {
    pub fn new(column_id: impl Into<String>, index: usize) -> Self {
        Self { column_id: column_id.into(), index }
    }
}

/// End of a drag gesture. `destination` is `None` when the task was
/// dropped outside any column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragEnd {
    pub source: DragLocation,
    pub destination: Option<DragLocation>,
}

/// Body of `POST /api/tasks/move`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    pub task_id: String,
    pub new_column_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// Nothing to do; no request should be sent.
    Unchanged,
    Moved { state: BoardState, request: MoveRequest },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    id: String,
    title: String,
    columns: Vec<Arc<Column>>,
}

impl From<Board> for BoardState {
    fn from(board: Board) -> Self {
        Self {
            id: board.id,
            title: board.title,
            columns: board.columns.into_iter().map(Arc::new).collect(),
        }
    }
}

impl BoardState {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn columns(&self) -> &[Arc<Column>] {
        &self.columns
    }

    pub fn column(&self, column_id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == column_id).map(Arc::as_ref)
    }

    /// Locate a task by id: the column holding it and its position there.
    pub fn find_task(&self, task_id: &str) -> Option<(&Column, usize)> {
        self.columns.iter().find_map(|c| {
            c.tasks.iter().position(|t| t.id == task_id).map(|i| (Arc::as_ref(c), i))
        })
    }

    /// Deep copy back into the wire type.
    pub fn to_board(&self) -> Board {
        Board {
            id: self.id.clone(),
            title: self.title.clone(),
            columns: self.columns.iter().map(|c| Column::clone(c)).collect(),
        }
    }

    fn column_index(&self, column_id: &str) -> Result<usize, StateError> {
        self.columns
            .iter()
            .position(|c| c.id == column_id)
            .ok_or_else(|| StateError::UnknownColumn(column_id.to_owned()))
    }

    fn task_column_index(&self, task_id: &str) -> Result<usize, StateError> {
        self.columns
            .iter()
            .position(|c| c.contains_task(task_id))
            .ok_or_else(|| StateError::TaskNotFound(task_id.to_owned()))
    }

    fn with_columns(&self, columns: Vec<Arc<Column>>) -> Self {
        Self { id: self.id.clone(), title: self.title.clone(), columns }
    }

    /// Apply a finished drag.
    ///
    /// The moved task takes the status named by the destination column's
    /// title and is inserted at the destination index, clamped to the
    /// column length. On error the current state is left as it was.
    pub fn drop_task(&self, drag: &DragEnd) -> Result<DropOutcome, StateError> {
        let Some(destination) = drag.destination.as_ref() else {
            return Ok(DropOutcome::Unchanged);
        };
        if *destination == drag.source {
            return Ok(DropOutcome::Unchanged);
        }

        let src = self.column_index(&drag.source.column_id)?;
        let dst = self.column_index(&destination.column_id)?;
        let len = self.columns[src].tasks.len();
        if drag.source.index >= len {
            return Err(StateError::SourceOutOfRange {
                column_id: drag.source.column_id.clone(),
                index: drag.source.index,
                len,
            });
        }
        let status = TaskStatus::from_column_title(&self.columns[dst].title)?;

        let mut columns = self.columns.clone();
        let mut task = Arc::make_mut(&mut columns[src]).tasks.remove(drag.source.index);
        task.status = status;
        let request =
            MoveRequest { task_id: task.id.clone(), new_column_id: destination.column_id.clone() };

        let target = Arc::make_mut(&mut columns[dst]);
        let at = destination.index.min(target.tasks.len());
        target.tasks.insert(at, task);

        Ok(DropOutcome::Moved { state: self.with_columns(columns), request })
    }

    /// Append `task` to the end of `column_id`.
    pub fn with_task_added(&self, column_id: &str, task: Task) -> Result<Self, StateError> {
        let idx = self.column_index(column_id)?;
        let mut columns = self.columns.clone();
        Arc::make_mut(&mut columns[idx]).tasks.push(task);
        Ok(self.with_columns(columns))
    }

    /// Swap in `task` wherever a task with the same id currently sits.
    pub fn with_task_replaced(&self, task: Task) -> Result<Self, StateError> {
        let idx = self.task_column_index(&task.id)?;
        let mut columns = self.columns.clone();
        let column = Arc::make_mut(&mut columns[idx]);
        if let Some(slot) = column.tasks.iter_mut().find(|t| t.id == task.id) {
            *slot = task;
        }
        Ok(self.with_columns(columns))
    }

    pub fn without_task(&self, task_id: &str) -> Result<Self, StateError> {
        let idx = self.task_column_index(task_id)?;
        let mut columns = self.columns.clone();
        Arc::make_mut(&mut columns[idx]).tasks.retain(|t| t.id != task_id);
        Ok(self.with_columns(columns))
    }
}
