//! Client side of the kanban board: a reqwest API client, an immutable
//! board tree with structural sharing, and a reconciler that applies drag
//! moves optimistically.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]

mod api;
mod error;
mod reconciler;
mod state;

pub use api::KanbanClient;
pub use error::{ClientError, ReconcileError, StateError};
pub use reconciler::{MoveOutcome, Reconciler};
pub use state::{BoardState, DragEnd, DragLocation, DropOutcome, MoveRequest};
