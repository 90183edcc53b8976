//! Service layer for the kanban board
//!
//! Business rules that sit between HTTP handlers and storage: the lazily
//! created singleton board and error handling of the board read path.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]

mod board_service;
mod error;
mod task_service;
#[cfg(test)]
mod test_support;

pub use board_service::BoardService;
pub use error::ServiceError;
pub use task_service::TaskService;
