//! Typed error enums for the client crate.

use kanban_core::ParseStatusError;
use thiserror::Error;

/// Errors from talking to the kanban HTTP API.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),
    #[error("HTTP status {code}: {body}")]
    HttpStatus { code: u16, body: String },
    #[error("JSON parse error in {context}: {source}")]
    JsonParse {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

/// A board update that does not fit the current state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("column {0} is not on the board")]
    UnknownColumn(String),
    #[error("no task at index {index} of column {column_id} ({len} tasks)")]
    SourceOutOfRange { column_id: String, index: usize, len: usize },
    #[error("task {0} is not on the board")]
    TaskNotFound(String),
    #[error(transparent)]
    UnknownStatus(#[from] ParseStatusError),
}

/// Failure of a [`crate::Reconciler`] action.
#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("board not loaded")]
    NotLoaded,
    #[error(transparent)]
    State(#[from] StateError),
    #[error(transparent)]
    Client(#[from] ClientError),
}
