//! Typed error enum for the service layer.

use kanban_core::MAX_TITLE_LEN;
use kanban_storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (DB, not found, duplicate, etc.).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Caller provided invalid input.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Reject titles longer than the schema allows.
pub(crate) fn check_title(field: &str, title: &str) -> Result<(), ServiceError> {
    let len = title.chars().count();
    if len > MAX_TITLE_LEN {
        return Err(ServiceError::InvalidInput(format!(
            "{field} must be at most {MAX_TITLE_LEN} characters (got {len})"
        )));
    }
    Ok(())
}
