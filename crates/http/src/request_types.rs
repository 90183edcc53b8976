//! Request bodies (Deserialize) and their required-field checks.
//!
//! Fields are optional at the serde level so a missing field yields the
//! route's fixed 400 message instead of a generic deserialization error.
//! Empty strings count as missing.

use kanban_core::{NewTask, TaskStatus};
use serde::Deserialize;

use crate::api_error::ApiError;

fn present(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

#[derive(Debug, Deserialize)]
pub struct CreateBoardRequest {
    pub title: Option<String>,
}

impl CreateBoardRequest {
    pub fn into_title(self) -> Result<String, ApiError> {
        present(self.title).ok_or_else(|| ApiError::BadRequest("Board title is required".into()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub column_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}

impl CreateTaskRequest {
    /// Split into the target column id and the task to insert.
    pub fn validate(self) -> Result<(String, NewTask), ApiError> {
        let (Some(column_id), Some(title), Some(status)) =
            (present(self.column_id), present(self.title), present(self.status))
        else {
            return Err(ApiError::BadRequest("Column ID, title, and status are required".into()));
        };
        let status = status
            .parse::<TaskStatus>()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;
        Ok((column_id, NewTask { title, description: self.description, status }))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveTaskRequest {
    pub task_id: Option<String>,
    pub new_column_id: Option<String>,
}

impl MoveTaskRequest {
    pub fn validate(self) -> Result<(String, String), ApiError> {
        match (present(self.task_id), present(self.new_column_id)) {
            (Some(task_id), Some(new_column_id)) => Ok((task_id, new_column_id)),
            _ => Err(ApiError::BadRequest("Task ID and new Column ID are required".into())),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl UpdateTaskRequest {
    /// Returns the new title and description. A missing description clears it.
    pub fn validate(self) -> Result<(String, Option<String>), ApiError> {
        let title =
            present(self.title).ok_or_else(|| ApiError::BadRequest("Task title is required".into()))?;
        Ok((title, self.description))
    }
}
