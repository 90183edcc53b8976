use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use kanban_core::Task;

use crate::AppState;
use crate::api_error::ApiError;
use crate::request_types::{CreateTaskRequest, MoveTaskRequest, UpdateTaskRequest};
use crate::response_types::MessageResponse;

const TASK_NOT_FOUND: &str = "Task not found";

pub async fn create_task(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let Json(req) = payload?;
    let (column_id, new_task) = req.validate()?;
    let task = state
        .task_service
        .add_task(&column_id, new_task)
        .await
        .map_err(|e| ApiError::from_service(e, "Failed to create task", state.expose_error_details))?;
    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn move_task(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<MoveTaskRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(req) = payload?;
    let (task_id, new_column_id) = req.validate()?;
    state
        .task_service
        .move_task(&task_id, &new_column_id)
        .await
        .map_err(|e| ApiError::from_service(e, "Failed to move task", state.expose_error_details))?;
    Ok(Json(MessageResponse { message: "Task moved successfully" }))
}

pub async fn update_task(
    State(state): State<Arc<AppState>>,
    Path(task_id): Path<String>,
    payload: Result<Json<UpdateTaskRequest>, JsonRejection>,
) -> Result<Json<Task>, ApiError> {
    let Json(req) = payload?;
    let (title, description) = req.validate()?;
    let updated = state
        .task_service
        .update_task(&task_id, &title, description.as_deref())
        .await
        .map_err(|e| ApiError::from_service(e, "Failed to update task", state.expose_error_details))?;
    updated.map(Json).ok_or_else(|| ApiError::NotFound(TASK_NOT_FOUND.to_owned()))
}

pub async fn delete_task(
    State(state): State<Arc<AppState>>,
    Path(task_id): Path<String>,
) -> Result<Json<Task>, ApiError> {
    let deleted = state
        .task_service
        .delete_task(&task_id)
        .await
        .map_err(|e| ApiError::from_service(e, "Failed to delete task", state.expose_error_details))?;
    deleted.map(Json).ok_or_else(|| ApiError::NotFound(TASK_NOT_FOUND.to_owned()))
}
