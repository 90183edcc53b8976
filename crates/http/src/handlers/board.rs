use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;

use kanban_core::Board;

use crate::AppState;
use crate::api_error::ApiError;
use crate::request_types::CreateBoardRequest;

/// The singleton board, created with its three default columns on first use.
pub async fn get_board(State(state): State<Arc<AppState>>) -> Result<Json<Board>, ApiError> {
    state
        .board_service
        .fetch_or_create()
        .await
        .map(Json)
        .map_err(|e| ApiError::from_service(e, "Failed to load board", state.expose_error_details))
}

pub async fn create_board(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateBoardRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Board>), ApiError> {
    let Json(req) = payload?;
    let title = req.into_title()?;
    let board = state
        .board_service
        .create_board(&title)
        .await
        .map_err(|e| ApiError::from_service(e, "Failed to create board", state.expose_error_details))?;
    tracing::info!(board_id = %board.id, "board created");
    Ok((StatusCode::CREATED, Json(board)))
}
