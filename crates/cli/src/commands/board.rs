use anyhow::Result;
use kanban_core::KanbanConfig;
use kanban_storage::traits::BoardStore;

use crate::open_backend;

pub(crate) async fn show(config: &KanbanConfig, board_id: &str) -> Result<()> {
    let backend = open_backend(config).await?;
    match backend.get_board(board_id).await? {
        Some(board) => println!("{}", serde_json::to_string_pretty(&board)?),
        None => println!("Board not found: {board_id}"),
    }
    Ok(())
}

pub(crate) async fn reset(config: &KanbanConfig, board_id: &str) -> Result<()> {
    let backend = open_backend(config).await?;
    if backend.delete_board(board_id).await? {
        tracing::info!(%board_id, "board deleted");
        println!("Deleted board {board_id}");
    } else {
        println!("Board not found: {board_id}");
    }
    Ok(())
}
