//! In-memory join of column rows and task rows into a [`Board`].

use std::collections::HashMap;

use kanban_core::{Board, Column, Task};

/// Attach each `(column_id, task)` pair to its column, keeping the order of
/// both inputs. Tasks whose column is not in `columns` are dropped.
pub(crate) fn assemble_board(
    id: String,
    title: String,
    mut columns: Vec<Column>,
    tasks: Vec<(String, Task)>,
) -> Board {
    let index: HashMap<String, usize> =
        columns.iter().enumerate().map(|(i, c)| (c.id.clone(), i)).collect();
    for (column_id, task) in tasks {
        match index.get(&column_id).and_then(|&i| columns.get_mut(i)) {
            Some(column) => column.tasks.push(task),
            None => tracing::warn!(%column_id, task_id = %task.id, "task row outside board columns"),
        }
    }
    Board { id, title, columns }
}
