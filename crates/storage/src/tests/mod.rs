//! Test utilities and module declarations for storage tests.

use crate::Storage;
use kanban_core::{NewTask, TaskStatus};
use tempfile::TempDir;

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_test_storage() -> (Storage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let storage = Storage::new(&db_path, 2).unwrap();
    (storage, temp_dir)
}

pub fn new_task(title: &str, status: TaskStatus) -> NewTask {
    NewTask { title: title.to_owned(), description: None, status }
}

mod board_tests;
