#![expect(clippy::unwrap_used, reason = "test code")]

use kanban_core::TaskStatus;

use super::{create_test_storage, new_task};
use crate::StorageBackend;
use crate::traits::{BoardStore, SchemaStore, TaskStore};

#[test]
fn create_board_persists_default_columns() {
    let (storage, _temp_dir) = create_test_storage();
    let created = storage.create_board("Sprint 1").unwrap();
    assert_eq!(created.title, "Sprint 1");

    let loaded = storage.get_board(&created.id).unwrap().unwrap();
    assert_eq!(loaded, created);
    let titles: Vec<&str> = loaded.columns.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, ["To Do", "In Progress", "Done"]);
    assert!(loaded.columns.iter().all(|c| c.tasks.is_empty()));
}

#[test]
fn get_board_unknown_id_is_none() {
    let (storage, _temp_dir) = create_test_storage();
    assert!(storage.get_board("nope").unwrap().is_none());
}

#[test]
fn create_board_with_fixed_id_is_found_again() {
    let (storage, _temp_dir) = create_test_storage();
    storage.create_board_with_id("default-board", "My Kanban Board").unwrap();
    let board = storage.get_board("default-board").unwrap().unwrap();
    assert_eq!(board.id, "default-board");
    assert_eq!(board.columns.len(), 3);
}

#[test]
fn duplicate_board_id_is_reported_as_duplicate() {
    let (storage, _temp_dir) = create_test_storage();
    storage.create_board_with_id("b", "first").unwrap();
    let err = storage.create_board_with_id("b", "second").unwrap_err();
    assert!(err.is_duplicate(), "unexpected error: {err}");
}

#[test]
fn tasks_are_nested_under_their_columns() {
    let (storage, _temp_dir) = create_test_storage();
    let board = storage.create_board("b").unwrap();
    let todo = &board.columns[0].id;
    let done = &board.columns[2].id;

    storage.add_task(todo, new_task("one", TaskStatus::Todo)).unwrap();
    storage.add_task(done, new_task("two", TaskStatus::Done)).unwrap();
    storage.add_task(todo, new_task("three", TaskStatus::Todo)).unwrap();

    let loaded = storage.get_board(&board.id).unwrap().unwrap();
    let titles = |i: usize| -> Vec<String> {
        loaded.columns[i].tasks.iter().map(|t| t.title.clone()).collect()
    };
    assert_eq!(titles(0), ["one", "three"]);
    assert!(titles(1).is_empty());
    assert_eq!(titles(2), ["two"]);
}

#[test]
fn deleting_board_cascades_to_columns_and_tasks() {
    let (storage, _temp_dir) = create_test_storage();
    let board = storage.create_board("b").unwrap();
    let task = storage.add_task(&board.columns[1].id, new_task("t", TaskStatus::InProgress)).unwrap();

    assert!(storage.delete_board(&board.id).unwrap());
    assert!(storage.get_board(&board.id).unwrap().is_none());
    assert!(storage.delete_task(&task.id).unwrap().is_none(), "task should be gone by cascade");
    assert!(!storage.delete_board(&board.id).unwrap());
}

#[test]
fn initialize_database_is_idempotent() {
    let (storage, _temp_dir) = create_test_storage();
    let board = storage.create_board("keep me").unwrap();
    storage.initialize_database().unwrap();
    storage.initialize_database().unwrap();
    assert!(storage.get_board(&board.id).unwrap().is_some());
}

#[test]
fn ping_returns_database_clock() {
    let (storage, _temp_dir) = create_test_storage();
    let now = storage.ping().unwrap();
    let drift = (chrono::Utc::now() - now).num_seconds().abs();
    assert!(drift < 60, "database clock drift {drift}s");
}

#[tokio::test]
async fn backend_dispatches_to_sqlite() {
    let (storage, _temp_dir) = create_test_storage();
    let backend = StorageBackend::Sqlite(storage);
    assert_eq!(backend.kind(), "sqlite");

    backend.initialize_database().await.unwrap();
    let board = backend.create_board_with_id("default-board", "Board").await.unwrap();
    let task = backend
        .add_task(&board.columns[0].id, new_task("Write spec", TaskStatus::Todo))
        .await
        .unwrap();
    let loaded = backend.get_board("default-board").await.unwrap().unwrap();
    assert_eq!(loaded.columns[0].tasks, vec![task]);
}
