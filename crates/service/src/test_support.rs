use std::sync::Arc;

use kanban_storage::{Storage, StorageBackend};
use tempfile::TempDir;

#[expect(clippy::unwrap_used, reason = "test code")]
pub(crate) fn create_test_backend() -> (Arc<StorageBackend>, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let storage = Storage::new(&temp_dir.path().join("service.db"), 2).unwrap();
    (Arc::new(StorageBackend::Sqlite(storage)), temp_dir)
}
