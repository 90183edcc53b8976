use std::sync::Arc;

use kanban_core::{NewTask, Task};
use kanban_storage::StorageBackend;
use kanban_storage::traits::TaskStore;

use crate::ServiceError;
use crate::error::check_title;

pub struct TaskService {
    storage: Arc<StorageBackend>,
}

impl TaskService {
    #[must_use]
    pub fn new(storage: Arc<StorageBackend>) -> Self {
        Self { storage }
    }

    pub async fn add_task(&self, column_id: &str, task: NewTask) -> Result<Task, ServiceError> {
        check_title("Task title", &task.title)?;
        Ok(self.storage.add_task(column_id, task).await?)
    }

    /// Reassign the task's column. A task id that matches nothing is logged
    /// but still counts as success.
    pub async fn move_task(&self, task_id: &str, new_column_id: &str) -> Result<(), ServiceError> {
        let moved = self.storage.move_task(task_id, new_column_id).await?;
        if moved {
            tracing::debug!(%task_id, %new_column_id, "task moved");
        } else {
            tracing::warn!(%task_id, %new_column_id, "move matched no task");
        }
        Ok(())
    }

    pub async fn update_task(
        &self,
        task_id: &str,
        title: &str,
        description: Option<&str>,
    ) -> Result<Option<Task>, ServiceError> {
        check_title("Task title", title)?;
        Ok(self.storage.update_task(task_id, title, description).await?)
    }

    pub async fn delete_task(&self, task_id: &str) -> Result<Option<Task>, ServiceError> {
        Ok(self.storage.delete_task(task_id).await?)
    }
}

#[cfg(test)]
mod tests {
    #![expect(clippy::unwrap_used, reason = "test code")]

    use kanban_core::TaskStatus;
    use kanban_storage::traits::BoardStore;

    use super::*;
    use crate::test_support::create_test_backend;

    fn write_spec() -> NewTask {
        NewTask { title: "Write spec".to_owned(), description: None, status: TaskStatus::Todo }
    }

    #[tokio::test]
    async fn add_then_move_then_delete() {
        let (backend, _dir) = create_test_backend();
        let board = backend.create_board("Sprint 1").await.unwrap();
        let service = TaskService::new(Arc::clone(&backend));

        let task = service.add_task(&board.columns[0].id, write_spec()).await.unwrap();
        assert_eq!(task.status, TaskStatus::Todo);

        service.move_task(&task.id, &board.columns[2].id).await.unwrap();
        let loaded = backend.get_board(&board.id).await.unwrap().unwrap();
        assert_eq!(loaded.columns[2].tasks[0].id, task.id);

        let deleted = service.delete_task(&task.id).await.unwrap();
        assert_eq!(deleted.map(|t| t.id), Some(task.id));
    }

    #[tokio::test]
    async fn moving_a_missing_task_is_not_an_error() {
        let (backend, _dir) = create_test_backend();
        let board = backend.create_board("b").await.unwrap();
        let service = TaskService::new(backend);
        service.move_task("ghost", &board.columns[1].id).await.unwrap();
    }

    #[tokio::test]
    async fn update_and_delete_missing_task_return_none() {
        let (backend, _dir) = create_test_backend();
        let service = TaskService::new(backend);
        assert!(service.update_task("ghost", "t", None).await.unwrap().is_none());
        assert!(service.delete_task("ghost").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn overlong_task_title_is_rejected_before_storage() {
        let (backend, _dir) = create_test_backend();
        let service = TaskService::new(backend);
        let task = NewTask { title: "y".repeat(300), ..write_spec() };
        let err = service.add_task("any-column", task).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));
    }
}
