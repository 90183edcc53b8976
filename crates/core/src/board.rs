use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{DEFAULT_COLUMN_TITLES, TaskStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub columns: Vec<Column>,
}

/// Caller-supplied fields of a task about to be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
}

impl Column {
    pub fn new(id: String, title: String) -> Self {
        Self { id, title, tasks: Vec::new() }
    }

    pub fn contains_task(&self, task_id: &str) -> bool {
        self.tasks.iter().any(|t| t.id == task_id)
    }
}

impl Board {
    /// Board with freshly generated "To Do", "In Progress" and "Done" columns.
    pub fn with_default_columns(id: String, title: String) -> Self {
        let columns = DEFAULT_COLUMN_TITLES
            .iter()
            .map(|t| Column::new(Uuid::new_v4().to_string(), (*t).to_owned()))
            .collect();
        Self { id, title, columns }
    }
}

impl NewTask {
    /// Stamps the fields with a fresh id and identical created/updated times.
    pub fn into_task(self, now: DateTime<Utc>) -> Task {
        Task {
            id: Uuid::new_v4().to_string(),
            title: self.title,
            description: self.description,
            status: self.status,
            created_at: now,
            updated_at: now,
        }
    }
}
