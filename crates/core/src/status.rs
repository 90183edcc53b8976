//! Task status and the column-title slug it is derived from.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lower-cases a column title and turns spaces into hyphens.
///
/// `"In Progress"` becomes `"in-progress"`.
pub fn slugify(title: &str) -> String {
    title.to_lowercase().replace(' ', "-")
}

/// Workflow status of a task.
///
/// Always derived from the title of the column owning the task at the time
/// it was created or moved. The "To Do" column slugs to `to-do`, which is
/// accepted as an alias of the canonical `todo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[serde(alias = "to-do")]
    Todo,
    InProgress,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid task status: {0}")]
pub struct ParseStatusError(pub String);

impl TaskStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }

    /// Status a task takes when it lands in the column titled `title`.
    pub fn from_column_title(title: &str) -> Result<Self, ParseStatusError> {
        slugify(title).parse()
    }
}

impl FromStr for TaskStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" | "to-do" => Ok(Self::Todo),
            "in-progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(ParseStatusError(s.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
