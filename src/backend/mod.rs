//! Backend abstraction layer for the remote task service.
//!
//! This module defines the interface the UI talks to, along with the task
//! data types and error handling. The REST implementation lives in [`rest`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod rest;

pub use rest::RestBackend;

/// Common error types for backend operations.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Invalid URL: {0}")]
    Url(String),
}

/// Opaque task identifier, as issued by the service.
///
/// The service may use integers or strings; the value is only ever echoed
/// back into request paths.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskId {
    Int(i64),
    Str(String),
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{}", id),
            Self::Str(id) => f.write_str(id),
        }
    }
}

impl From<i64> for TaskId {
    fn from(id: i64) -> Self {
        Self::Int(id)
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        Self::Str(id.to_string())
    }
}

/// A task as returned by the service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// Which tasks the list shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskFilter {
    #[default]
    All,
    Completed,
    Pending,
}

impl TaskFilter {
    /// Every filter, in display order
    pub const ALL: [TaskFilter; 3] = [TaskFilter::All, TaskFilter::Completed, TaskFilter::Pending];

    /// Value of the `completed` query parameter, or `None` for the unfiltered endpoint
    pub fn completed_param(self) -> Option<bool> {
        match self {
            Self::All => None,
            Self::Completed => Some(true),
            Self::Pending => Some(false),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Completed => "Completed",
            Self::Pending => "Pending",
        }
    }

    /// The filter after this one in display order, wrapping around
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Completed,
            Self::Completed => Self::Pending,
            Self::Pending => Self::All,
        }
    }
}

/// Arguments for creating a new task.
#[derive(Clone, Debug, Serialize)]
pub struct CreateTaskArgs {
    pub title: String,
}

/// Arguments for updating a task. Both fields are always sent.
#[derive(Clone, Debug, Serialize)]
pub struct UpdateTaskArgs {
    pub title: String,
    pub completed: bool,
}

/// Backend trait the task service client implements.
///
/// Mutations return nothing: whatever the service echoes back is ignored and
/// the caller refetches the list instead.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Returns the backend type identifier (e.g., "rest").
    fn backend_type(&self) -> &str;

    async fn fetch_tasks(&self, filter: TaskFilter) -> Result<Vec<Task>, BackendError>;
    async fn create_task(&self, args: CreateTaskArgs) -> Result<(), BackendError>;
    async fn update_task(&self, id: &TaskId, args: UpdateTaskArgs) -> Result<(), BackendError>;
    async fn delete_task(&self, id: &TaskId) -> Result<(), BackendError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_id_accepts_integers_and_strings() {
        let tasks: Vec<Task> = serde_json::from_str(
            r#"[{"id": 1, "title": "Buy milk", "completed": false},
                {"id": "a7", "title": "Walk dog", "completed": true, "created_at": "2024-01-01"}]"#,
        )
        .unwrap();

        assert_eq!(tasks[0].id, TaskId::Int(1));
        assert_eq!(tasks[1].id, TaskId::Str("a7".to_string()));
        assert_eq!(tasks[0].id.to_string(), "1");
        assert_eq!(tasks[1].id.to_string(), "a7");
        assert!(tasks[1].completed);
    }

    #[test]
    fn missing_completed_defaults_to_false() {
        let task: Task = serde_json::from_str(r#"{"id": 3, "title": "Read"}"#).unwrap();
        assert!(!task.completed);
    }

    #[test]
    fn filter_query_mapping() {
        assert_eq!(TaskFilter::All.completed_param(), None);
        assert_eq!(TaskFilter::Completed.completed_param(), Some(true));
        assert_eq!(TaskFilter::Pending.completed_param(), Some(false));
    }

    #[test]
    fn filter_cycles_through_every_value() {
        let mut filter = TaskFilter::All;
        for expected in [TaskFilter::Completed, TaskFilter::Pending, TaskFilter::All] {
            filter = filter.next();
            assert_eq!(filter, expected);
        }
    }

    #[test]
    fn update_args_always_carry_both_fields() {
        let body = serde_json::to_value(UpdateTaskArgs {
            title: "Buy milk".to_string(),
            completed: true,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"title": "Buy milk", "completed": true}));
    }
}
