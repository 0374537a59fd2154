use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Workflow status of a task (one status column each)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    /// The `<status>` segment of a `column-<status>` container id
    pub fn column_segment(self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Done => "done",
        }
    }

    /// Parse a `column-<status>` segment back into a status
    pub fn from_column_segment(s: &str) -> Option<TaskStatus> {
        match s {
            "todo" => Some(TaskStatus::Todo),
            "in_progress" => Some(TaskStatus::InProgress),
            "done" => Some(TaskStatus::Done),
            _ => None,
        }
    }
}

/// Optional task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// A task as the backing store owns it. The drag engine never creates or
/// destroys one, it only proposes attribute changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task ID
    pub id: String,
    /// Task title text
    pub title: String,
    /// Workflow status
    pub status: TaskStatus,
    /// Owning project, if any
    pub project_id: Option<String>,
    /// Focus flag, independent of status
    pub is_focus: bool,
    /// Optional priority
    pub priority: Option<Priority>,
    /// Optional due date
    pub due_date: Option<NaiveDate>,
}

impl Task {
    /// Create a task with the given fields and no optional attributes
    pub fn new(id: impl Into<String>, title: impl Into<String>, status: TaskStatus) -> Self {
        Task {
            id: id.into(),
            title: title.into(),
            status,
            project_id: None,
            is_focus: false,
            priority: None,
            due_date: None,
        }
    }

    pub fn with_project(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    pub fn with_focus(mut self, is_focus: bool) -> Self {
        self.is_focus = is_focus;
        self
    }
}
