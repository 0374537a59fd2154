//! Backing-store seam.
//!
//! The engine treats the store as write-only: it issues at most one update
//! per entity per committed gesture and never reads from it mid-gesture.
//! `delete_task` exists only for the batch mode in [`crate::ops::batch`].

use serde::{Deserialize, Serialize};

use crate::model::TaskStatus;

/// Error type surfaced by the backing store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("entity not found: {0}")]
    NotFound(String),
    #[error("store rejected the mutation: {0}")]
    Rejected(String),
}

/// Partial update to a task. A single patch may carry both fields — leaving
/// the focus zone onto a status column is still one mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_focus: Option<bool>,
}

impl TaskPatch {
    pub fn status(status: TaskStatus) -> Self {
        TaskPatch {
            status: Some(status),
            is_focus: None,
        }
    }

    pub fn focus(is_focus: bool) -> Self {
        TaskPatch {
            status: None,
            is_focus: Some(is_focus),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.is_focus.is_none()
    }
}

/// Partial update to a project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
}

impl ProjectPatch {
    pub fn favorite(is_favorite: bool) -> Self {
        ProjectPatch {
            is_favorite: Some(is_favorite),
        }
    }
}

/// The operations the engine consumes from the backing store
pub trait Store {
    fn update_task(&mut self, task_id: &str, patch: &TaskPatch) -> Result<(), StoreError>;
    fn update_project(&mut self, project_id: &str, patch: &ProjectPatch) -> Result<(), StoreError>;
    fn delete_task(&mut self, task_id: &str) -> Result<(), StoreError>;
}
