//! Bulk operations over a multi-selection.
//!
//! A simpler mode than the drag gesture: each selected item gets its own
//! independent store call, with no ordering guarantee between them and no
//! atomicity — one failure does not roll back or stop the others. The
//! destructive-delete confirmation is the caller's responsibility, upstream
//! of this module.

use crate::model::TaskStatus;
use crate::store::{Store, StoreError, TaskPatch};

/// Per-item outcome of a batch call
#[derive(Debug, Default)]
pub struct BatchReport {
    /// IDs whose mutation was applied
    pub applied: Vec<String>,
    /// IDs whose mutation the store rejected, with the error
    pub failed: Vec<(String, StoreError)>,
}

impl BatchReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    fn record(&mut self, id: &str, result: Result<(), StoreError>) {
        match result {
            Ok(()) => self.applied.push(id.to_string()),
            Err(err) => {
                log::warn!("batch call for {} failed: {}", id, err);
                self.failed.push((id.to_string(), err));
            }
        }
    }
}

/// Set the status of every selected task, one call per task
pub fn bulk_set_status<S: Store>(
    store: &mut S,
    task_ids: &[String],
    status: TaskStatus,
) -> BatchReport {
    let patch = TaskPatch::status(status);
    let mut report = BatchReport::default();
    for id in task_ids {
        report.record(id, store.update_task(id, &patch));
    }
    report
}

/// Delete every selected task, one call per task
pub fn bulk_delete<S: Store>(store: &mut S, task_ids: &[String]) -> BatchReport {
    let mut report = BatchReport::default();
    for id in task_ids {
        report.record(id, store.delete_task(id));
    }
    report
}
