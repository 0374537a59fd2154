//! End-to-end gesture scenarios against a recording store.

use pretty_assertions::assert_eq;

use dropkit::drag::{
    ActivationConstraint, CollisionStrategy, CommitContext, DragController, DropCandidate,
    DropOutcome, Mutation, PointerSample, Rect, snapshot_projects, snapshot_tasks,
};
use dropkit::model::{Project, Task, TaskStatus};
use dropkit::ops::batch;
use dropkit::store::{ProjectPatch, Store, StoreError, TaskPatch};
use dropkit::zone::{DragItem, ZoneKey};

/// Store that records every call and optionally rejects configured IDs
#[derive(Default)]
struct RecordingStore {
    reject_ids: Vec<String>,
    task_updates: Vec<(String, TaskPatch)>,
    project_updates: Vec<(String, ProjectPatch)>,
    deletes: Vec<String>,
}

impl RecordingStore {
    fn rejecting(ids: &[&str]) -> Self {
        RecordingStore {
            reject_ids: ids.iter().map(|s| s.to_string()).collect(),
            ..RecordingStore::default()
        }
    }

    fn check(&self, id: &str) -> Result<(), StoreError> {
        if self.reject_ids.iter().any(|r| r == id) {
            Err(StoreError::Rejected(id.to_string()))
        } else {
            Ok(())
        }
    }

    fn total_calls(&self) -> usize {
        self.task_updates.len() + self.project_updates.len() + self.deletes.len()
    }
}

impl Store for RecordingStore {
    fn update_task(&mut self, task_id: &str, patch: &TaskPatch) -> Result<(), StoreError> {
        self.check(task_id)?;
        self.task_updates.push((task_id.to_string(), patch.clone()));
        Ok(())
    }

    fn update_project(&mut self, project_id: &str, patch: &ProjectPatch) -> Result<(), StoreError> {
        self.check(project_id)?;
        self.project_updates
            .push((project_id.to_string(), patch.clone()));
        Ok(())
    }

    fn delete_task(&mut self, task_id: &str) -> Result<(), StoreError> {
        self.check(task_id)?;
        self.deletes.push(task_id.to_string());
        Ok(())
    }
}

fn sample_tasks() -> Vec<Task> {
    vec![
        Task::new("t1", "Draft outline", TaskStatus::Todo),
        Task::new("t2", "Review notes", TaskStatus::Todo),
        Task::new("t3", "Ship release", TaskStatus::InProgress),
        Task::new("t4", "File expenses", TaskStatus::Done),
    ]
}

fn rect_at(y: f32) -> Rect {
    Rect::new(0.0, y, 20.0, 4.0)
}

/// Press t-id and activate the drag with one small move
fn start_task_drag(tasks: &[Task], item_id: &str, source: ZoneKey) -> DragController {
    let mut controller = DragController::new(
        CollisionStrategy::Board,
        ActivationConstraint::Distance { min: 1.0 },
    );
    controller
        .press(
            DragItem::task(item_id),
            source,
            snapshot_tasks(tasks, false),
            PointerSample::new(0.0, 0.0, 0),
        )
        .unwrap();
    controller.move_to(PointerSample::new(2.0, 0.0, 16), &rect_at(0.0), &[]);
    assert!(controller.is_dragging());
    controller
}

#[test]
fn focus_toggle_issues_one_call_each_way() {
    let mut tasks = sample_tasks();
    let projects: Vec<Project> = Vec::new();
    let mut store = RecordingStore::default();

    // Drag t1 onto the focus zone
    let mut controller = start_task_drag(&tasks, "t1", ZoneKey::Column(TaskStatus::Todo));
    let focus_container = vec![DropCandidate::container("focus-zone", rect_at(10.0))];
    controller.move_to(PointerSample::new(0.0, 10.0, 50), &rect_at(10.0), &focus_container);
    let ctx = CommitContext::new(&tasks, &projects);
    let outcome = controller
        .drop(&rect_at(10.0), &focus_container, &ctx, &mut store)
        .unwrap();
    assert_eq!(
        outcome,
        DropOutcome::Committed(Some(Mutation::Task {
            id: "t1".into(),
            patch: TaskPatch::focus(true),
        }))
    );
    assert_eq!(store.task_updates.len(), 1);

    // Data refresh reflects the commit; drag t1 back out onto its column
    tasks[0].is_focus = true;
    let mut controller = start_task_drag(&tasks, "t1", ZoneKey::Focus);
    let todo_column = vec![DropCandidate::container("column-todo", rect_at(20.0))];
    let ctx = CommitContext::new(&tasks, &projects);
    let outcome = controller
        .drop(&rect_at(20.0), &todo_column, &ctx, &mut store)
        .unwrap();
    assert_eq!(
        outcome,
        DropOutcome::Committed(Some(Mutation::Task {
            id: "t1".into(),
            patch: TaskPatch::focus(false),
        }))
    );
    assert_eq!(store.task_updates.len(), 2);
}

#[test]
fn status_change_commits_once_then_noops() {
    let mut tasks = sample_tasks();
    let projects: Vec<Project> = Vec::new();
    let mut store = RecordingStore::default();

    let mut controller = start_task_drag(&tasks, "t1", ZoneKey::Column(TaskStatus::Todo));
    let done_column = vec![DropCandidate::container("column-done", rect_at(10.0))];
    let ctx = CommitContext::new(&tasks, &projects);
    let outcome = controller
        .drop(&rect_at(10.0), &done_column, &ctx, &mut store)
        .unwrap();
    assert_eq!(
        outcome,
        DropOutcome::Committed(Some(Mutation::Task {
            id: "t1".into(),
            patch: TaskPatch::status(TaskStatus::Done),
        }))
    );
    assert_eq!(store.task_updates.len(), 1);

    // After refresh, dropping on column-done again changes nothing
    tasks[0].status = TaskStatus::Done;
    let mut controller = start_task_drag(&tasks, "t1", ZoneKey::Column(TaskStatus::Done));
    let ctx = CommitContext::new(&tasks, &projects);
    let outcome = controller
        .drop(&rect_at(10.0), &done_column, &ctx, &mut store)
        .unwrap();
    assert_eq!(outcome, DropOutcome::Committed(None));
    assert_eq!(store.task_updates.len(), 1);
}

#[test]
fn drop_back_into_source_zone_after_detours_is_noop() {
    let tasks = sample_tasks();
    let projects: Vec<Project> = Vec::new();
    let mut store = RecordingStore::default();

    let mut controller = start_task_drag(&tasks, "t1", ZoneKey::Column(TaskStatus::Todo));

    // Wander through other zones, reordering along the way
    let detours = vec![
        DropCandidate::container("column-done", rect_at(10.0)),
        DropCandidate::container("focus-zone", rect_at(30.0)),
    ];
    controller.move_to(PointerSample::new(0.0, 10.0, 40), &rect_at(10.0), &detours);
    controller.move_to(PointerSample::new(0.0, 30.0, 60), &rect_at(30.0), &detours);

    // ...and come home
    let home = vec![DropCandidate::item("t2", rect_at(0.0))];
    controller.move_to(PointerSample::new(0.0, 0.0, 80), &rect_at(0.0), &home);
    let session = controller.session().unwrap();
    assert_eq!(
        session.current_zone(),
        Some(&ZoneKey::Column(TaskStatus::Todo))
    );

    let ctx = CommitContext::new(&tasks, &projects);
    let outcome = controller.drop(&rect_at(0.0), &home, &ctx, &mut store).unwrap();
    assert_eq!(outcome, DropOutcome::Committed(None));
    assert_eq!(store.total_calls(), 0);
}

#[test]
fn active_item_stays_in_exactly_one_zone_throughout() {
    let tasks = sample_tasks();
    let mut controller = start_task_drag(&tasks, "t2", ZoneKey::Column(TaskStatus::Todo));

    let hops = [
        DropCandidate::container("focus-zone", rect_at(10.0)),
        DropCandidate::container("column-in_progress", rect_at(20.0)),
        DropCandidate::item("t4", rect_at(30.0)),
        DropCandidate::item("t1", rect_at(0.0)),
    ];
    for (step, candidate) in hops.iter().enumerate() {
        let rect = candidate.rect;
        controller.move_to(
            PointerSample::new(rect.x, rect.y, 100 + step as u64 * 16),
            &rect,
            std::slice::from_ref(candidate),
        );
        let snapshot = &controller.session().unwrap().snapshot;
        assert_eq!(snapshot.occurrence_count("t2"), 1, "after hop {step}");
    }
}

#[test]
fn cancel_restores_pristine_membership_and_commits_nothing() {
    let tasks = sample_tasks();
    let pre_session = snapshot_tasks(&tasks, false);
    let store = RecordingStore::default();

    let mut controller = start_task_drag(&tasks, "t1", ZoneKey::Column(TaskStatus::Todo));
    let elsewhere = vec![DropCandidate::container("column-done", rect_at(10.0))];
    controller.move_to(PointerSample::new(0.0, 10.0, 40), &rect_at(10.0), &elsewhere);
    controller.cancel();

    assert!(controller.is_idle());
    assert_eq!(store.total_calls(), 0);
    // The ephemeral snapshot is gone; rebuilding from the untouched source of
    // truth yields the exact pre-session membership
    assert_eq!(snapshot_tasks(&tasks, false), pre_session);
}

#[test]
fn project_group_inherits_favorite_from_target_task_owner() {
    let projects = vec![
        Project::new("p1", "Alpha"),
        Project::new("p2", "Beta").with_favorite(true),
    ];
    let tasks = vec![
        Task::new("t-a", "In alpha", TaskStatus::Todo).with_project("p1"),
        Task::new("t-b", "In beta", TaskStatus::Todo).with_project("p2"),
    ];
    let mut store = RecordingStore::default();

    let mut controller = DragController::new(
        CollisionStrategy::Board,
        ActivationConstraint::Distance { min: 1.0 },
    );
    let item = DragItem::parse("drag-project-p1");
    controller
        .press(
            item,
            ZoneKey::ProjectsCatchAll,
            snapshot_projects(&projects, &tasks),
            PointerSample::new(0.0, 0.0, 0),
        )
        .unwrap();
    controller.move_to(PointerSample::new(2.0, 0.0, 16), &rect_at(0.0), &[]);

    // Drop onto a task card belonging to favorited p2
    let over_task = vec![DropCandidate::item("t-b", rect_at(12.0))];
    let ctx = CommitContext::new(&tasks, &projects);
    let outcome = controller
        .drop(&rect_at(12.0), &over_task, &ctx, &mut store)
        .unwrap();
    assert_eq!(
        outcome,
        DropOutcome::Committed(Some(Mutation::Project {
            id: "p1".into(),
            patch: ProjectPatch::favorite(true),
        }))
    );
    assert_eq!(store.project_updates.len(), 1);
    assert_eq!(store.task_updates.len(), 0);
}

#[test]
fn commit_failure_is_not_retried_or_reverted() {
    let tasks = sample_tasks();
    let projects: Vec<Project> = Vec::new();
    let mut store = RecordingStore::rejecting(&["t1"]);

    let mut controller = start_task_drag(&tasks, "t1", ZoneKey::Column(TaskStatus::Todo));
    let done_column = vec![DropCandidate::container("column-done", rect_at(10.0))];
    let ctx = CommitContext::new(&tasks, &projects);
    let outcome = controller
        .drop(&rect_at(10.0), &done_column, &ctx, &mut store)
        .unwrap();

    // The mutation was decided and issued once; the rejection produced no
    // follow-up call of any kind
    assert!(matches!(outcome, DropOutcome::Committed(Some(_))));
    assert_eq!(store.total_calls(), 0);
    assert!(controller.is_idle());
}

#[test]
fn batch_delete_completes_around_a_failure() {
    let mut store = RecordingStore::rejecting(&["t2"]);
    let ids: Vec<String> = ["t1", "t2", "t3"].iter().map(|s| s.to_string()).collect();

    let report = batch::bulk_delete(&mut store, &ids);
    assert_eq!(store.deletes, vec!["t1".to_string(), "t3".to_string()]);
    assert_eq!(report.failed.len(), 1);
    assert!(!report.is_complete());
}

#[test]
fn board_tie_break_prefers_item_even_when_column_is_nearer() {
    let tasks = sample_tasks();
    let mut controller = start_task_drag(&tasks, "t1", ZoneKey::Column(TaskStatus::Todo));

    // The in-progress column container overlaps its own card t3; the card wins
    let overlapping = vec![
        DropCandidate::container("column-in_progress", rect_at(10.0)),
        DropCandidate::item("t3", rect_at(11.0)),
    ];
    controller.move_to(PointerSample::new(0.0, 10.0, 40), &rect_at(10.0), &overlapping);
    let session = controller.session().unwrap();
    assert_eq!(
        session.current_zone(),
        Some(&ZoneKey::Column(TaskStatus::InProgress))
    );
    assert_eq!(
        session.last_target.as_ref().map(|t| t.index),
        Some(0),
        "lands at the card's slot, not appended at column start"
    );
}
