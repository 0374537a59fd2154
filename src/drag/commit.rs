//! Classification commit engine: translate a completed gesture into zero or
//! one mutation per affected entity, issued exactly once.
//!
//! The decision is a pure function of the entity's pre-gesture attributes and
//! the (source, final) zone pair; the store call is fire-and-forget. On
//! store failure the optimistic UI state stands and reconciliation happens on
//! the next data refresh — the engine never reverts.

use crate::model::{Project, Task};
use crate::store::{ProjectPatch, Store, TaskPatch};
use crate::zone::{DragItem, DragItemKind, GroupId, ZoneKey};

/// The single attribute mutation a completed gesture maps to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Task { id: String, patch: TaskPatch },
    Project { id: String, patch: ProjectPatch },
}

impl Mutation {
    pub fn entity_id(&self) -> &str {
        match self {
            Mutation::Task { id, .. } => id,
            Mutation::Project { id, .. } => id,
        }
    }
}

/// Read-only view of the entities, consulted only at commit time. The engine
/// never reads the backing store mid-gesture.
#[derive(Debug, Clone, Copy)]
pub struct CommitContext<'a> {
    pub tasks: &'a [Task],
    pub projects: &'a [Project],
}

impl<'a> CommitContext<'a> {
    pub fn new(tasks: &'a [Task], projects: &'a [Project]) -> Self {
        CommitContext { tasks, projects }
    }

    fn task(&self, id: &str) -> Option<&'a Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn project(&self, id: &str) -> Option<&'a Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}

/// Decide the mutation for a completed gesture. `None` means the gesture was
/// a no-op: same zone, attribute already in the target state, or a zone pair
/// the decision tables do not map to any attribute.
pub fn decide(
    item: &DragItem,
    source_zone: &ZoneKey,
    final_zone: &ZoneKey,
    ctx: &CommitContext,
) -> Option<Mutation> {
    if final_zone == source_zone {
        return None;
    }
    match item.kind {
        DragItemKind::Task => {
            let task = ctx.task(&item.id)?;
            decide_task(task, source_zone, final_zone).map(|patch| Mutation::Task {
                id: item.id.clone(),
                patch,
            })
        }
        DragItemKind::ProjectGroup => {
            let project = ctx.project(&item.id)?;
            decide_project(project, final_zone, ctx).map(|patch| Mutation::Project {
                id: item.id.clone(),
                patch,
            })
        }
    }
}

/// Task decision table. A drop on the focus zone sets the focus flag; a drop
/// out of the focus zone clears it; a drop on a status column sets the
/// status. Both may apply at once (focus zone → column) and still form one
/// patch. Group drops change nothing by themselves — task project membership
/// comes from the originating view's grouping, not from this engine.
fn decide_task(task: &Task, source_zone: &ZoneKey, final_zone: &ZoneKey) -> Option<TaskPatch> {
    let mut patch = TaskPatch::default();
    if *final_zone == ZoneKey::Focus {
        if !task.is_focus {
            patch.is_focus = Some(true);
        }
    } else if *source_zone == ZoneKey::Focus && task.is_focus {
        patch.is_focus = Some(false);
    }
    if let ZoneKey::Column(status) = final_zone
        && task.status != *status
    {
        patch.status = Some(*status);
    }
    if patch.is_empty() { None } else { Some(patch) }
}

/// Project-group decision table. The final zone alone determines the target
/// favorite-ness: the favorites zone favorites, the catch-all (and the
/// ungrouped group) unfavorites, and a drop onto another project's group —
/// or onto one of its tasks, which the resolver maps to that group —
/// inherits that project's flag.
fn decide_project(
    project: &Project,
    final_zone: &ZoneKey,
    ctx: &CommitContext,
) -> Option<ProjectPatch> {
    let target_favorite = match final_zone {
        ZoneKey::Favorites => true,
        ZoneKey::ProjectsCatchAll => false,
        ZoneKey::Group(GroupId::Project(pid)) => ctx.project(pid)?.is_favorite,
        ZoneKey::Group(GroupId::Ungrouped) => false,
        // Status columns and the focus zone are not project targets
        ZoneKey::Column(_) | ZoneKey::Focus => return None,
    };
    if project.is_favorite != target_favorite {
        Some(ProjectPatch::favorite(target_favorite))
    } else {
        None
    }
}

/// Issue the mutation against the backing store, exactly once, without
/// awaiting recovery: a failure is logged and the optimistic state stands
/// until the caller's next data refresh.
pub fn apply<S: Store>(store: &mut S, mutation: &Mutation) {
    let result = match mutation {
        Mutation::Task { id, patch } => store.update_task(id, patch),
        Mutation::Project { id, patch } => store.update_project(id, patch),
    };
    match result {
        Ok(()) => log::debug!("committed mutation for {}", mutation.entity_id()),
        Err(err) => log::warn!(
            "commit for {} failed, keeping optimistic state: {}",
            mutation.entity_id(),
            err
        ),
    }
}
