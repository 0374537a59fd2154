//! Drag-to-reclassify engine for tasks and projects.
//!
//! Work items move between visual containers — status columns, a focus zone,
//! a favorites zone, project groups — with live reflow feedback during the
//! gesture and a single committed mutation at the end. The crate owns the
//! gesture lifecycle, collision/target resolution, the optimistic per-zone
//! membership snapshot, and commit semantics; rendering, hit-testing, and
//! entity persistence belong to the host.
//!
//! A gesture runs through [`drag::DragController`]: `press` arms an item
//! with a membership snapshot built by [`drag::snapshot_tasks`] or
//! [`drag::snapshot_projects`], `move_to` resolves a target and reflows,
//! `drop` issues at most one mutation through the [`store::Store`] seam,
//! and `cancel` discards everything.

pub mod drag;
pub mod model;
pub mod ops;
pub mod store;
pub mod zone;

pub use drag::{
    ActivationConstraint, CollisionStrategy, CommitContext, DragController, DragError,
    DragSession, DropCandidate, DropOutcome, Mutation, PointerSample, Rect, ResolvedTarget,
    ZoneSnapshot,
};
pub use model::{Priority, Project, Task, TaskStatus};
pub use store::{ProjectPatch, Store, StoreError, TaskPatch};
pub use zone::{DragItem, DragItemKind, GroupId, ZoneKey};
