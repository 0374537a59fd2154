pub mod commit;
pub mod layout;
pub mod resolver;
pub mod session;

pub use commit::{CommitContext, Mutation};
pub use layout::{ZoneSnapshot, snapshot_projects, snapshot_tasks};
pub use resolver::{CandidateKind, CollisionStrategy, DropCandidate, Rect, ResolvedTarget};
pub use session::{
    ActivationConstraint, DragController, DragError, DragSession, DropOutcome, PointerSample,
};
