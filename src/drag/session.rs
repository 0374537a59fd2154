//! Drag session controller: gesture lifecycle, activation thresholds, and
//! the single committed mutation at the end.
//!
//! The machine runs `Idle → Pending → Dragging → Idle`. `Pending` is the
//! armed press before the activation constraint fires; a press that never
//! activates is a click, not a drag. All mid-gesture state lives in the
//! session's membership snapshot — the backing store is touched exactly once,
//! at drop, and never read.

use crate::drag::commit::{self, CommitContext, Mutation};
use crate::drag::layout::ZoneSnapshot;
use crate::drag::resolver::{self, CollisionStrategy, DropCandidate, Rect, ResolvedTarget};
use crate::store::Store;
use crate::zone::{DragItem, ZoneKey};

/// Error type for controller misuse
#[derive(Debug, thiserror::Error)]
pub enum DragError {
    #[error("a drag session is already active")]
    SessionActive,
    #[error("no active drag session")]
    NoSession,
    #[error("active item {0} is not a member of its source zone")]
    ItemNotInSourceZone(String),
}

/// Gate between a press and an actual drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActivationConstraint {
    /// Pointer input: the pointer must travel at least `min` before the drag
    /// starts, so clicks stay clicks
    Distance { min: f32 },
    /// Touch input: press and hold for `delay_ms`, with movement under
    /// `tolerance` — moving further before the delay is a scroll and disarms
    /// the press
    Hold { delay_ms: u64, tolerance: f32 },
}

impl Default for ActivationConstraint {
    fn default() -> Self {
        ActivationConstraint::Distance { min: 3.0 }
    }
}

/// A pointer position with time elapsed since the press
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
    pub elapsed_ms: u64,
}

impl PointerSample {
    pub fn new(x: f32, y: f32, elapsed_ms: u64) -> Self {
        PointerSample { x, y, elapsed_ms }
    }

    fn distance_to(&self, other: &PointerSample) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Ephemeral state of one active drag, created on activation and destroyed
/// on drop or cancel
#[derive(Debug, Clone)]
pub struct DragSession {
    pub item: DragItem,
    pub source_zone: ZoneKey,
    pub snapshot: ZoneSnapshot,
    /// Last successfully resolved target, carried across resolution failures
    pub last_target: Option<ResolvedTarget>,
}

impl DragSession {
    /// The zone currently owning the active item in the snapshot
    pub fn current_zone(&self) -> Option<&ZoneKey> {
        self.snapshot.owner_of(&self.item.id)
    }
}

#[derive(Debug, Clone)]
enum Phase {
    Idle,
    Pending {
        item: DragItem,
        source_zone: ZoneKey,
        snapshot: ZoneSnapshot,
        press: PointerSample,
    },
    Dragging(DragSession),
}

/// What `drop` concluded
#[derive(Debug, Clone, PartialEq)]
pub enum DropOutcome {
    /// The press never activated — a click, nothing committed
    Click,
    /// The gesture completed; the mutation (if any) was issued once
    Committed(Option<Mutation>),
}

/// Owns the gesture lifecycle. One controller per drag context (list view or
/// board view), configured with the context's collision strategy and
/// activation constraint.
#[derive(Debug)]
pub struct DragController {
    strategy: CollisionStrategy,
    activation: ActivationConstraint,
    phase: Phase,
}

impl DragController {
    pub fn new(strategy: CollisionStrategy, activation: ActivationConstraint) -> Self {
        DragController {
            strategy,
            activation,
            phase: Phase::Idle,
        }
    }

    /// List-view controller: plain nearest-corner collision
    pub fn list_view() -> Self {
        DragController::new(CollisionStrategy::List, ActivationConstraint::default())
    }

    /// Board-view controller: item hits take priority over column hits
    pub fn board_view() -> Self {
        DragController::new(CollisionStrategy::Board, ActivationConstraint::default())
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.phase, Phase::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging(_))
    }

    /// The active session, while one exists
    pub fn session(&self) -> Option<&DragSession> {
        match &self.phase {
            Phase::Dragging(session) => Some(session),
            _ => None,
        }
    }

    /// Arm a press on an item. `snapshot` is the zone membership at press
    /// time, rebuilt from the source of truth; it is normalized here so the
    /// active item sits in exactly one zone list (its source zone).
    pub fn press(
        &mut self,
        item: DragItem,
        source_zone: ZoneKey,
        mut snapshot: ZoneSnapshot,
        press: PointerSample,
    ) -> Result<(), DragError> {
        if !matches!(self.phase, Phase::Idle) {
            return Err(DragError::SessionActive);
        }
        if !snapshot.normalize_active(&item.id, &source_zone) {
            return Err(DragError::ItemNotInSourceZone(item.id));
        }
        log::debug!("press armed on {} in {:?}", item.id, source_zone);
        self.phase = Phase::Pending {
            item,
            source_zone,
            snapshot,
            press,
        };
        Ok(())
    }

    /// Feed a pointer move. In `Pending`, checks the activation constraint;
    /// in `Dragging`, resolves the target and reflows the snapshot. A
    /// resolution failure performs no reflow and the drag continues.
    pub fn move_to(
        &mut self,
        sample: PointerSample,
        active_rect: &Rect,
        candidates: &[DropCandidate],
    ) {
        let pending_check = match &self.phase {
            Phase::Idle => return,
            Phase::Pending { press, .. } => {
                Some(activation_check(&self.activation, press, &sample))
            }
            Phase::Dragging(_) => None,
        };
        match pending_check {
            None => self.reflow_over(active_rect, candidates),
            Some(Activation::Armed) => {}
            Some(Activation::Disarmed) => {
                log::debug!("press disarmed: movement before hold delay");
                self.phase = Phase::Idle;
            }
            Some(Activation::Activated) => {
                if let Phase::Pending {
                    item,
                    source_zone,
                    snapshot,
                    ..
                } = take_phase(&mut self.phase)
                {
                    log::debug!("drag activated on {}", item.id);
                    self.phase = Phase::Dragging(DragSession {
                        item,
                        source_zone,
                        snapshot,
                        last_target: None,
                    });
                    self.reflow_over(active_rect, candidates);
                }
            }
        }
    }

    fn reflow_over(&mut self, active_rect: &Rect, candidates: &[DropCandidate]) {
        let Phase::Dragging(session) = &mut self.phase else {
            return;
        };
        let target = resolver::resolve(
            self.strategy,
            &session.item.id,
            active_rect,
            candidates,
            &session.snapshot,
        );
        if let Some(target) = target {
            session
                .snapshot
                .reflow(&session.item.id, &target.zone, target.index);
            session.last_target = Some(target);
        }
    }

    /// Complete the gesture: resolve the final zone one more time, hand the
    /// result to the commit engine, issue at most one store call, and return
    /// to idle. A drop while still `Pending` is a click.
    pub fn drop<S: Store>(
        &mut self,
        active_rect: &Rect,
        candidates: &[DropCandidate],
        ctx: &CommitContext,
        store: &mut S,
    ) -> Result<DropOutcome, DragError> {
        match take_phase(&mut self.phase) {
            Phase::Idle => Err(DragError::NoSession),
            Phase::Pending { item, .. } => {
                log::debug!("press released before activation on {}: click", item.id);
                Ok(DropOutcome::Click)
            }
            Phase::Dragging(mut session) => {
                let target = resolver::resolve(
                    self.strategy,
                    &session.item.id,
                    active_rect,
                    candidates,
                    &session.snapshot,
                );
                if let Some(target) = target {
                    session
                        .snapshot
                        .reflow(&session.item.id, &target.zone, target.index);
                }
                // Final zone is wherever the active item settled; the source
                // zone when nothing ever resolved
                let final_zone = session
                    .current_zone()
                    .cloned()
                    .unwrap_or_else(|| session.source_zone.clone());
                let mutation = commit::decide(&session.item, &session.source_zone, &final_zone, ctx);
                if let Some(mutation) = &mutation {
                    commit::apply(store, mutation);
                }
                log::debug!(
                    "drop of {} from {:?} into {:?}, mutation: {}",
                    session.item.id,
                    session.source_zone,
                    final_zone,
                    mutation.is_some()
                );
                Ok(DropOutcome::Committed(mutation))
            }
        }
    }

    /// Abandon the gesture: the snapshot is discarded whole, no commit is
    /// issued, and the pre-session membership is untouched.
    pub fn cancel(&mut self) {
        if let Phase::Dragging(session) = &self.phase {
            log::debug!("drag on {} cancelled", session.item.id);
        }
        self.phase = Phase::Idle;
    }
}

fn take_phase(phase: &mut Phase) -> Phase {
    std::mem::replace(phase, Phase::Idle)
}

enum Activation {
    Armed,
    Activated,
    Disarmed,
}

fn activation_check(
    constraint: &ActivationConstraint,
    press: &PointerSample,
    sample: &PointerSample,
) -> Activation {
    match constraint {
        ActivationConstraint::Distance { min } => {
            if press.distance_to(sample) >= *min {
                Activation::Activated
            } else {
                Activation::Armed
            }
        }
        ActivationConstraint::Hold {
            delay_ms,
            tolerance,
        } => {
            if sample.elapsed_ms >= *delay_ms {
                Activation::Activated
            } else if press.distance_to(sample) > *tolerance {
                Activation::Disarmed
            } else {
                Activation::Armed
            }
        }
    }
}
