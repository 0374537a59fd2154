//! Target resolver: maps pointer/overlap geometry to a logical zone and an
//! insertion index within it.
//!
//! Two strategies share the same nearest-corner metric. The board strategy
//! adds a priority override: a sibling item hit always beats a container
//! hit, because a populated column and the cards inside it overlap — without
//! the override, drops near empty space in a populated column would resolve
//! to "append at column start" instead of the gap the pointer sits in. The
//! container is only used when the column has no item candidates at all.

use crate::drag::layout::ZoneSnapshot;
use crate::zone::ZoneKey;

/// Axis-aligned bounding box in host coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Rect { x, y, w, h }
    }

    fn corners(&self) -> [(f32, f32); 4] {
        [
            (self.x, self.y),
            (self.x + self.w, self.y),
            (self.x, self.y + self.h),
            (self.x + self.w, self.y + self.h),
        ]
    }

    /// Sum of distances between corresponding corners of the two rects.
    /// Smaller means closer; identical rects score zero.
    pub fn corner_distance(&self, other: &Rect) -> f32 {
        self.corners()
            .iter()
            .zip(other.corners())
            .map(|((ax, ay), (bx, by))| ((ax - bx).powi(2) + (ay - by).powi(2)).sqrt())
            .sum()
    }
}

/// Whether a candidate is a bare container or an item inside one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateKind {
    Container,
    Item,
}

/// A drop target offered by the host's hit-testing layer
#[derive(Debug, Clone, PartialEq)]
pub struct DropCandidate {
    /// Raw identifier: a zone id or a plain item id
    pub raw_id: String,
    pub rect: Rect,
    pub kind: CandidateKind,
}

impl DropCandidate {
    pub fn container(raw_id: impl Into<String>, rect: Rect) -> Self {
        DropCandidate {
            raw_id: raw_id.into(),
            rect,
            kind: CandidateKind::Container,
        }
    }

    pub fn item(raw_id: impl Into<String>, rect: Rect) -> Self {
        DropCandidate {
            raw_id: raw_id.into(),
            rect,
            kind: CandidateKind::Item,
        }
    }
}

/// Collision strategy, chosen per drag context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionStrategy {
    /// Plain nearest-corner over every candidate
    List,
    /// Nearest-corner with the item-over-container override
    Board,
}

/// A resolved drop target: the logical zone plus the insertion index within
/// its member list (the active item not counted)
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTarget {
    pub zone: ZoneKey,
    pub index: usize,
}

/// Resolve the current drop target from overlap geometry.
///
/// Returns `None` when no candidate maps to a zone in the snapshot —
/// a resolution failure, which the session treats as "no target."
pub fn resolve(
    strategy: CollisionStrategy,
    active_id: &str,
    active_rect: &Rect,
    candidates: &[DropCandidate],
    snapshot: &ZoneSnapshot,
) -> Option<ResolvedTarget> {
    match strategy {
        CollisionStrategy::List => {
            nearest_resolvable(active_id, active_rect, candidates.iter(), snapshot)
        }
        CollisionStrategy::Board => {
            let items = candidates.iter().filter(|c| c.kind == CandidateKind::Item);
            nearest_resolvable(active_id, active_rect, items, snapshot).or_else(|| {
                let containers = candidates
                    .iter()
                    .filter(|c| c.kind == CandidateKind::Container);
                nearest_resolvable(active_id, active_rect, containers, snapshot)
            })
        }
    }
}

/// Nearest-corner scan in candidate order: smallest total distance wins, the
/// first candidate wins exact ties. Candidates that do not map to a
/// snapshotted zone are skipped.
fn nearest_resolvable<'a>(
    active_id: &str,
    active_rect: &Rect,
    candidates: impl Iterator<Item = &'a DropCandidate>,
    snapshot: &ZoneSnapshot,
) -> Option<ResolvedTarget> {
    let mut scored: Vec<(f32, &DropCandidate)> = candidates
        .filter(|c| c.raw_id != active_id)
        .map(|c| (active_rect.corner_distance(&c.rect), c))
        .collect();
    scored.sort_by(|(a, _), (b, _)| a.total_cmp(b));
    scored
        .into_iter()
        .find_map(|(_, candidate)| resolve_candidate(active_id, candidate, snapshot))
}

/// Map one candidate to `(zone, index)`: a zone-shaped id appends at the end
/// of that zone; a plain item id lands at the item's own position within its
/// owning zone.
fn resolve_candidate(
    active_id: &str,
    candidate: &DropCandidate,
    snapshot: &ZoneSnapshot,
) -> Option<ResolvedTarget> {
    if let Some(zone) = ZoneKey::decode(&candidate.raw_id) {
        if !snapshot.contains_zone(&zone) {
            return None;
        }
        let index = count_without_active(snapshot.members(&zone), active_id, None);
        return Some(ResolvedTarget { zone, index });
    }
    let zone = snapshot.owner_of(&candidate.raw_id)?.clone();
    let members = snapshot.members(&zone);
    let index = count_without_active(members, active_id, Some(&candidate.raw_id));
    Some(ResolvedTarget { zone, index })
}

/// Position of `until` within `members` skipping the active item, or the
/// full non-active length when `until` is `None`.
fn count_without_active(members: &[String], active_id: &str, until: Option<&str>) -> usize {
    let mut index = 0;
    for member in members {
        if Some(member.as_str()) == until {
            return index;
        }
        if member != active_id {
            index += 1;
        }
    }
    index
}
