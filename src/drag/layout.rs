//! Optimistic layout engine: the ephemeral per-zone membership snapshot that
//! reflows during a gesture without touching the backing store.

use indexmap::IndexMap;

use crate::model::{Project, Task, TaskStatus};
use crate::zone::{GroupId, ZoneKey};

/// Ordered member lists per zone, snapshotted once at drag start and mutated
/// by [`ZoneSnapshot::reflow`] on every move event. Holds no state between
/// sessions — rebuild from the source of truth on each drag start.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneSnapshot {
    zones: IndexMap<ZoneKey, Vec<String>>,
}

impl ZoneSnapshot {
    pub fn new() -> Self {
        ZoneSnapshot::default()
    }

    /// Add a zone with its ordered members. Replaces an existing list.
    pub fn insert_zone(&mut self, key: ZoneKey, members: Vec<String>) {
        self.zones.insert(key, members);
    }

    pub fn zone_keys(&self) -> impl Iterator<Item = &ZoneKey> {
        self.zones.keys()
    }

    /// Members of a zone, empty if the zone is not snapshotted
    pub fn members(&self, key: &ZoneKey) -> &[String] {
        self.zones.get(key).map_or(&[], |m| m.as_slice())
    }

    pub fn contains_zone(&self, key: &ZoneKey) -> bool {
        self.zones.contains_key(key)
    }

    /// The zone currently owning an item, if any
    pub fn owner_of(&self, item_id: &str) -> Option<&ZoneKey> {
        self.zones
            .iter()
            .find(|(_, members)| members.iter().any(|m| m == item_id))
            .map(|(key, _)| key)
    }

    /// How many zone lists contain the item. Exactly one for the active item
    /// of a normalized session snapshot.
    pub fn occurrence_count(&self, item_id: &str) -> usize {
        self.zones
            .values()
            .filter(|members| members.iter().any(|m| m == item_id))
            .count()
    }

    /// Keep the active item only in its source zone, dropping the overlay
    /// memberships (a focused task is listed in both its status column and
    /// the focus zone by the builders). Returns false when the item is not a
    /// member of the source zone at all.
    pub fn normalize_active(&mut self, active_id: &str, source: &ZoneKey) -> bool {
        if !self.members(source).iter().any(|m| m == active_id) {
            return false;
        }
        for (key, members) in self.zones.iter_mut() {
            if key != source {
                members.retain(|m| m != active_id);
            }
        }
        true
    }

    /// Move the active item to `target_index` within `target_zone`, removing
    /// it from whichever zone currently holds it. A same-zone call is a
    /// reorder. Removal and insertion happen within this single call, so the
    /// active item is never in zero or two lists. A target zone outside the
    /// snapshot leaves the snapshot unchanged.
    pub fn reflow(&mut self, active_id: &str, target_zone: &ZoneKey, target_index: usize) {
        if !self.zones.contains_key(target_zone) {
            return;
        }
        for members in self.zones.values_mut() {
            if let Some(pos) = members.iter().position(|m| m == active_id) {
                members.remove(pos);
                break;
            }
        }
        if let Some(members) = self.zones.get_mut(target_zone) {
            let index = target_index.min(members.len());
            members.insert(index, active_id.to_string());
        }
    }
}

/// Snapshot zone membership for a task drag: the three status columns, the
/// focus zone, and (in grouped view) one group zone per project plus the
/// ungrouped sentinel group.
pub fn snapshot_tasks(tasks: &[Task], grouped: bool) -> ZoneSnapshot {
    let mut snapshot = ZoneSnapshot::new();
    for status in [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done] {
        let members = tasks
            .iter()
            .filter(|t| t.status == status)
            .map(|t| t.id.clone())
            .collect();
        snapshot.insert_zone(ZoneKey::Column(status), members);
    }
    let focused = tasks
        .iter()
        .filter(|t| t.is_focus)
        .map(|t| t.id.clone())
        .collect();
    snapshot.insert_zone(ZoneKey::Focus, focused);

    if grouped {
        for task in tasks {
            let group = match &task.project_id {
                Some(pid) => GroupId::Project(pid.clone()),
                None => GroupId::Ungrouped,
            };
            let key = ZoneKey::Group(group);
            if !snapshot.contains_zone(&key) {
                let members = tasks
                    .iter()
                    .filter(|t| t.project_id == task.project_id)
                    .map(|t| t.id.clone())
                    .collect();
                snapshot.insert_zone(key, members);
            }
        }
    }
    snapshot
}

/// Snapshot zone membership for a project-group drag: the favorites zone and
/// the catch-all container hold project ids, and each project's group zone
/// holds its task ids so a drop onto a task card resolves to the owning
/// project's zone.
pub fn snapshot_projects(projects: &[Project], tasks: &[Task]) -> ZoneSnapshot {
    let mut snapshot = ZoneSnapshot::new();
    let favorites = projects
        .iter()
        .filter(|p| p.is_favorite)
        .map(|p| p.id.clone())
        .collect();
    snapshot.insert_zone(ZoneKey::Favorites, favorites);
    let rest = projects
        .iter()
        .filter(|p| !p.is_favorite)
        .map(|p| p.id.clone())
        .collect();
    snapshot.insert_zone(ZoneKey::ProjectsCatchAll, rest);

    for project in projects {
        let members = tasks
            .iter()
            .filter(|t| t.project_id.as_deref() == Some(project.id.as_str()))
            .map(|t| t.id.clone())
            .collect();
        snapshot.insert_zone(ZoneKey::Group(GroupId::Project(project.id.clone())), members);
    }
    let ungrouped = tasks
        .iter()
        .filter(|t| t.project_id.is_none())
        .map(|t| t.id.clone())
        .collect();
    snapshot.insert_zone(ZoneKey::Group(GroupId::Ungrouped), ungrouped);
    snapshot
}
