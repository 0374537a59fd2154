//! Zone registry: the fixed vocabulary of drop-container identifiers and its
//! decoding into typed zone keys.
//!
//! Hosts surface opaque container ids from their hit-testing layer. The
//! registry decodes those ids once, at the edge; every downstream component
//! works with [`ZoneKey`] values, never raw strings. An id that matches no
//! zone shape is a plain item id — the caller resolves it to the owning zone
//! by lookup in the session snapshot, so a drop onto an empty container and a
//! drop onto a sibling card inside it land in the same logical zone.

use serde::{Deserialize, Serialize};

use crate::model::TaskStatus;

const FOCUS_ZONE_ID: &str = "focus-zone";
const FAVORITES_ZONE_ID: &str = "favorites-zone";
const PROJECTS_ZONE_ID: &str = "projects-zone";
const COLUMN_PREFIX: &str = "column-";
const GROUP_PREFIX: &str = "group-";
const PROJECT_HANDLE_PREFIX: &str = "drag-project-";
const UNGROUPED_SENTINEL: &str = "none";

/// Which project group a `group-<projectId>` container stands for
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupId {
    /// A real project
    Project(String),
    /// The sentinel "no project" group
    Ungrouped,
}

impl GroupId {
    pub fn from_segment(s: &str) -> GroupId {
        if s == UNGROUPED_SENTINEL {
            GroupId::Ungrouped
        } else {
            GroupId::Project(s.to_string())
        }
    }

    pub fn segment(&self) -> &str {
        match self {
            GroupId::Project(id) => id,
            GroupId::Ungrouped => UNGROUPED_SENTINEL,
        }
    }

    /// The project ID, if this group stands for a real project
    pub fn project_id(&self) -> Option<&str> {
        match self {
            GroupId::Project(id) => Some(id),
            GroupId::Ungrouped => None,
        }
    }
}

/// A logical drop target. Pure configuration — zones have no identity beyond
/// their key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneKey {
    /// Status column for a workflow status
    Column(TaskStatus),
    /// The focus zone
    Focus,
    /// The favorites zone
    Favorites,
    /// Generic project-group container; only used to detect that a
    /// project group left the favorites zone
    ProjectsCatchAll,
    /// A project group (including the sentinel "no project" group)
    Group(GroupId),
}

impl ZoneKey {
    /// Decode a raw container id into a zone key.
    ///
    /// Returns `None` for ids outside the fixed vocabulary — those are plain
    /// item ids and must be resolved to their owning zone via the snapshot.
    pub fn decode(raw: &str) -> Option<ZoneKey> {
        match raw {
            FOCUS_ZONE_ID => return Some(ZoneKey::Focus),
            FAVORITES_ZONE_ID => return Some(ZoneKey::Favorites),
            PROJECTS_ZONE_ID => return Some(ZoneKey::ProjectsCatchAll),
            _ => {}
        }
        if let Some(segment) = raw.strip_prefix(COLUMN_PREFIX) {
            return TaskStatus::from_column_segment(segment).map(ZoneKey::Column);
        }
        if let Some(segment) = raw.strip_prefix(GROUP_PREFIX) {
            return Some(ZoneKey::Group(GroupId::from_segment(segment)));
        }
        None
    }

    /// The container id this zone key encodes to. Round-trips with
    /// [`ZoneKey::decode`].
    pub fn id(&self) -> String {
        match self {
            ZoneKey::Column(status) => format!("{}{}", COLUMN_PREFIX, status.column_segment()),
            ZoneKey::Focus => FOCUS_ZONE_ID.to_string(),
            ZoneKey::Favorites => FAVORITES_ZONE_ID.to_string(),
            ZoneKey::ProjectsCatchAll => PROJECTS_ZONE_ID.to_string(),
            ZoneKey::Group(group) => format!("{}{}", GROUP_PREFIX, group.segment()),
        }
    }
}

/// What kind of thing a drag handle picked up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragItemKind {
    Task,
    ProjectGroup,
}

/// The active item of a drag, classified from its drag-handle id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragItem {
    pub id: String,
    pub kind: DragItemKind,
}

impl DragItem {
    /// Classify a drag-handle id. `drag-project-<id>` handles pick up an
    /// entire project group; anything else is a plain task id.
    pub fn parse(raw: &str) -> DragItem {
        match raw.strip_prefix(PROJECT_HANDLE_PREFIX) {
            Some(project_id) => DragItem {
                id: project_id.to_string(),
                kind: DragItemKind::ProjectGroup,
            },
            None => DragItem {
                id: raw.to_string(),
                kind: DragItemKind::Task,
            },
        }
    }

    pub fn task(id: impl Into<String>) -> DragItem {
        DragItem {
            id: id.into(),
            kind: DragItemKind::Task,
        }
    }

    pub fn project_group(id: impl Into<String>) -> DragItem {
        DragItem {
            id: id.into(),
            kind: DragItemKind::ProjectGroup,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_fixed_literals() {
        assert_eq!(ZoneKey::decode("focus-zone"), Some(ZoneKey::Focus));
        assert_eq!(ZoneKey::decode("favorites-zone"), Some(ZoneKey::Favorites));
        assert_eq!(
            ZoneKey::decode("projects-zone"),
            Some(ZoneKey::ProjectsCatchAll)
        );
    }

    #[test]
    fn test_decode_columns() {
        assert_eq!(
            ZoneKey::decode("column-todo"),
            Some(ZoneKey::Column(TaskStatus::Todo))
        );
        assert_eq!(
            ZoneKey::decode("column-in_progress"),
            Some(ZoneKey::Column(TaskStatus::InProgress))
        );
        assert_eq!(
            ZoneKey::decode("column-done"),
            Some(ZoneKey::Column(TaskStatus::Done))
        );
        // Unknown status segment is not a zone
        assert_eq!(ZoneKey::decode("column-blocked"), None);
    }

    #[test]
    fn test_decode_groups() {
        assert_eq!(
            ZoneKey::decode("group-p1"),
            Some(ZoneKey::Group(GroupId::Project("p1".into())))
        );
        assert_eq!(
            ZoneKey::decode("group-none"),
            Some(ZoneKey::Group(GroupId::Ungrouped))
        );
    }

    #[test]
    fn test_decode_plain_item_id() {
        assert_eq!(ZoneKey::decode("task-42"), None);
        assert_eq!(ZoneKey::decode("t1"), None);
    }

    #[test]
    fn test_id_round_trip() {
        let keys = [
            ZoneKey::Column(TaskStatus::InProgress),
            ZoneKey::Focus,
            ZoneKey::Favorites,
            ZoneKey::ProjectsCatchAll,
            ZoneKey::Group(GroupId::Project("p7".into())),
            ZoneKey::Group(GroupId::Ungrouped),
        ];
        for key in keys {
            assert_eq!(ZoneKey::decode(&key.id()), Some(key));
        }
    }

    #[test]
    fn test_parse_drag_handle() {
        assert_eq!(
            DragItem::parse("drag-project-p1"),
            DragItem::project_group("p1")
        );
        assert_eq!(DragItem::parse("t1"), DragItem::task("t1"));
        // A task id that merely contains "project" is still a task
        assert_eq!(
            DragItem::parse("project-notes"),
            DragItem::task("project-notes")
        );
    }
}
