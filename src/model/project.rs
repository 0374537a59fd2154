use serde::{Deserialize, Serialize};

/// A project that groups tasks. Owned by the backing store; the drag engine
/// only ever proposes changes to `is_favorite`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique project ID
    pub id: String,
    /// Display name
    pub name: String,
    /// Favorite flag, surfaced via the favorites zone
    pub is_favorite: bool,
    /// Display sort position; never read by the drag engine
    pub position: i64,
}

impl Project {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Project {
            id: id.into(),
            name: name.into(),
            is_favorite: false,
            position: 0,
        }
    }

    pub fn with_favorite(mut self, is_favorite: bool) -> Self {
        self.is_favorite = is_favorite;
        self
    }

    pub fn with_position(mut self, position: i64) -> Self {
        self.position = position;
        self
    }
}
