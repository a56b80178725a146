//! The closed four-level item hierarchy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The kind of a work item, fixed at creation.
///
/// Kinds form a strict hierarchy (epic → story → task → subtask) encoded
/// by [`ItemKind::child`] and [`ItemKind::parent`]. Adding a tree level
/// means extending those two successor functions, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Root of a tree; the only kind without a parent.
    Epic,
    /// Child of an epic.
    Story,
    /// Child of a story.
    Task,
    /// Child of a task; leaf of the hierarchy.
    Subtask,
}

impl ItemKind {
    /// All kinds, shallowest first.
    pub const ALL: [ItemKind; 4] =
        [ItemKind::Epic, ItemKind::Story, ItemKind::Task, ItemKind::Subtask];

    /// The kind one level deeper, or `None` for the leaf kind.
    #[must_use]
    pub fn child(self) -> Option<ItemKind> {
        match self {
            ItemKind::Epic => Some(ItemKind::Story),
            ItemKind::Story => Some(ItemKind::Task),
            ItemKind::Task => Some(ItemKind::Subtask),
            ItemKind::Subtask => None,
        }
    }

    /// The kind one level shallower, or `None` for the root kind.
    #[must_use]
    pub fn parent(self) -> Option<ItemKind> {
        match self {
            ItemKind::Epic => None,
            ItemKind::Story => Some(ItemKind::Epic),
            ItemKind::Task => Some(ItemKind::Story),
            ItemKind::Subtask => Some(ItemKind::Task),
        }
    }

    /// Lowercase name, matching the serialized form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Epic => "epic",
            ItemKind::Story => "story",
            ItemKind::Task => "task",
            ItemKind::Subtask => "subtask",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "epic" => Ok(ItemKind::Epic),
            "story" => Ok(ItemKind::Story),
            "task" => Ok(ItemKind::Task),
            "subtask" => Ok(ItemKind::Subtask),
            other => Err(format!("unknown item kind '{other}' (expected epic, story, task, or subtask)")),
        }
    }
}
