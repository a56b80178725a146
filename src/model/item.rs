//! The work item entity and its comments.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::fields::ItemFields;
use super::kind::ItemKind;
use super::status::{Priority, Status};

/// A single comment on a work item. Append-only; insertion order is
/// chronological display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique comment identifier.
    pub id: String,
    /// Who wrote the comment.
    pub author: String,
    /// Comment body.
    pub text: String,
    /// When the comment was added.
    pub timestamp: DateTime<Utc>,
}

/// A work item: one node in the epic → story → task → subtask forest.
///
/// `id`, `kind`, `parent_id`, and `created_at` are fixed at creation and
/// never change; everything else is mutated through the store's validated
/// update path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkItem {
    /// Opaque unique identifier, assigned at creation.
    pub id: String,
    /// Hierarchy level; immutable after creation.
    pub kind: ItemKind,
    /// Parent item id; `None` only for epics.
    #[serde(default)]
    pub parent_id: Option<String>,
    /// Required non-empty title.
    pub title: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Assignee name; empty when unassigned.
    #[serde(default)]
    pub assignee: String,
    /// Workflow status.
    #[serde(default)]
    pub status: Status,
    /// Priority.
    #[serde(default)]
    pub priority: Priority,
    /// Estimated effort in hours; non-negative.
    #[serde(default)]
    pub estimated_time: f64,
    /// Completion percentage in `[0, 100]`.
    #[serde(default)]
    pub progress: u8,
    /// Planned start date.
    #[serde(default)]
    pub estimated_start_date: Option<NaiveDate>,
    /// Planned end date; not before the planned start when both are set.
    #[serde(default)]
    pub estimated_end_date: Option<NaiveDate>,
    /// Actual start date.
    #[serde(default)]
    pub actual_start_date: Option<NaiveDate>,
    /// Actual end date; not before the actual start when both are set.
    #[serde(default)]
    pub actual_end_date: Option<NaiveDate>,
    /// Attached filenames, append-only.
    #[serde(default)]
    pub attachments: Vec<String>,
    /// Comments, append-only, in chronological order.
    #[serde(default)]
    pub comments: Vec<Comment>,
    /// Creation timestamp; immutable.
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last successful mutation.
    pub updated_at: DateTime<Utc>,
}

impl WorkItem {
    /// Snapshot of the mutable field set, suitable for patching and
    /// re-validation.
    #[must_use]
    pub fn fields(&self) -> ItemFields {
        ItemFields {
            title: self.title.clone(),
            description: self.description.clone(),
            assignee: self.assignee.clone(),
            status: self.status,
            priority: self.priority,
            estimated_time: self.estimated_time,
            progress: self.progress,
            estimated_start_date: self.estimated_start_date,
            estimated_end_date: self.estimated_end_date,
            actual_start_date: self.actual_start_date,
            actual_end_date: self.actual_end_date,
        }
    }

    /// Overwrites the mutable field set. Identity, linkage, and creation
    /// timestamp are untouched.
    pub(crate) fn set_fields(&mut self, fields: ItemFields) {
        self.title = fields.title;
        self.description = fields.description;
        self.assignee = fields.assignee;
        self.status = fields.status;
        self.priority = fields.priority;
        self.estimated_time = fields.estimated_time;
        self.progress = fields.progress;
        self.estimated_start_date = fields.estimated_start_date;
        self.estimated_end_date = fields.estimated_end_date;
        self.actual_start_date = fields.actual_start_date;
        self.actual_end_date = fields.actual_end_date;
    }
}
