//! Mutable field set and the patch overlay applied to it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::status::{Priority, Status};

/// The mutable attributes of a work item, as a concrete value.
///
/// Create starts from `ItemFields::default()`; update starts from the
/// existing item's snapshot. Either way the validator sees a complete
/// field set, never a partial one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemFields {
    /// Title; required non-empty after trimming.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Assignee name; empty when unassigned.
    pub assignee: String,
    /// Workflow status.
    pub status: Status,
    /// Priority.
    pub priority: Priority,
    /// Estimated effort in hours.
    pub estimated_time: f64,
    /// Completion percentage.
    pub progress: u8,
    /// Planned start date.
    pub estimated_start_date: Option<NaiveDate>,
    /// Planned end date.
    pub estimated_end_date: Option<NaiveDate>,
    /// Actual start date.
    pub actual_start_date: Option<NaiveDate>,
    /// Actual end date.
    pub actual_end_date: Option<NaiveDate>,
}

/// A partial overlay of [`ItemFields`]: `None` leaves the base value alone.
///
/// Identity fields (`id`, `kind`, `parent_id`, `created_at`) are deliberately
/// absent, so no patch can re-link or re-type an item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    /// New title, if changing.
    pub title: Option<String>,
    /// New description, if changing.
    pub description: Option<String>,
    /// New assignee, if changing.
    pub assignee: Option<String>,
    /// New status, if changing.
    pub status: Option<Status>,
    /// New priority, if changing.
    pub priority: Option<Priority>,
    /// New estimate in hours, if changing.
    pub estimated_time: Option<f64>,
    /// New progress percentage, if changing.
    pub progress: Option<u8>,
    /// New planned start date, if changing.
    pub estimated_start_date: Option<NaiveDate>,
    /// New planned end date, if changing.
    pub estimated_end_date: Option<NaiveDate>,
    /// New actual start date, if changing.
    pub actual_start_date: Option<NaiveDate>,
    /// New actual end date, if changing.
    pub actual_end_date: Option<NaiveDate>,
}

impl ItemPatch {
    /// Returns `base` with every `Some` field of the patch applied over it.
    #[must_use]
    pub fn apply(&self, base: &ItemFields) -> ItemFields {
        ItemFields {
            title: self.title.clone().unwrap_or_else(|| base.title.clone()),
            description: self.description.clone().unwrap_or_else(|| base.description.clone()),
            assignee: self.assignee.clone().unwrap_or_else(|| base.assignee.clone()),
            status: self.status.unwrap_or(base.status),
            priority: self.priority.unwrap_or(base.priority),
            estimated_time: self.estimated_time.unwrap_or(base.estimated_time),
            progress: self.progress.unwrap_or(base.progress),
            estimated_start_date: self.estimated_start_date.or(base.estimated_start_date),
            estimated_end_date: self.estimated_end_date.or(base.estimated_end_date),
            actual_start_date: self.actual_start_date.or(base.actual_start_date),
            actual_end_date: self.actual_end_date.or(base.actual_end_date),
        }
    }

    /// Returns `true` if the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == ItemPatch::default()
    }
}
