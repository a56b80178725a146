//! CLI argument definitions.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::model::{ItemKind, ItemPatch, Priority, Status};

/// Top-level CLI parser for `strata`.
#[derive(Debug, Parser)]
#[command(name = "strata", version, about = "Track epics, stories, tasks, and subtasks")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a new work item.
    Add {
        /// Kind of item to create: epic, story, task, or subtask.
        kind: ItemKind,
        /// Parent item id; required for every kind except epic.
        #[arg(long)]
        parent: Option<String>,
        /// Field values for the new item.
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Edit an existing work item's fields.
    Edit {
        /// Id of the item to edit.
        id: String,
        /// Field values to change; omitted fields keep their value.
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Delete a work item and its whole subtree.
    Rm {
        /// Id of the item to delete.
        id: String,
    },
    /// Show one item in full detail.
    Show {
        /// Id of the item to show.
        id: String,
        /// Emit the item as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// List all items as a table.
    Status,
    /// Render the item forest as an indented tree.
    Tree,
    /// Append a comment to an item.
    Comment {
        /// Id of the item to comment on.
        id: String,
        /// Comment author.
        #[arg(long)]
        author: String,
        /// Comment text.
        #[arg(long)]
        text: String,
    },
    /// Append an attachment filename to an item.
    Attach {
        /// Id of the item to attach to.
        id: String,
        /// Filename to record.
        file: String,
    },
}

/// Work-item field flags shared by `add` and `edit`.
///
/// Every flag is optional; `add` fills the gaps with defaults, `edit`
/// keeps the existing values.
#[derive(Debug, Default, Args)]
pub struct FieldArgs {
    /// Item title.
    #[arg(long)]
    pub title: Option<String>,
    /// Free-text description.
    #[arg(long)]
    pub description: Option<String>,
    /// Assignee name.
    #[arg(long)]
    pub assignee: Option<String>,
    /// Workflow status: new, in-progress, reviewing, done, or closed.
    #[arg(long)]
    pub status: Option<Status>,
    /// Priority: low, normal, medium, or high.
    #[arg(long)]
    pub priority: Option<Priority>,
    /// Estimated effort in hours.
    #[arg(long)]
    pub estimate: Option<f64>,
    /// Completion percentage (0-100).
    #[arg(long)]
    pub progress: Option<u8>,
    /// Planned start date (YYYY-MM-DD).
    #[arg(long = "est-start")]
    pub estimated_start: Option<NaiveDate>,
    /// Planned end date (YYYY-MM-DD).
    #[arg(long = "est-end")]
    pub estimated_end: Option<NaiveDate>,
    /// Actual start date (YYYY-MM-DD).
    #[arg(long = "start")]
    pub actual_start: Option<NaiveDate>,
    /// Actual end date (YYYY-MM-DD).
    #[arg(long = "end")]
    pub actual_end: Option<NaiveDate>,
}

impl FieldArgs {
    /// Converts the parsed flags into a store patch.
    #[must_use]
    pub fn patch(&self) -> ItemPatch {
        ItemPatch {
            title: self.title.clone(),
            description: self.description.clone(),
            assignee: self.assignee.clone(),
            status: self.status,
            priority: self.priority,
            estimated_time: self.estimate,
            progress: self.progress,
            estimated_start_date: self.estimated_start,
            estimated_end_date: self.estimated_end,
            actual_start_date: self.actual_start,
            actual_end_date: self.actual_end,
        }
    }
}
