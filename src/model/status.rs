//! Workflow status and priority enumerations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Workflow status of a work item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Not yet started.
    #[default]
    #[serde(rename = "new")]
    New,
    /// Actively being worked on.
    #[serde(rename = "in progress")]
    InProgress,
    /// Awaiting review.
    #[serde(rename = "reviewing")]
    Reviewing,
    /// Work complete.
    #[serde(rename = "done")]
    Done,
    /// Closed without further action.
    #[serde(rename = "closed")]
    Closed,
}

impl Status {
    /// Display name, matching the serialized form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Status::New => "new",
            Status::InProgress => "in progress",
            Status::Reviewing => "reviewing",
            Status::Done => "done",
            Status::Closed => "closed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept "in progress", "in-progress", and "in_progress" alike so the
        // CLI does not force shell quoting.
        match s.trim().to_ascii_lowercase().replace(['-', '_'], " ").as_str() {
            "new" => Ok(Status::New),
            "in progress" => Ok(Status::InProgress),
            "reviewing" => Ok(Status::Reviewing),
            "done" => Ok(Status::Done),
            "closed" => Ok(Status::Closed),
            other => Err(format!(
                "unknown status '{other}' (expected new, in-progress, reviewing, done, or closed)"
            )),
        }
    }
}

/// Priority of a work item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Lowest urgency.
    Low,
    /// Default urgency.
    #[default]
    Normal,
    /// Elevated urgency.
    Medium,
    /// Highest urgency.
    High,
}

impl Priority {
    /// Display name, matching the serialized form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Normal => "normal",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "normal" => Ok(Priority::Normal),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(format!(
                "unknown priority '{other}' (expected low, normal, medium, or high)"
            )),
        }
    }
}
