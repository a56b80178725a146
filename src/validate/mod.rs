//! Pure field validation.
//!
//! Checks a complete candidate field set for consistency before the store
//! accepts a mutation. Every rule is evaluated independently so a single
//! pass reports all violated fields at once; nothing here consults the
//! store or has side effects.

use std::collections::BTreeMap;
use std::fmt;

use crate::model::ItemFields;

/// Field-level validation failures, keyed by attribute name.
///
/// Keys match the item's serialized attribute names one-to-one so the
/// presentation layer can surface each reason inline next to its field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<String, String>,
}

impl ValidationErrors {
    /// The reason recorded for `field`, if that field failed.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Number of failed fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns `true` if no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterates over `(field, reason)` pairs in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn insert(&mut self, field: &str, reason: &str) {
        self.errors.insert(field.to_string(), reason.to_string());
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, reason) in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {reason}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Validates a candidate field set.
///
/// Rules, all independent:
/// - `title` must be non-empty after trimming;
/// - when both estimated dates are set, start must not be after end;
/// - when both actual dates are set, start must not be after end;
/// - `estimated_time` must be non-negative;
/// - `progress` must not exceed 100.
///
/// # Errors
///
/// Returns the full field → reason mapping when any rule fails.
pub fn validate(fields: &ItemFields) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if fields.title.trim().is_empty() {
        errors.insert("title", "Title is required");
    }

    if let (Some(start), Some(end)) = (fields.estimated_start_date, fields.estimated_end_date) {
        if start > end {
            errors.insert("estimated_end_date", "End date must be after start date");
        }
    }

    if let (Some(start), Some(end)) = (fields.actual_start_date, fields.actual_end_date) {
        if start > end {
            errors.insert("actual_end_date", "Actual end date must be after actual start date");
        }
    }

    if fields.estimated_time < 0.0 {
        errors.insert("estimated_time", "Estimated time cannot be negative");
    }

    if fields.progress > 100 {
        errors.insert("progress", "Progress must be between 0 and 100");
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
