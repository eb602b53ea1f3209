//! Generic task-like record used for color classification.
//!
//! Covers both single cleaning tasks and merged offline tasks. Several
//! historical field names carry the assignee; they are resolved through
//! [`ASSIGNEE_FIELDS`] in order.

use serde::{Deserialize, Serialize};

/// Source value marking manually created (offline) tasks.
pub const OFFLINE_TASKS_SOURCE: &str = "offline_tasks";

/// Assignee field accessor.
pub type AssigneeField = fn(&ClassificationItem) -> Option<&str>;

/// Assignee fields in precedence order: `assignee_id`, `cleaner_id`, `cleaner`.
pub const ASSIGNEE_FIELDS: &[AssigneeField] = &[assignee_id_field, cleaner_id_field, cleaner_field];

fn assignee_id_field(item: &ClassificationItem) -> Option<&str> {
    item.assignee_id.as_deref()
}

fn cleaner_id_field(item: &ClassificationItem) -> Option<&str> {
    item.cleaner_id.as_deref()
}

fn cleaner_field(item: &ClassificationItem) -> Option<&str> {
    item.cleaner.as_deref()
}

/// A task-like record to classify.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationItem {
    /// Origin table/kind (e.g. `cleaning_tasks`, `offline_tasks`).
    pub source: String,
    /// Free-text label shown on the calendar.
    pub label: String,
    /// Current assignee field.
    pub assignee_id: Option<String>,
    /// Legacy assignee field.
    pub cleaner_id: Option<String>,
    /// Oldest legacy assignee field.
    pub cleaner: Option<String>,
    /// Underlying bookings/tasks merged into this item.
    pub entity_ids: Vec<String>,
}

impl ClassificationItem {
    /// Creates an item with a source and label.
    pub fn new(source: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            label: label.into(),
            ..Self::default()
        }
    }

    /// Sets `assignee_id`.
    pub fn with_assignee(mut self, assignee_id: impl Into<String>) -> Self {
        self.assignee_id = Some(assignee_id.into());
        self
    }

    /// Sets `cleaner_id`.
    pub fn with_cleaner_id(mut self, cleaner_id: impl Into<String>) -> Self {
        self.cleaner_id = Some(cleaner_id.into());
        self
    }

    /// Sets `cleaner`.
    pub fn with_cleaner(mut self, cleaner: impl Into<String>) -> Self {
        self.cleaner = Some(cleaner.into());
        self
    }

    /// Adds an underlying entity id.
    pub fn with_entity(mut self, entity_id: impl Into<String>) -> Self {
        self.entity_ids.push(entity_id.into());
        self
    }

    /// Resolved assignee: first non-empty field in [`ASSIGNEE_FIELDS`], trimmed.
    ///
    /// A whitespace-only value still wins precedence and resolves to `""`.
    pub fn assignee(&self) -> &str {
        ASSIGNEE_FIELDS
            .iter()
            .find_map(|field| field(self).filter(|v| !v.is_empty()))
            .map(str::trim)
            .unwrap_or("")
    }

    /// Whether any assignee is present.
    pub fn is_assigned(&self) -> bool {
        !self.assignee().is_empty()
    }

    /// Whether this is a manually created task.
    pub fn is_offline(&self) -> bool {
        self.source == OFFLINE_TASKS_SOURCE
    }
}
