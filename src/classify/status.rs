//! Workflow status buckets.
//!
//! Cleaning tasks move through several workflow states; the calendar only
//! shows four buckets:
//!
//! | Status | Bucket |
//! |--------|--------|
//! | `pending` | Unassigned |
//! | `scheduled`, `in_progress` | InProgress |
//! | `done`, `ready`, `cleaned`, `restocked`, `inspected` | Completed |
//! | `canceled` | Canceled |
//!
//! Unknown statuses have no bucket and are shown verbatim.

use serde::{Deserialize, Serialize};

use crate::config::StatusLabels;

/// User-facing status group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusBucket {
    /// Waiting for a cleaner.
    Unassigned,
    /// Assigned and not finished.
    InProgress,
    /// Finished in any way.
    Completed,
    /// Called off.
    Canceled,
}

impl StatusBucket {
    /// Bucket of a raw status, `None` for unknown or empty values.
    pub fn from_status(status: &str) -> Option<Self> {
        match status {
            "pending" => Some(StatusBucket::Unassigned),
            "scheduled" | "in_progress" => Some(StatusBucket::InProgress),
            "done" | "ready" | "cleaned" | "restocked" | "inspected" => {
                Some(StatusBucket::Completed)
            }
            "canceled" => Some(StatusBucket::Canceled),
            _ => None,
        }
    }

    /// Configured label of this bucket.
    pub fn label<'a>(&self, labels: &'a StatusLabels) -> &'a str {
        match self {
            StatusBucket::Unassigned => &labels.unassigned,
            StatusBucket::InProgress => &labels.in_progress,
            StatusBucket::Completed => &labels.completed,
            StatusBucket::Canceled => &labels.canceled,
        }
    }
}

/// Display label for a workflow status.
///
/// Known statuses map to their bucket label, an empty status becomes the
/// placeholder, anything else is returned unchanged.
pub fn status_label(status: &str, labels: &StatusLabels) -> String {
    if let Some(bucket) = StatusBucket::from_status(status) {
        return bucket.label(labels).to_string();
    }
    if status.trim().is_empty() {
        return labels.placeholder.clone();
    }
    status.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buckets() {
        let labels = StatusLabels::default();
        assert_eq!(status_label("pending", &labels), "待分配");
        assert_eq!(status_label("scheduled", &labels), "进行中");
        assert_eq!(status_label("in_progress", &labels), "进行中");
        for done in ["done", "ready", "cleaned", "restocked", "inspected"] {
            assert_eq!(status_label(done, &labels), "已完成");
        }
        assert_eq!(status_label("canceled", &labels), "已取消");
    }

    #[test]
    fn test_unknown_passes_through() {
        let labels = StatusLabels::default();
        assert_eq!(status_label("awaiting_photos", &labels), "awaiting_photos");
        // Matching is exact.
        assert_eq!(status_label("Done", &labels), "Done");
        assert_eq!(StatusBucket::from_status("cancelled"), None);
    }

    #[test]
    fn test_empty_is_placeholder() {
        let labels = StatusLabels::default();
        assert_eq!(status_label("", &labels), "-");
        assert_eq!(status_label("  ", &labels), "-");
    }

    #[test]
    fn test_custom_labels() {
        let labels = StatusLabels {
            completed: "Done".to_string(),
            ..StatusLabels::default()
        };
        assert_eq!(status_label("inspected", &labels), "Done");
    }
}
