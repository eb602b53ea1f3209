//! Segment (day-offset interval) model.

use serde::{Deserialize, Serialize};

/// A reservation's span as day offsets from a window start.
///
/// Half-open interval: includes `start_idx`, excludes `end_idx`.
/// Offsets may be negative or exceed the window length when the stay
/// extends beyond the month.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    /// Source record identifier.
    pub id: String,
    /// First occupied day offset (inclusive).
    pub start_idx: i64,
    /// Checkout day offset (exclusive).
    pub end_idx: i64,
}

impl Segment {
    /// Creates a new segment.
    pub fn new(id: impl Into<String>, start_idx: i64, end_idx: i64) -> Self {
        Self {
            id: id.into(),
            start_idx,
            end_idx,
        }
    }

    /// Length in days.
    #[inline]
    pub fn len_days(&self) -> i64 {
        self.end_idx - self.start_idx
    }

    /// Whether the range is empty or inverted.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.end_idx <= self.start_idx
    }

    /// Whether two segments share at least one day.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_idx < other.end_idx && other.start_idx < self.end_idx
    }

    /// The part of this segment drawn inside a window of `days` columns.
    ///
    /// Returns `None` if nothing of the segment falls in `[0, days)`.
    pub fn visible_range(&self, days: i64) -> Option<(i64, i64)> {
        let start = self.start_idx.max(0);
        let end = self.end_idx.min(days);
        (end > start).then_some((start, end))
    }
}
