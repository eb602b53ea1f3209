//! Lane packing for calendar segments.
//!
//! Assigns each segment a display lane so that segments sharing a lane
//! never overlap.
//!
//! # Algorithm
//!
//! Greedy interval partitioning. Lanes are kept as a list of end
//! boundaries in creation order. Each segment, taken in input order, goes
//! to the first lane whose end is `<= start_idx`; if none is free a new
//! lane is opened.
//!
//! When input is sorted by start (as [`build_segments`] returns it) the
//! number of lanes equals the peak number of simultaneously open segments,
//! which is optimal.
//!
//! # Complexity
//! O(n * L) where L is the number of lanes (L <= n).
//!
//! # Reference
//! Kleinberg & Tardos (2005), "Algorithm Design", Ch. 4.1 (Interval Partitioning)
//!
//! [`build_segments`]: crate::segments::build_segments

use std::collections::BTreeMap;

use log::{trace, warn};
use serde::{Deserialize, Serialize};

use crate::models::{MonthWindow, Reservation, Segment};
use crate::segments::build_segments;

/// Lane index per segment id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneAssignment {
    /// Segment id → 0-based lane.
    pub lanes: BTreeMap<String, usize>,
    /// Number of lanes opened.
    pub lane_count: usize,
}

impl LaneAssignment {
    /// Lane of a segment.
    pub fn lane_of(&self, id: &str) -> Option<usize> {
        self.lanes.get(id).copied()
    }

    /// Number of lanes opened.
    #[inline]
    pub fn lane_count(&self) -> usize {
        self.lane_count
    }

    /// Number of placed segments.
    #[inline]
    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    /// Whether nothing was placed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }

    /// `(id, lane)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.lanes.iter().map(|(id, &lane)| (id.as_str(), lane))
    }
}

/// Places segments into lanes, in input order.
///
/// Callers should pass segments sorted by `(start_idx, end_idx)`; any other
/// order still yields non-overlapping lanes but may use more of them.
///
/// # Example
///
/// ```
/// use stay_calendar::lanes::place_into_lanes;
/// use stay_calendar::models::Segment;
///
/// let segments = vec![
///     Segment::new("a", 0, 3),
///     Segment::new("b", 2, 4),
///     Segment::new("c", 4, 6),
/// ];
/// let lanes = place_into_lanes(&segments);
/// assert_eq!(lanes.lane_of("a"), Some(0));
/// assert_eq!(lanes.lane_of("b"), Some(1));
/// assert_eq!(lanes.lane_of("c"), Some(0));
/// assert_eq!(lanes.lane_count(), 2);
/// ```
pub fn place_into_lanes(segments: &[Segment]) -> LaneAssignment {
    let mut lane_ends: Vec<i64> = Vec::new();
    let mut assignment = LaneAssignment::default();

    for seg in segments {
        let lane = match lane_ends.iter().position(|&end| end <= seg.start_idx) {
            Some(free) => {
                lane_ends[free] = seg.end_idx;
                free
            }
            None => {
                lane_ends.push(seg.end_idx);
                lane_ends.len() - 1
            }
        };
        trace!(
            "segment {} [{}, {}) -> lane {}",
            seg.id,
            seg.start_idx,
            seg.end_idx,
            lane
        );

        if assignment.lanes.insert(seg.id.clone(), lane).is_some() {
            warn!("duplicate segment id {}: keeping last lane {}", seg.id, lane);
        }
    }

    assignment.lane_count = lane_ends.len();
    assignment
}

/// Builds and packs the segments of one month in a single call.
pub fn pack_month(
    records: &[Reservation],
    window: &MonthWindow,
) -> (Vec<Segment>, LaneAssignment) {
    let segments = build_segments(records, window);
    let lanes = place_into_lanes(&segments);
    (segments, lanes)
}

/// Maximum number of segments open on any single day offset.
///
/// Sweep over start/end events; an end at `d` is processed before a start
/// at `d` since the ranges are half-open.
pub fn peak_concurrency(segments: &[Segment]) -> usize {
    let mut events: Vec<(i64, i32)> = segments
        .iter()
        .filter(|s| !s.is_degenerate())
        .flat_map(|s| [(s.start_idx, 1), (s.end_idx, -1)])
        .collect();
    events.sort_unstable();

    let mut open: i32 = 0;
    let mut peak: i32 = 0;
    for (_, delta) in events {
        open += delta;
        peak = peak.max(open);
    }
    peak as usize
}
