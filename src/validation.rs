//! Structural checks for segments and lane assignments.
//!
//! The engine itself never rejects input. These checks let callers (and
//! tests) confirm that data fed to, or produced by, the lane packer is
//! sound. Detects:
//! - Duplicate segment IDs
//! - Empty or inverted ranges
//! - Segments missing from a lane assignment
//! - Overlapping segments sharing a lane
//!
//! All problems are collected rather than stopping at the first one.

use std::collections::{HashMap, HashSet};

use crate::lanes::LaneAssignment;
use crate::models::Segment;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two segments share the same ID.
    DuplicateId,
    /// A segment has `end_idx <= start_idx`.
    DegenerateRange,
    /// A segment has no lane.
    MissingLane,
    /// Two segments in one lane overlap.
    LaneOverlap,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates segments before packing.
///
/// Checks:
/// 1. No duplicate segment IDs
/// 2. Every range satisfies `start_idx < end_idx`
pub fn validate_segments(segments: &[Segment]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for seg in segments {
        if !ids.insert(seg.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate segment ID: {}", seg.id),
            ));
        }
        if seg.is_degenerate() {
            errors.push(ValidationError::new(
                ValidationErrorKind::DegenerateRange,
                format!(
                    "Segment '{}' has empty range [{}, {})",
                    seg.id, seg.start_idx, seg.end_idx
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a lane assignment against the segments it was built from.
///
/// Checks:
/// 1. Every segment has a lane
/// 2. No two segments in the same lane overlap
pub fn validate_lanes(segments: &[Segment], assignment: &LaneAssignment) -> ValidationResult {
    let mut errors = Vec::new();
    let mut by_lane: HashMap<usize, Vec<&Segment>> = HashMap::new();

    for seg in segments {
        match assignment.lane_of(&seg.id) {
            Some(lane) => by_lane.entry(lane).or_default().push(seg),
            None => errors.push(ValidationError::new(
                ValidationErrorKind::MissingLane,
                format!("Segment '{}' has no lane", seg.id),
            )),
        }
    }

    let mut lanes: Vec<_> = by_lane.into_iter().collect();
    lanes.sort_by_key(|(lane, _)| *lane);

    for (lane, mut members) in lanes {
        members.sort_by_key(|s| (s.start_idx, s.end_idx));
        for pair in members.windows(2) {
            if pair[0].overlaps(pair[1]) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::LaneOverlap,
                    format!(
                        "Segments '{}' and '{}' overlap in lane {}",
                        pair[0].id, pair[1].id, lane
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
