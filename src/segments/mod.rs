//! Segment builder.
//!
//! Turns reservation rows into day-offset segments for one month window.
//!
//! # Algorithm
//!
//! 1. Parse check-in/check-out as calendar dates; skip rows with a missing
//!    or unparseable date, or with checkout not after checkin.
//! 2. Keep rows overlapping the window (`checkout > start && checkin < end`).
//! 3. Convert dates to whole-day offsets from the window start.
//! 4. Stable-sort by `(start_idx, end_idx)`.
//!
//! The sort order is what the lane packer relies on for minimality and
//! deterministic tie-breaking.
//!
//! # Complexity
//! O(n log n) for n records.

use log::debug;

use crate::models::{MonthWindow, Reservation, Segment};

/// Builds the ordered segments visible in `window`.
///
/// Never fails: invalid rows are skipped and logged at `debug` level.
///
/// # Example
///
/// ```
/// use stay_calendar::models::{MonthWindow, Reservation};
/// use stay_calendar::segments::build_segments;
///
/// let window = MonthWindow::for_month(2025, 1).unwrap();
/// let records = vec![
///     Reservation::new("late", "2025-01-10", "2025-01-12"),
///     Reservation::new("early", "2024-12-30", "2025-01-02"),
///     Reservation::new("feb", "2025-02-03", "2025-02-05"),
/// ];
///
/// let segments = build_segments(&records, &window);
/// assert_eq!(segments.len(), 2);
/// assert_eq!((segments[0].id.as_str(), segments[0].start_idx, segments[0].end_idx), ("early", -2, 1));
/// assert_eq!((segments[1].id.as_str(), segments[1].start_idx, segments[1].end_idx), ("late", 9, 11));
/// ```
pub fn build_segments(records: &[Reservation], window: &MonthWindow) -> Vec<Segment> {
    let mut segments: Vec<Segment> = records
        .iter()
        .filter_map(|record| to_segment(record, window))
        .collect();

    sort_segments(&mut segments);
    segments
}

/// Sorts segments by start, then end. Stable: equal ranges keep input order.
pub fn sort_segments(segments: &mut [Segment]) {
    segments.sort_by_key(|s| (s.start_idx, s.end_idx));
}

fn to_segment(record: &Reservation, window: &MonthWindow) -> Option<Segment> {
    let Some((checkin, checkout)) = record.stay_dates() else {
        debug!(
            "skipping reservation {}: unparseable dates (checkin={:?}, checkout={:?})",
            record.id, record.checkin, record.checkout
        );
        return None;
    };

    if checkout <= checkin {
        debug!(
            "skipping reservation {}: checkout {} not after checkin {}",
            record.id, checkout, checkin
        );
        return None;
    }

    if !window.overlaps(checkin, checkout) {
        return None;
    }

    Some(Segment::new(
        record.id.clone(),
        window.day_offset(checkin),
        window.day_offset(checkout),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan() -> MonthWindow {
        MonthWindow::for_month(2025, 1).unwrap()
    }

    fn ids(segments: &[Segment]) -> Vec<&str> {
        segments.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_partial_overlap_included() {
        let records = vec![Reservation::new("r", "2024-12-30", "2025-01-02")];
        let segments = build_segments(&records, &jan());
        assert_eq!(segments, vec![Segment::new("r", -2, 1)]);
    }

    #[test]
    fn test_outside_window_excluded() {
        let records = vec![
            Reservation::new("before", "2024-12-20", "2024-12-25"),
            Reservation::new("ends_on_start", "2024-12-28", "2025-01-01"),
            Reservation::new("starts_on_end", "2025-02-01", "2025-02-04"),
            Reservation::new("after", "2025-02-10", "2025-02-12"),
        ];
        assert!(build_segments(&records, &jan()).is_empty());
    }

    #[test]
    fn test_spanning_whole_month() {
        let records = vec![Reservation::new("long", "2024-12-15", "2025-02-15")];
        let segments = build_segments(&records, &jan());
        assert_eq!(segments, vec![Segment::new("long", -17, 45)]);
    }

    #[test]
    fn test_invalid_records_skipped() {
        let records = vec![
            Reservation::new("ok", "2025-01-01", "2025-01-04"),
            Reservation::new("garbage", "soon", "2025-01-04"),
            Reservation {
                id: "no_checkout".into(),
                checkin: Some("2025-01-01".into()),
                checkout: None,
            },
            Reservation::new("same_day", "2025-01-05", "2025-01-05"),
            Reservation::new("inverted", "2025-01-07", "2025-01-05"),
        ];
        assert_eq!(ids(&build_segments(&records, &jan())), vec!["ok"]);
    }

    #[test]
    fn test_time_of_day_discarded() {
        let records = vec![Reservation::new(
            "r",
            "2025-01-03T15:00:00",
            "2025-01-05T11:00:00",
        )];
        assert_eq!(build_segments(&records, &jan()), vec![Segment::new("r", 2, 4)]);
    }

    #[test]
    fn test_sorted_by_start_then_end() {
        let records = vec![
            Reservation::new("c", "2025-01-05", "2025-01-07"),
            Reservation::new("b_long", "2025-01-02", "2025-01-09"),
            Reservation::new("b_short", "2025-01-02", "2025-01-04"),
            Reservation::new("a", "2025-01-01", "2025-01-03"),
        ];
        assert_eq!(
            ids(&build_segments(&records, &jan())),
            vec!["a", "b_short", "b_long", "c"]
        );
    }

    #[test]
    fn test_equal_ranges_keep_input_order() {
        let records = vec![
            Reservation::new("x", "2025-01-02", "2025-01-04"),
            Reservation::new("y", "2025-01-02", "2025-01-04"),
            Reservation::new("z", "2025-01-02", "2025-01-04"),
        ];
        assert_eq!(ids(&build_segments(&records, &jan())), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_idempotent() {
        let records = vec![
            Reservation::new("a", "2025-01-01", "2025-01-04"),
            Reservation::new("b", "2025-01-03", "2025-01-05"),
            Reservation::new("c", "2024-12-31", "2025-01-02"),
        ];
        let first = build_segments(&records, &jan());
        let second = build_segments(&records, &jan());
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
