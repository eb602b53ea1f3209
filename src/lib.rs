//! Monthly stay calendar engine.
//!
//! Computes what a monthly reservation calendar draws: which stays are
//! visible, which display lane each stay occupies, and how cleaning
//! missions are titled, labelled and colored. Everything is a pure
//! function over caller-supplied data without I/O or hidden state.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Reservation`, `MonthWindow`, `Segment`,
//!   `Mission`, `MissionPart`, `CleaningTask`, `ClassificationItem`
//! - **`segments`**: Visible-span filtering and day-offset conversion
//! - **`lanes`**: Greedy interval partitioning into display lanes
//! - **`classify`**: Color kind, mission title, status label
//! - **`config`**: Marker texts and status labels (TOML-overridable)
//! - **`validation`**: Integrity checks for segments and lane assignments
//!
//! # Pipelines
//!
//! ```text
//! Reservation[] ──build_segments──▶ Segment[] ──place_into_lanes──▶ LaneAssignment
//! Mission / ClassificationItem ──classify / mission_title / status_label──▶ strings
//! ```
//!
//! # Example
//!
//! ```
//! use stay_calendar::lanes::pack_month;
//! use stay_calendar::models::{MonthWindow, Reservation};
//!
//! let window = MonthWindow::for_month(2025, 1).unwrap();
//! let records = vec![
//!     Reservation::new("a", "2025-01-01", "2025-01-04"),
//!     Reservation::new("b", "2025-01-03", "2025-01-05"),
//!     Reservation::new("c", "2025-01-05", "2025-01-07"),
//! ];
//! let (_segments, lanes) = pack_month(&records, &window);
//! assert_eq!(lanes.lane_of("b"), Some(1));
//! assert_eq!(lanes.lane_count(), 2);
//! ```
//!
//! # References
//!
//! - Kleinberg & Tardos (2005), "Algorithm Design", Ch. 4.1
//! - Golumbic (2004), "Algorithmic Graph Theory and Perfect Graphs", Ch. 8

pub mod classify;
pub mod config;
pub mod error;
pub mod lanes;
pub mod models;
pub mod segments;
pub mod validation;

pub use error::{CalendarError, Result};
