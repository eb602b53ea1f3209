//! Calendar domain models.
//!
//! Plain data types supplied by the caller (reservations, cleaning tasks,
//! missions) and produced by the engine (segments). None of them perform
//! I/O; all derive serde so rows can be decoded straight from JSON.
//!
//! # Domain Mappings
//!
//! | stay-calendar | Meaning |
//! |---------------|---------|
//! | Reservation | Guest stay with check-in/check-out dates |
//! | MonthWindow | Visible month `[start, end)` |
//! | Segment | Stay as day offsets within a window |
//! | Mission | Per-property, per-day checkout + checkin work |
//! | ClassificationItem | Any task-like row to color |

mod item;
mod mission;
mod reservation;
mod segment;
mod window;

pub use item::{AssigneeField, ClassificationItem, ASSIGNEE_FIELDS, OFFLINE_TASKS_SOURCE};
pub use mission::{group_missions, CleaningTask, Mission, MissionPart, PartKind};
pub use reservation::{parse_stay_date, Reservation};
pub use segment::Segment;
pub use window::MonthWindow;
