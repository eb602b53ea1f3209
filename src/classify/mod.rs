//! Mission and task classification.
//!
//! Derives display strings for calendar cells:
//!
//! - [`classify`]: four-way color kind of a task-like item
//! - [`mission_title`]: `"<code> <time><marker> ..."` title of a mission
//! - [`status_label`]: user-facing label for a workflow status
//!
//! All functions depend only on their arguments.

mod status;

pub use status::{status_label, StatusBucket};

use serde::{Deserialize, Serialize};

use crate::config::Markers;
use crate::models::{ClassificationItem, Mission, PartKind};

/// Source recorded on items synthesized from missions.
pub const CLEANING_TASKS_SOURCE: &str = "cleaning_tasks";

/// Display category driving calendar cell color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorKind {
    /// Nobody assigned yet.
    Unassigned,
    /// Checkin preparation only.
    Checkin,
    /// Checkout cleaning only.
    Checkout,
    /// Both, or mixed-purpose work.
    Combined,
}

impl ColorKind {
    /// Stable lowercase name (`unassigned`, `checkin`, `checkout`, `combined`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorKind::Unassigned => "unassigned",
            ColorKind::Checkin => "checkin",
            ColorKind::Checkout => "checkout",
            ColorKind::Combined => "combined",
        }
    }

    fn from_flags(checkin: bool, checkout: bool) -> Option<Self> {
        match (checkin, checkout) {
            (true, true) => Some(ColorKind::Combined),
            (true, false) => Some(ColorKind::Checkin),
            (false, true) => Some(ColorKind::Checkout),
            (false, false) => None,
        }
    }
}

impl std::fmt::Display for ColorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies an item into a [`ColorKind`].
///
/// Rules, first match wins:
/// 1. No assignee → `Unassigned`, whatever the label says.
/// 2. Offline task → `Combined`.
/// 3. More than one underlying entity → `Combined`.
/// 4. Label markers (both → `Combined`, else the one found).
/// 5. `checkin`/`checkout` in lowercase `"source:label"`.
/// 6. `Checkout`.
///
/// Rule 6 is a fallback for labels without any marker, not a judgement
/// that the task is a checkout.
///
/// # Example
///
/// ```
/// use stay_calendar::classify::{classify, ColorKind};
/// use stay_calendar::config::Markers;
/// use stay_calendar::models::ClassificationItem;
///
/// let markers = Markers::default();
/// let item = ClassificationItem::new("cleaning_tasks", "入住 退房").with_assignee("u1");
/// assert_eq!(classify(&item, &markers), ColorKind::Combined);
/// ```
pub fn classify(item: &ClassificationItem, markers: &Markers) -> ColorKind {
    if !item.is_assigned() {
        return ColorKind::Unassigned;
    }
    if item.is_offline() || item.entity_ids.len() > 1 {
        return ColorKind::Combined;
    }

    let label = item.label.as_str();
    if let Some(kind) = ColorKind::from_flags(
        contains_marker(label, &markers.checkin),
        contains_marker(label, &markers.checkout),
    ) {
        return kind;
    }

    let haystack = format!("{}:{}", item.source, item.label).to_lowercase();
    ColorKind::from_flags(haystack.contains("checkin"), haystack.contains("checkout"))
        .unwrap_or(ColorKind::Checkout)
}

fn contains_marker(text: &str, marker: &str) -> bool {
    !marker.is_empty() && text.contains(marker)
}

/// Classifies a whole mission.
///
/// The mission is viewed as a cleaning task labelled with the markers of
/// its present parts, assigned to its first assignee, and backed by one
/// entity per part.
pub fn classify_mission(mission: &Mission, markers: &Markers) -> ColorKind {
    classify(&mission_item(mission, markers), markers)
}

/// Builds the [`ClassificationItem`] view of a mission.
pub fn mission_item(mission: &Mission, markers: &Markers) -> ClassificationItem {
    let label = mission
        .parts()
        .map(|(kind, _)| marker_for(kind, markers))
        .collect::<Vec<_>>()
        .join(" ");

    ClassificationItem {
        source: CLEANING_TASKS_SOURCE.to_string(),
        label,
        assignee_id: Some(mission.assignee().to_string()),
        cleaner_id: None,
        cleaner: None,
        entity_ids: mission.task_ids(),
    }
}

fn marker_for(kind: PartKind, markers: &Markers) -> &str {
    match kind {
        PartKind::Checkout => &markers.checkout,
        PartKind::Checkin => &markers.checkin,
    }
}

/// Composes the calendar title of a mission.
///
/// Each present part renders as `"<time><marker>"` (bare marker if no
/// time); checkout comes first. The result is `"<code> <parts>"` with
/// trailing whitespace removed.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use stay_calendar::classify::mission_title;
/// use stay_calendar::config::Markers;
/// use stay_calendar::models::{Mission, MissionPart};
///
/// let mission = Mission::new("p1", NaiveDate::from_ymd_opt(2025, 1, 5).unwrap())
///     .with_property_code("MSQ402")
///     .with_checkout(MissionPart::new("t1", "pending").with_time("11:30"))
///     .with_checkin(MissionPart::new("t2", "pending").with_time("15:00"));
///
/// assert_eq!(mission_title(&mission, &Markers::default()), "MSQ402 11:30退房 15:00入住");
/// ```
pub fn mission_title(mission: &Mission, markers: &Markers) -> String {
    let parts = mission
        .parts()
        .map(|(kind, part)| format!("{}{}", part.time_text(), marker_for(kind, markers)))
        .collect::<Vec<_>>()
        .join(" ");

    format!("{} {}", mission.display_code(), parts)
        .trim_end()
        .to_string()
}
