//! Cleaning mission model.
//!
//! A mission bundles the work scheduled at one property on one day: at
//! most one checkout task and at most one checkin task. A mission holding
//! both parts is a same-day turnover.
//!
//! Missions are keyed by `(property_id, date)`; [`group_missions`] builds
//! them from flat task rows.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use log::warn;
use serde::{Deserialize, Serialize};

/// Which side of a turnover a task covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartKind {
    /// Cleaning after guests leave.
    Checkout,
    /// Preparation before guests arrive.
    Checkin,
}

/// One side of a mission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MissionPart {
    /// Backing cleaning task.
    pub task_id: String,
    /// Workflow status (see `classify::StatusBucket`).
    pub status: String,
    /// Assigned cleaner id.
    pub assignee_id: Option<String>,
    /// Assigned cleaner display name.
    pub assignee_name: Option<String>,
    /// Scheduled time of day, free text (e.g. `11:30`).
    pub time: Option<String>,
    /// Door/lockbox code.
    pub code: Option<String>,
    /// Free-text note.
    pub note: Option<String>,
}

impl MissionPart {
    /// Creates a part for a task.
    pub fn new(task_id: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            task_id: task_id.into(),
            status: status.into(),
            ..Self::default()
        }
    }

    /// Sets the assignee.
    pub fn with_assignee(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.assignee_id = Some(id.into());
        self.assignee_name = Some(name.into());
        self
    }

    /// Sets the time of day.
    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    /// Sets the access code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Sets the note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Trimmed time text, empty if absent.
    pub fn time_text(&self) -> &str {
        self.time.as_deref().map(str::trim).unwrap_or("")
    }
}

/// Per-property, per-day bundle of checkout and checkin work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    /// Property identifier.
    pub property_id: String,
    /// Short display code for the property.
    #[serde(default)]
    pub property_code: Option<String>,
    /// Mission day.
    pub date: NaiveDate,
    /// Checkout cleaning.
    #[serde(default)]
    pub checkout: Option<MissionPart>,
    /// Checkin preparation.
    #[serde(default)]
    pub checkin: Option<MissionPart>,
}

impl Mission {
    /// Creates an empty mission.
    pub fn new(property_id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            property_id: property_id.into(),
            property_code: None,
            date,
            checkout: None,
            checkin: None,
        }
    }

    /// Sets the property display code.
    pub fn with_property_code(mut self, code: impl Into<String>) -> Self {
        self.property_code = Some(code.into());
        self
    }

    /// Sets the checkout part.
    pub fn with_checkout(mut self, part: MissionPart) -> Self {
        self.checkout = Some(part);
        self
    }

    /// Sets the checkin part.
    pub fn with_checkin(mut self, part: MissionPart) -> Self {
        self.checkin = Some(part);
        self
    }

    /// Part of the given kind.
    pub fn part(&self, kind: PartKind) -> Option<&MissionPart> {
        match kind {
            PartKind::Checkout => self.checkout.as_ref(),
            PartKind::Checkin => self.checkin.as_ref(),
        }
    }

    fn part_slot(&mut self, kind: PartKind) -> &mut Option<MissionPart> {
        match kind {
            PartKind::Checkout => &mut self.checkout,
            PartKind::Checkin => &mut self.checkin,
        }
    }

    /// Present parts in display order (checkout first).
    pub fn parts(&self) -> impl Iterator<Item = (PartKind, &MissionPart)> {
        [PartKind::Checkout, PartKind::Checkin]
            .into_iter()
            .filter_map(|kind| self.part(kind).map(|p| (kind, p)))
    }

    /// Whether both parts are present (same-day turnover).
    pub fn is_turnover(&self) -> bool {
        self.checkout.is_some() && self.checkin.is_some()
    }

    /// Display code: `property_code`, else `property_id`.
    pub fn display_code(&self) -> &str {
        self.property_code
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(&self.property_id)
    }

    /// First non-empty assignee across parts (checkout first), trimmed.
    pub fn assignee(&self) -> &str {
        self.parts()
            .find_map(|(_, p)| p.assignee_id.as_deref().map(str::trim).filter(|a| !a.is_empty()))
            .unwrap_or("")
    }

    /// Task ids of the present parts.
    pub fn task_ids(&self) -> Vec<String> {
        self.parts().map(|(_, p)| p.task_id.clone()).collect()
    }
}

/// A flat cleaning task row, one side of a mission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningTask {
    /// Property identifier.
    pub property_id: String,
    /// Short display code for the property.
    #[serde(default)]
    pub property_code: Option<String>,
    /// Task day.
    pub date: NaiveDate,
    /// Checkout or checkin side.
    pub kind: PartKind,
    /// Task details.
    #[serde(flatten)]
    pub part: MissionPart,
}

impl CleaningTask {
    /// Creates a task row.
    pub fn new(
        property_id: impl Into<String>,
        date: NaiveDate,
        kind: PartKind,
        part: MissionPart,
    ) -> Self {
        Self {
            property_id: property_id.into(),
            property_code: None,
            date,
            kind,
            part,
        }
    }

    /// Sets the property display code.
    pub fn with_property_code(mut self, code: impl Into<String>) -> Self {
        self.property_code = Some(code.into());
        self
    }
}

/// Bundles task rows into missions keyed by `(property_id, date)`.
///
/// Missions are returned ordered by date, then property id. When two rows
/// claim the same side of the same mission the first one is kept. The
/// first non-empty property code seen for a mission is used.
pub fn group_missions(tasks: &[CleaningTask]) -> Vec<Mission> {
    let mut missions: BTreeMap<(NaiveDate, &str), Mission> = BTreeMap::new();

    for task in tasks {
        let mission = missions
            .entry((task.date, task.property_id.as_str()))
            .or_insert_with(|| Mission::new(task.property_id.clone(), task.date));

        if mission.property_code.is_none() {
            mission.property_code = task.property_code.clone().filter(|c| !c.is_empty());
        }

        let slot = mission.part_slot(task.kind);
        if let Some(existing) = slot.as_ref() {
            warn!(
                "duplicate {:?} task for property {} on {}: keeping {}, ignoring {}",
                task.kind, task.property_id, task.date, existing.task_id, task.part.task_id
            );
            continue;
        }
        *slot = Some(task.part.clone());
    }

    missions.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    #[test]
    fn test_mission_builder() {
        let m = Mission::new("p1", d(5))
            .with_property_code("MSQ402")
            .with_checkout(
                MissionPart::new("t1", "pending")
                    .with_time("11:30")
                    .with_code("4821")
                    .with_note("towels in closet"),
            )
            .with_checkin(MissionPart::new("t2", "pending").with_time("15:00"));

        assert!(m.is_turnover());
        let checkout = m.part(PartKind::Checkout).unwrap();
        assert_eq!(checkout.code.as_deref(), Some("4821"));
        assert_eq!(checkout.note.as_deref(), Some("towels in closet"));
        assert!(m.part(PartKind::Checkin).unwrap().code.is_none());
        assert_eq!(m.display_code(), "MSQ402");
        assert_eq!(m.task_ids(), vec!["t1".to_string(), "t2".to_string()]);
        let kinds: Vec<_> = m.parts().map(|(k, _)| k).collect();
        assert_eq!(kinds, vec![PartKind::Checkout, PartKind::Checkin]);
    }

    #[test]
    fn test_display_code_fallback() {
        let m = Mission::new("p1", d(5));
        assert_eq!(m.display_code(), "p1");
        let m = Mission::new("p1", d(5)).with_property_code("");
        assert_eq!(m.display_code(), "p1");
    }

    #[test]
    fn test_mission_assignee() {
        let m = Mission::new("p1", d(5))
            .with_checkout(MissionPart::new("t1", "pending"))
            .with_checkin(MissionPart::new("t2", "scheduled").with_assignee(" u2 ", "Bo"));
        assert_eq!(m.assignee(), "u2");
        assert_eq!(Mission::new("p1", d(5)).assignee(), "");
    }

    #[test]
    fn test_group_missions_merges_turnover() {
        let tasks = vec![
            CleaningTask::new("p2", d(3), PartKind::Checkin, MissionPart::new("t3", "pending")),
            CleaningTask::new("p1", d(3), PartKind::Checkout, MissionPart::new("t1", "pending"))
                .with_property_code("A1"),
            CleaningTask::new("p1", d(3), PartKind::Checkin, MissionPart::new("t2", "pending")),
            CleaningTask::new("p1", d(1), PartKind::Checkout, MissionPart::new("t0", "done")),
        ];

        let missions = group_missions(&tasks);
        assert_eq!(missions.len(), 3);

        assert_eq!((missions[0].property_id.as_str(), missions[0].date), ("p1", d(1)));
        assert_eq!((missions[1].property_id.as_str(), missions[1].date), ("p1", d(3)));
        assert_eq!((missions[2].property_id.as_str(), missions[2].date), ("p2", d(3)));

        assert!(missions[1].is_turnover());
        assert_eq!(missions[1].display_code(), "A1");
        assert!(missions[2].checkout.is_none());
    }

    #[test]
    fn test_group_missions_first_wins() {
        let tasks = vec![
            CleaningTask::new("p1", d(3), PartKind::Checkout, MissionPart::new("first", "pending")),
            CleaningTask::new("p1", d(3), PartKind::Checkout, MissionPart::new("second", "pending")),
        ];
        let missions = group_missions(&tasks);
        assert_eq!(missions.len(), 1);
        assert_eq!(missions[0].checkout.as_ref().unwrap().task_id, "first");
    }

    #[test]
    fn test_cleaning_task_from_json() {
        let task: CleaningTask = serde_json::from_str(
            r#"{"property_id":"p1","date":"2025-01-05","kind":"checkin","task_id":"t9","status":"scheduled","time":"15:00"}"#,
        )
        .unwrap();
        assert_eq!(task.kind, PartKind::Checkin);
        assert_eq!(task.part.task_id, "t9");
        assert_eq!(task.part.time_text(), "15:00");
    }
}
