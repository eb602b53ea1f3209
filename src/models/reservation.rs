//! Reservation (stay) record model.
//!
//! Reservations arrive as loosely-typed rows: dates are strings in
//! whatever shape the data store produced, and may be missing. They are
//! only interpreted as calendar dates when segments are built.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// A stay reservation with raw check-in/check-out dates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// Unique reservation identifier.
    pub id: String,
    /// Check-in date (first night).
    #[serde(default)]
    pub checkin: Option<String>,
    /// Check-out date (departure day, not occupied).
    #[serde(default)]
    pub checkout: Option<String>,
}

impl Reservation {
    /// Creates a reservation with both dates set.
    pub fn new(
        id: impl Into<String>,
        checkin: impl Into<String>,
        checkout: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            checkin: Some(checkin.into()),
            checkout: Some(checkout.into()),
        }
    }

    /// Parsed check-in date, if present and valid.
    pub fn checkin_date(&self) -> Option<NaiveDate> {
        self.checkin.as_deref().and_then(parse_stay_date)
    }

    /// Parsed check-out date, if present and valid.
    pub fn checkout_date(&self) -> Option<NaiveDate> {
        self.checkout.as_deref().and_then(parse_stay_date)
    }

    /// Both dates, or `None` if either is missing or unparseable.
    pub fn stay_dates(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.checkin_date()?, self.checkout_date()?))
    }
}

/// Parses a date-like string into a calendar date, discarding time-of-day.
///
/// Timestamps carrying an offset keep the date as written (no conversion
/// to UTC), matching how the stay appears to the property.
pub fn parse_stay_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}
