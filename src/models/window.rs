//! Month window model.
//!
//! A window is a half-open day range `[month_start, month_end)`. Segment
//! offsets are whole days counted from `month_start`.
//!
//! # Visibility
//! A stay `[checkin, checkout)` is visible iff it overlaps the window:
//! `checkout > month_start` AND `checkin < month_end`. Stays that only
//! partially overlap (started last month, end next month) are visible.

use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, Result};

/// A day window [month_start, month_end).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthWindow {
    /// First day of the window (inclusive).
    pub month_start: NaiveDate,
    /// Day after the last day of the window (exclusive).
    pub month_end: NaiveDate,
}

impl MonthWindow {
    /// Creates a window from explicit boundaries.
    ///
    /// Fails with [`CalendarError::InvalidWindow`] when `month_end <= month_start`.
    pub fn new(month_start: NaiveDate, month_end: NaiveDate) -> Result<Self> {
        if month_end <= month_start {
            return Err(CalendarError::InvalidWindow {
                start: month_start,
                end: month_end,
            });
        }
        Ok(Self {
            month_start,
            month_end,
        })
    }

    /// Creates the window covering one calendar month.
    ///
    /// ```
    /// use stay_calendar::models::MonthWindow;
    ///
    /// let jan = MonthWindow::for_month(2025, 1).unwrap();
    /// assert_eq!(jan.days(), 31);
    /// assert_eq!(jan.month_end.to_string(), "2025-02-01");
    /// ```
    pub fn for_month(year: i32, month: u32) -> Result<Self> {
        let invalid = || CalendarError::InvalidMonth { year, month };
        let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        let end = start
            .checked_add_months(Months::new(1))
            .ok_or_else(invalid)?;
        Self::new(start, end)
    }

    /// The window containing `date`'s calendar month.
    pub fn containing(date: NaiveDate) -> Result<Self> {
        Self::for_month(date.year(), date.month())
    }

    /// Number of days in the window.
    #[inline]
    pub fn days(&self) -> i64 {
        (self.month_end - self.month_start).num_days()
    }

    /// Whole-day offset of `date` from the window start (may be negative).
    #[inline]
    pub fn day_offset(&self, date: NaiveDate) -> i64 {
        (date - self.month_start).num_days()
    }

    /// Calendar date at a day offset from the window start.
    pub fn date_at(&self, offset: i64) -> Option<NaiveDate> {
        Duration::try_days(offset).and_then(|d| self.month_start.checked_add_signed(d))
    }

    /// Whether a day falls inside the window.
    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.month_start && date < self.month_end
    }

    /// Whether a stay [checkin, checkout) overlaps the window.
    pub fn overlaps(&self, checkin: NaiveDate, checkout: NaiveDate) -> bool {
        checkout > self.month_start && checkin < self.month_end
    }
}
