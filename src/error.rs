//! Error types for stay-calendar.
//!
//! Only window and configuration construction can fail. Segment building,
//! lane packing and classification never return errors.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type for fallible stay-calendar operations.
pub type Result<T> = std::result::Result<T, CalendarError>;

/// Errors raised while constructing calendar inputs.
#[derive(Error, Debug)]
pub enum CalendarError {
    /// Window end is not after its start.
    #[error("Invalid window: end {end} is not after start {start}")]
    InvalidWindow {
        /// Requested window start.
        start: NaiveDate,
        /// Requested window end.
        end: NaiveDate,
    },

    /// Year/month pair does not name a calendar month.
    #[error("Invalid month: {year}-{month:02}")]
    InvalidMonth {
        /// Requested year.
        year: i32,
        /// Requested month (1-12).
        month: u32,
    },

    /// Display configuration could not be parsed.
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
}
