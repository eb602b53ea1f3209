//! Display configuration.
//!
//! Marker texts and status labels used by the classifier. Defaults are the
//! product's Chinese UI strings; any subset can be overridden from TOML:
//!
//! ```
//! use stay_calendar::config::DisplayConfig;
//!
//! let config = DisplayConfig::from_toml_str(r#"
//! [markers]
//! checkin = "IN"
//! checkout = "OUT"
//! "#).unwrap();
//! assert_eq!(config.markers.checkin, "IN");
//! assert_eq!(config.status_labels.completed, "已完成");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Marker substrings identifying checkin/checkout work in labels and titles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Markers {
    /// Checkin marker (default `入住`).
    pub checkin: String,
    /// Checkout marker (default `退房`).
    pub checkout: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            checkin: "入住".to_string(),
            checkout: "退房".to_string(),
        }
    }
}

impl Markers {
    /// Creates markers with custom texts.
    pub fn new(checkin: impl Into<String>, checkout: impl Into<String>) -> Self {
        Self {
            checkin: checkin.into(),
            checkout: checkout.into(),
        }
    }
}

/// User-facing labels for status buckets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusLabels {
    /// Label for `pending` (default `待分配`).
    pub unassigned: String,
    /// Label for `scheduled`/`in_progress` (default `进行中`).
    pub in_progress: String,
    /// Label for finished states (default `已完成`).
    pub completed: String,
    /// Label for `canceled` (default `已取消`).
    pub canceled: String,
    /// Shown for an empty status (default `-`).
    pub placeholder: String,
}

impl Default for StatusLabels {
    fn default() -> Self {
        Self {
            unassigned: "待分配".to_string(),
            in_progress: "进行中".to_string(),
            completed: "已完成".to_string(),
            canceled: "已取消".to_string(),
            placeholder: "-".to_string(),
        }
    }
}

/// Complete display configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Checkin/checkout markers.
    pub markers: Markers,
    /// Status bucket labels.
    pub status_labels: StatusLabels,
}

impl DisplayConfig {
    /// Parses a (possibly partial) TOML document; missing keys keep defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Replaces the markers.
    pub fn with_markers(mut self, markers: Markers) -> Self {
        self.markers = markers;
        self
    }

    /// Replaces the status labels.
    pub fn with_status_labels(mut self, labels: StatusLabels) -> Self {
        self.status_labels = labels;
        self
    }
}
