//! Derived picker state consumed by the grid and title collaborators.

use chrono::{NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::enums::{ClockFormat, Meridiem, PrecisionLevel};

/// Time-of-day fields of one slot, formatted for display.
///
/// Fields hold plain decimal strings (`"7"`, never `"07"`). `meridiem` is
/// only set when the locale uses a 12-hour clock; `hour` stays in 0-23.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeComponents {
    pub hour: String,
    pub minute: String,
    pub second: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meridiem: Option<Meridiem>,
}

/// Choices offered by the time editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOptions {
    pub hours: Vec<u32>,
    pub minutes: Vec<u32>,
    /// Empty when seconds are hidden.
    pub seconds: Vec<u32>,
    /// Empty on a 24-hour clock.
    pub meridiems: Vec<Meridiem>,
}

/// Complete, internally consistent picker state for one configuration.
///
/// A snapshot is rebuilt from scratch on every configuration change and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionSnapshot {
    /// One slot in single mode, two in range mode. Invalid inputs are `None`.
    pub values: Vec<Option<NaiveDateTime>>,
    pub effective_min_date: NaiveDateTime,
    pub effective_max_date: NaiveDateTime,
    pub allowed_precision_levels: Vec<PrecisionLevel>,
    /// Parallel to `values`.
    pub time_components: Vec<Option<TimeComponents>>,
    /// Index into `values` and `time_components` that receives focus.
    pub focused_index: usize,
    /// Slot of the bound value the focused entry was read from. Equals
    /// `focused_index` except when a pair is bound to a single picker, where
    /// `values` holds only the slot chosen by focus adjustment.
    pub source_index: usize,
    /// First day of the month the calendar opens on.
    pub focus_date: NaiveDate,
    pub time_options: TimeOptions,
    pub clock_format: ClockFormat,
    pub week_start: Weekday,
}

impl SelectionSnapshot {
    /// Returns true when the picker selects a pair of points.
    pub fn is_range(&self) -> bool {
        self.values.len() == 2
    }

    /// Time components of the slot the editor currently shows.
    pub fn focused_time(&self) -> Option<&TimeComponents> {
        self.time_components
            .get(self.focused_index)
            .and_then(Option::as_ref)
    }

    /// Whether seconds are offered by the time editor.
    pub fn shows_seconds(&self) -> bool {
        !self.time_options.seconds.is_empty()
    }
}
