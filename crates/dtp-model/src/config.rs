//! Picker configuration as delivered by the hosting widget.
//!
//! Everything here is loosely typed on purpose: dates may still be raw text
//! and are only resolved to `NaiveDateTime` by the synchronizer.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::enums::{PickerType, PrecisionLevel};

/// Text accepted for [`DateLimit::CurrentMoment`] in configuration files.
pub const CURRENT_MOMENT_SENTINEL: &str = "today";

/// Default rounding interval in minutes.
pub const DEFAULT_ROUNDING: u32 = 5;

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A date/time point as supplied by the host, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateInput {
    DateTime(NaiveDateTime),
    Text(String),
}

impl DateInput {
    /// Resolves the input to a date/time, or `None` when the text is malformed.
    ///
    /// Date-only text resolves to midnight of that day.
    pub fn parse(&self) -> Option<NaiveDateTime> {
        match self {
            DateInput::DateTime(value) => Some(*value),
            DateInput::Text(text) => parse_datetime_text(text),
        }
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(value: NaiveDateTime) -> Self {
        DateInput::DateTime(value)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(value: NaiveDate) -> Self {
        DateInput::DateTime(value.and_time(NaiveTime::MIN))
    }
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        DateInput::Text(value.to_string())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        DateInput::Text(value)
    }
}

impl fmt::Display for DateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateInput::DateTime(value) => write!(f, "{value}"),
            DateInput::Text(text) => f.write_str(text),
        }
    }
}

fn parse_datetime_text(text: &str) -> Option<NaiveDateTime> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}

/// One end of the selectable window.
///
/// In configuration files a missing or `null` limit is [`DateLimit::Unbounded`]
/// and the string `"today"` is [`DateLimit::CurrentMoment`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<DateInput>", into = "Option<DateInput>")]
pub enum DateLimit {
    /// No limit; the global representable bound applies.
    #[default]
    Unbounded,
    /// The instant of synchronization.
    CurrentMoment,
    /// A fixed date/time, clamped into the representable range.
    Explicit(DateInput),
}

impl DateLimit {
    pub fn explicit(value: impl Into<DateInput>) -> Self {
        DateLimit::Explicit(value.into())
    }
}

impl From<Option<DateInput>> for DateLimit {
    fn from(value: Option<DateInput>) -> Self {
        match value {
            None => DateLimit::Unbounded,
            Some(DateInput::Text(text)) if text.trim() == CURRENT_MOMENT_SENTINEL => {
                DateLimit::CurrentMoment
            }
            Some(input) => DateLimit::Explicit(input),
        }
    }
}

impl From<DateLimit> for Option<DateInput> {
    fn from(value: DateLimit) -> Self {
        match value {
            DateLimit::Unbounded => None,
            DateLimit::CurrentMoment => Some(DateInput::Text(CURRENT_MOMENT_SENTINEL.to_string())),
            DateLimit::Explicit(input) => Some(input),
        }
    }
}

/// The bound value: one nullable point, or a pair forming a range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PickerValue {
    Range([Option<DateInput>; 2]),
    Single(Option<DateInput>),
}

impl Default for PickerValue {
    fn default() -> Self {
        PickerValue::Single(None)
    }
}

/// External picker configuration, immutable for one synchronization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PickerConfig {
    pub value: PickerValue,
    /// Select a pair of points instead of a single one.
    pub range: bool,
    pub min_date: DateLimit,
    pub max_date: DateLimit,
    pub min_precision: PrecisionLevel,
    pub max_precision: PrecisionLevel,
    /// Minute granularity of the time editor.
    ///
    /// `0` shows seconds, `1` hides seconds without rounding, larger values
    /// restrict minutes to multiples of the interval.
    pub rounding: u32,
    #[serde(rename = "type")]
    pub picker_type: PickerType,
    /// Slot that is active when not in range mode.
    pub focused_date_index: usize,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            value: PickerValue::default(),
            range: false,
            min_date: DateLimit::Unbounded,
            max_date: DateLimit::Unbounded,
            min_precision: PrecisionLevel::Days,
            max_precision: PrecisionLevel::Decades,
            rounding: DEFAULT_ROUNDING,
            picker_type: PickerType::DateTime,
            focused_date_index: 0,
        }
    }
}

impl PickerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a single value and switch to single mode.
    #[must_use]
    pub fn with_value(mut self, value: Option<DateInput>) -> Self {
        self.value = PickerValue::Single(value);
        self.range = false;
        self
    }

    /// Bind a pair of values and switch to range mode.
    #[must_use]
    pub fn with_range_value(mut self, start: Option<DateInput>, end: Option<DateInput>) -> Self {
        self.value = PickerValue::Range([start, end]);
        self.range = true;
        self
    }

    #[must_use]
    pub fn with_range(mut self, range: bool) -> Self {
        self.range = range;
        self
    }

    #[must_use]
    pub fn with_min_date(mut self, limit: DateLimit) -> Self {
        self.min_date = limit;
        self
    }

    #[must_use]
    pub fn with_max_date(mut self, limit: DateLimit) -> Self {
        self.max_date = limit;
        self
    }

    #[must_use]
    pub fn with_precision(mut self, min: PrecisionLevel, max: PrecisionLevel) -> Self {
        self.min_precision = min;
        self.max_precision = max;
        self
    }

    #[must_use]
    pub fn with_rounding(mut self, rounding: u32) -> Self {
        self.rounding = rounding;
        self
    }

    #[must_use]
    pub fn with_type(mut self, picker_type: PickerType) -> Self {
        self.picker_type = picker_type;
        self
    }

    #[must_use]
    pub fn with_focused_index(mut self, index: usize) -> Self {
        self.focused_date_index = index;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn parses_accepted_text_formats() {
        let expected = at(2024, 3, 9, 14, 30, 15);
        for text in ["2024-03-09 14:30:15", "2024-03-09T14:30:15"] {
            assert_eq!(DateInput::from(text).parse(), Some(expected), "{text}");
        }
        assert_eq!(
            DateInput::from("2024-03-09T14:30").parse(),
            Some(at(2024, 3, 9, 14, 30, 0))
        );
        assert_eq!(
            DateInput::from(" 2024-03-09 ").parse(),
            Some(at(2024, 3, 9, 0, 0, 0))
        );
    }

    #[test]
    fn malformed_text_does_not_parse() {
        assert_eq!(DateInput::from("").parse(), None);
        assert_eq!(DateInput::from("yesterday").parse(), None);
        assert_eq!(DateInput::from("2024-02-30").parse(), None);
        assert_eq!(DateInput::from("2024-03-09 25:00:00").parse(), None);
    }

    #[test]
    fn limit_sentinel_maps_to_current_moment() {
        assert_eq!(
            DateLimit::from(Some(DateInput::from("today"))),
            DateLimit::CurrentMoment
        );
        assert_eq!(DateLimit::from(None), DateLimit::Unbounded);
        assert_eq!(
            DateLimit::from(Some(DateInput::from("2024-01-01"))),
            DateLimit::Explicit(DateInput::from("2024-01-01"))
        );
    }

    #[test]
    fn builders_set_range_mode() {
        let end = Some(DateInput::from("2024-01-01"));
        let config = PickerConfig::new().with_range_value(None, end);
        assert!(config.range);
        let config = config.with_value(None);
        assert!(!config.range);
        assert_eq!(config.value, PickerValue::Single(None));
    }
}
