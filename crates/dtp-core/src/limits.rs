//! Effective min/max bounds of the selectable window.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use dtp_model::{DateLimit, LimitBound, PickerError, PickerType, Result};
use tracing::debug;

/// Earliest date/time the picker can represent.
pub const MIN_VALID_DATE: NaiveDateTime = match NaiveDate::from_ymd_opt(1000, 1, 1) {
    Some(date) => date.and_time(NaiveTime::MIN),
    None => panic!("invalid MIN_VALID_DATE"),
};

/// Latest date/time the picker can represent.
pub const MAX_VALID_DATE: NaiveDateTime = match NaiveDate::from_ymd_opt(9999, 12, 31) {
    Some(date) => date.and_time(END_OF_DAY),
    None => panic!("invalid MAX_VALID_DATE"),
};

const END_OF_DAY: NaiveTime = match NaiveTime::from_hms_milli_opt(23, 59, 59, 999) {
    Some(time) => time,
    None => panic!("invalid END_OF_DAY"),
};

/// Resolved, inclusive bounds. `min <= max` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateLimits {
    pub min: NaiveDateTime,
    pub max: NaiveDateTime,
}

impl DateLimits {
    /// The full range the picker can represent.
    pub const REPRESENTABLE: Self = Self {
        min: MIN_VALID_DATE,
        max: MAX_VALID_DATE,
    };

    pub fn contains(&self, value: NaiveDateTime) -> bool {
        self.min <= value && value <= self.max
    }

    pub fn clamp(&self, value: NaiveDateTime) -> NaiveDateTime {
        value.clamp(self.min, self.max)
    }
}

/// Resolves both limits against `now` and the global representable range.
///
/// Date-only pickers compare whole days, so the bounds are widened to the
/// start and end of their respective days.
///
/// # Errors
///
/// Returns [`PickerError::InvalidDateLimit`] for an explicit limit that does
/// not parse, and [`PickerError::InvalidDateLimits`] when the resolved
/// maximum comes before the resolved minimum.
pub fn resolve_limits(
    min_date: &DateLimit,
    max_date: &DateLimit,
    picker_type: PickerType,
    now: NaiveDateTime,
) -> Result<DateLimits> {
    let mut min = resolve_bound(min_date, LimitBound::Min, now)?;
    let mut max = resolve_bound(max_date, LimitBound::Max, now)?;
    if picker_type == PickerType::Date {
        min = start_of_day(min);
        max = end_of_day(max);
    }
    if max < min {
        return Err(PickerError::InvalidDateLimits { min, max });
    }
    debug!(%min, %max, "resolved date limits");
    Ok(DateLimits { min, max })
}

fn resolve_bound(
    limit: &DateLimit,
    bound: LimitBound,
    now: NaiveDateTime,
) -> Result<NaiveDateTime> {
    match limit {
        DateLimit::Unbounded => Ok(match bound {
            LimitBound::Min => MIN_VALID_DATE,
            LimitBound::Max => MAX_VALID_DATE,
        }),
        DateLimit::CurrentMoment => Ok(now),
        DateLimit::Explicit(input) => input
            .parse()
            .map(|value| DateLimits::REPRESENTABLE.clamp(value))
            .ok_or_else(|| PickerError::InvalidDateLimit {
                bound,
                value: input.to_string(),
            }),
    }
}

pub(crate) fn start_of_day(value: NaiveDateTime) -> NaiveDateTime {
    value.date().and_time(NaiveTime::MIN)
}

pub(crate) fn end_of_day(value: NaiveDateTime) -> NaiveDateTime {
    value.date().and_time(END_OF_DAY)
}
