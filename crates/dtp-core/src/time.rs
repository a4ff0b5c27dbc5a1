//! Hour/minute/second fields of the time editor.

use chrono::{NaiveDateTime, Timelike};
use dtp_model::{ClockFormat, Meridiem, TimeOptions};

/// Numeric time of day of one slot, before display formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl TimeOfDay {
    /// Fields of a known value, taken as is.
    pub fn of(value: NaiveDateTime) -> Self {
        Self {
            hour: value.hour(),
            minute: value.minute(),
            second: value.second(),
        }
    }

    /// Default for an empty slot: the current time, with the minute rounded
    /// down onto the rounding grid so it is one of the offered choices.
    pub fn defaulted(now: NaiveDateTime, rounding: u32) -> Self {
        let minute = match rounding {
            0 | 1 => now.minute(),
            step => now.minute() - now.minute() % step,
        };
        Self {
            hour: now.hour(),
            minute,
            second: now.second(),
        }
    }
}

/// Time of day for each slot that has a visible editor.
///
/// A slot is either fully known (all fields from its value) or fully empty
/// (all fields from `now`); fields are never mixed between the two. Range
/// mode fills every slot; single mode fills only `focused_index` and leaves
/// the rest `None`.
pub fn derive_time_components(
    values: &[Option<NaiveDateTime>],
    rounding: u32,
    range: bool,
    focused_index: usize,
    now: NaiveDateTime,
) -> Vec<Option<TimeOfDay>> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            (range || index == focused_index).then(|| match value {
                Some(value) => TimeOfDay::of(*value),
                None => TimeOfDay::defaulted(now, rounding),
            })
        })
        .collect()
}

pub fn available_hours() -> Vec<u32> {
    (0..24).collect()
}

/// Minutes offered for a rounding interval (multiples of it when non-zero).
pub fn available_minutes(rounding: u32) -> Vec<u32> {
    (0..60)
        .filter(|minute| rounding == 0 || minute % rounding == 0)
        .collect()
}

/// Seconds are only offered when rounding is `0`.
pub fn available_seconds(rounding: u32) -> Vec<u32> {
    if rounding == 0 {
        (0..60).collect()
    } else {
        Vec::new()
    }
}

pub fn time_options(rounding: u32, clock_format: ClockFormat) -> TimeOptions {
    TimeOptions {
        hours: available_hours(),
        minutes: available_minutes(rounding),
        seconds: available_seconds(rounding),
        meridiems: if clock_format.is_twelve_hour() {
            Meridiem::ALL.to_vec()
        } else {
            Vec::new()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn tod(hour: u32, minute: u32, second: u32) -> TimeOfDay {
        TimeOfDay {
            hour,
            minute,
            second,
        }
    }

    #[test]
    fn rounding_five_offers_multiples_of_five() {
        assert_eq!(
            available_minutes(5),
            (0..60).step_by(5).collect::<Vec<u32>>()
        );
        assert!(available_seconds(5).is_empty());
    }

    #[test]
    fn rounding_zero_shows_seconds() {
        assert_eq!(available_minutes(0).len(), 60);
        assert_eq!(available_seconds(0), (0..60).collect::<Vec<u32>>());
    }

    #[test]
    fn rounding_one_hides_seconds_without_filtering() {
        assert_eq!(available_minutes(1).len(), 60);
        assert!(available_seconds(1).is_empty());
    }

    #[test]
    fn hours_are_always_full_day() {
        assert_eq!(available_hours(), (0..24).collect::<Vec<u32>>());
    }

    #[test]
    fn defaulted_minute_rounds_down() {
        let now = at(14, 38, 21);
        assert_eq!(TimeOfDay::defaulted(now, 5), tod(14, 35, 21));
        assert_eq!(TimeOfDay::defaulted(now, 1).minute, 38);
        assert_eq!(TimeOfDay::defaulted(now, 0).minute, 38);
    }

    #[test]
    fn known_values_are_not_rounded() {
        let components = derive_time_components(&[Some(at(7, 3, 9))], 15, false, 0, at(12, 0, 0));
        assert_eq!(components, vec![Some(tod(7, 3, 9))]);
    }

    #[test]
    fn single_mode_fills_only_the_focused_slot() {
        let now = at(9, 12, 0);
        let components = derive_time_components(&[Some(at(1, 2, 3)), None], 5, false, 1, now);
        assert_eq!(components, vec![None, Some(tod(9, 10, 0))]);
    }

    #[test]
    fn range_mode_fills_every_slot() {
        let now = at(9, 12, 0);
        let components = derive_time_components(&[None, Some(at(18, 30, 0))], 5, true, 0, now);
        assert_eq!(components, vec![Some(tod(9, 10, 0)), Some(tod(18, 30, 0))]);
    }
}
