//! 12-hour vs 24-hour presentation of the time editor.

use dtp_model::{ClockFormat, Meridiem, TimeComponents};

use crate::locale::Locale;
use crate::time::TimeOfDay;

/// Clock convention implied by the locale's time pattern.
///
/// The pattern uses a 12-hour clock when it contains the meridiem token `a`
/// outside of a quoted literal.
pub fn resolve_clock_format(locale: &dyn Locale) -> ClockFormat {
    if has_meridiem_token(locale.time_format()) {
        ClockFormat::TwelveHour
    } else {
        ClockFormat::TwentyFourHour
    }
}

fn has_meridiem_token(pattern: &str) -> bool {
    let mut quoted = false;
    for ch in pattern.chars() {
        match ch {
            '\'' => quoted = !quoted,
            'a' if !quoted => return true,
            _ => {}
        }
    }
    false
}

/// Formats numeric time fields as display strings.
///
/// On a 12-hour clock each populated slot also carries its AM/PM bucket;
/// the hour string itself stays in 0-23.
pub fn format_time_components(
    times: &[Option<TimeOfDay>],
    clock_format: ClockFormat,
) -> Vec<Option<TimeComponents>> {
    times
        .iter()
        .map(|time| {
            time.map(|time| TimeComponents {
                hour: time.hour.to_string(),
                minute: time.minute.to_string(),
                second: time.second.to_string(),
                meridiem: clock_format
                    .is_twelve_hour()
                    .then(|| Meridiem::from_hour(time.hour)),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::LocaleSettings;

    fn tod(hour: u32, minute: u32, second: u32) -> TimeOfDay {
        TimeOfDay {
            hour,
            minute,
            second,
        }
    }

    #[test]
    fn twenty_four_hour_patterns() {
        for pattern in ["HH:mm:ss", "H:mm", "HH'h'mm"] {
            let locale = LocaleSettings::new().with_time_format(pattern);
            assert_eq!(
                resolve_clock_format(&locale),
                ClockFormat::TwentyFourHour,
                "{pattern}"
            );
        }
    }

    #[test]
    fn twelve_hour_patterns() {
        for pattern in ["hh:mm:ss a", "h:mm a", "a 'at' h:mm"] {
            let locale = LocaleSettings::new().with_time_format(pattern);
            assert_eq!(
                resolve_clock_format(&locale),
                ClockFormat::TwelveHour,
                "{pattern}"
            );
        }
    }

    #[test]
    fn quoted_a_is_literal() {
        let locale = LocaleSettings::new().with_time_format("HH:mm 'a.m.'");
        assert_eq!(resolve_clock_format(&locale), ClockFormat::TwentyFourHour);
    }

    #[test]
    fn formats_without_padding() {
        let times = [Some(tod(7, 5, 0)), None];
        let formatted = format_time_components(&times, ClockFormat::TwentyFourHour);
        assert_eq!(
            formatted,
            vec![
                Some(TimeComponents {
                    hour: "7".to_string(),
                    minute: "5".to_string(),
                    second: "0".to_string(),
                    meridiem: None,
                }),
                None,
            ]
        );
    }

    #[test]
    fn twelve_hour_appends_meridiem() {
        let times = [Some(tod(0, 0, 0)), Some(tod(13, 45, 0))];
        let formatted = format_time_components(&times, ClockFormat::TwelveHour);
        let meridiems: Vec<_> = formatted
            .iter()
            .map(|slot| slot.as_ref().and_then(|c| c.meridiem))
            .collect();
        assert_eq!(meridiems, vec![Some(Meridiem::Am), Some(Meridiem::Pm)]);
        assert_eq!(formatted[1].as_ref().unwrap().hour, "13");
    }
}
