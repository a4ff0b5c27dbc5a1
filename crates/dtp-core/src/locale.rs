//! Locale settings consumed read-only by the synchronizer.

use chrono::Weekday;

/// Default time pattern (24-hour clock).
pub const DEFAULT_TIME_FORMAT: &str = "HH:mm:ss";

/// Locale collaborator.
///
/// `time_format` uses Unicode/Luxon-style tokens (`HH`, `hh`, `mm`, `a`, ...);
/// literal text is wrapped in single quotes.
pub trait Locale: Send + Sync {
    fn time_format(&self) -> &str;
    fn week_start(&self) -> Weekday;
}

/// Static locale settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSettings {
    pub time_format: String,
    pub week_start: Weekday,
}

impl Default for LocaleSettings {
    fn default() -> Self {
        Self {
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            week_start: Weekday::Mon,
        }
    }
}

impl LocaleSettings {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_time_format(mut self, pattern: impl Into<String>) -> Self {
        self.time_format = pattern.into();
        self
    }

    #[must_use]
    pub fn with_week_start(mut self, day: Weekday) -> Self {
        self.week_start = day;
        self
    }
}

impl Locale for LocaleSettings {
    fn time_format(&self) -> &str {
        &self.time_format
    }

    fn week_start(&self) -> Weekday {
        self.week_start
    }
}
