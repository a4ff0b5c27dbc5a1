//! Orchestration of one configuration change into one snapshot.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use dtp_model::{PickerConfig, Result, SelectionSnapshot};
use tracing::{debug, debug_span};

use crate::clock::{Clock, SystemClock};
use crate::focus::adjust_focus;
use crate::limits::{DateLimits, resolve_limits};
use crate::locale::{Locale, LocaleSettings};
use crate::meridiem::{format_time_components, resolve_clock_format};
use crate::normalize::normalize_values;
use crate::precision::filter_precision_levels;
use crate::time::{derive_time_components, time_options};

/// Rebuilds picker state from configuration.
///
/// The synchronizer keeps no state between calls; it only holds the clock and
/// locale collaborators. "Now" is read once per call, so every substitution in
/// a snapshot agrees on the same instant.
#[derive(Clone)]
pub struct Synchronizer {
    clock: Arc<dyn Clock>,
    locale: Arc<dyn Locale>,
}

impl Synchronizer {
    pub fn new(clock: impl Clock + 'static, locale: impl Locale + 'static) -> Self {
        Self {
            clock: Arc::new(clock),
            locale: Arc::new(locale),
        }
    }

    /// Synchronizer on the system clock with default locale settings.
    pub fn system() -> Self {
        Self::new(SystemClock, LocaleSettings::default())
    }

    /// Derives a complete snapshot from `config`.
    ///
    /// # Errors
    ///
    /// Fails on an inverted precision range, an unparseable date limit, or a
    /// `maxDate` before `minDate`. No snapshot is produced in that case.
    pub fn synchronize(&self, config: &PickerConfig) -> Result<SelectionSnapshot> {
        let span = debug_span!(
            "synchronize",
            range = config.range,
            picker_type = %config.picker_type,
            rounding = config.rounding
        );
        let _guard = span.enter();
        let now = self.clock.now();

        let slots = normalize_values(&config.value, config.range);
        let allowed_precision_levels =
            filter_precision_levels(config.min_precision, config.max_precision)?;
        let limits = resolve_limits(&config.min_date, &config.max_date, config.picker_type, now)?;

        let focus = adjust_focus(&slots, config.focused_date_index, config.range);
        let times = derive_time_components(&slots, config.rounding, config.range, focus.index, now);

        let clock_format = resolve_clock_format(self.locale.as_ref());
        let mut time_components = format_time_components(&times, clock_format);

        let (values, focused_index) = if config.range {
            (slots, focus.index)
        } else {
            // A single picker publishes one slot: the one focus settled on.
            let value = slots.get(focus.index).copied().flatten();
            time_components = vec![time_components.into_iter().nth(focus.index).flatten()];
            (vec![value], 0)
        };

        let focus_date = month_start(&limits, focus.anchor.unwrap_or(now));
        debug!(
            focused_index,
            source_index = focus.index,
            %focus_date,
            slots = values.len(),
            "synchronized picker state"
        );

        Ok(SelectionSnapshot {
            values,
            effective_min_date: limits.min,
            effective_max_date: limits.max,
            allowed_precision_levels,
            time_components,
            focused_index,
            source_index: focus.index,
            focus_date,
            time_options: time_options(config.rounding, clock_format),
            clock_format,
            week_start: self.locale.week_start(),
        })
    }
}

impl Default for Synchronizer {
    fn default() -> Self {
        Self::system()
    }
}

impl std::fmt::Debug for Synchronizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Synchronizer")
            .field("time_format", &self.locale.time_format())
            .field("week_start", &self.locale.week_start())
            .finish_non_exhaustive()
    }
}

fn month_start(limits: &DateLimits, anchor: chrono::NaiveDateTime) -> NaiveDate {
    let date = limits.clamp(anchor).date();
    date.with_day(1).unwrap_or(date)
}
