//! Selection-state synchronization for date/time pickers.
//!
//! [`Synchronizer::synchronize`] turns a [`PickerConfig`](dtp_model::PickerConfig)
//! into a [`SelectionSnapshot`](dtp_model::SelectionSnapshot). The individual
//! stages are exposed as free functions so hosts and tests can run them alone.

pub mod clock;
pub mod focus;
pub mod limits;
pub mod locale;
pub mod meridiem;
pub mod normalize;
pub mod precision;
pub mod sync;
pub mod time;

pub use clock::{Clock, FixedClock, SystemClock};
pub use focus::{FocusPoint, adjust_focus};
pub use limits::{DateLimits, MAX_VALID_DATE, MIN_VALID_DATE, resolve_limits};
pub use locale::{Locale, LocaleSettings};
pub use meridiem::{format_time_components, resolve_clock_format};
pub use normalize::normalize_values;
pub use precision::filter_precision_levels;
pub use sync::Synchronizer;
pub use time::{TimeOfDay, derive_time_components, time_options};
