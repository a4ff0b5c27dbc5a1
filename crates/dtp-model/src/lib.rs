pub mod config;
pub mod enums;
pub mod error;
pub mod snapshot;

pub use config::{
    CURRENT_MOMENT_SENTINEL, DEFAULT_ROUNDING, DateInput, DateLimit, PickerConfig, PickerValue,
};
pub use enums::{ClockFormat, LimitBound, Meridiem, PickerType, PrecisionLevel};
pub use error::{PickerError, Result};
pub use snapshot::{SelectionSnapshot, TimeComponents, TimeOptions};
