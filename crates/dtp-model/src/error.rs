use chrono::NaiveDateTime;
use thiserror::Error;

use crate::enums::{LimitBound, PrecisionLevel};

/// Configuration errors raised while synchronizing picker state.
///
/// All variants are caller errors: the configuration must be corrected before
/// another synchronization is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickerError {
    #[error("maxDate ({max}) comes before minDate ({min})")]
    InvalidDateLimits {
        min: NaiveDateTime,
        max: NaiveDateTime,
    },

    #[error("{bound} is not a valid date/time: {value}")]
    InvalidDateLimit { bound: LimitBound, value: String },

    #[error("minPrecision ({min}) is coarser than maxPrecision ({max})")]
    InvalidPrecisionRange {
        min: PrecisionLevel,
        max: PrecisionLevel,
    },
}

pub type Result<T> = std::result::Result<T, PickerError>;
