//! Type-safe enumerations for picker configuration and state.
//!
//! These enums replace the string labels a hosting widget passes around
//! (`"days"`, `"date+time"`, `"AM"`) with closed sets checked at the
//! deserialization boundary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Granularity of the selection grid.
///
/// Variants are declared finest to coarsest, so the derived ordering is the
/// canonical level order: `Days < Months < Years < Decades`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrecisionLevel {
    /// Day cells of a single month.
    Days,
    /// Month cells of a single year.
    Months,
    /// Year cells of a single decade.
    Years,
    /// Decade cells of a single century.
    Decades,
}

impl PrecisionLevel {
    /// All levels in canonical order, finest first.
    pub const ALL: [PrecisionLevel; 4] = [
        PrecisionLevel::Days,
        PrecisionLevel::Months,
        PrecisionLevel::Years,
        PrecisionLevel::Decades,
    ];

    /// Returns the label used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            PrecisionLevel::Days => "days",
            PrecisionLevel::Months => "months",
            PrecisionLevel::Years => "years",
            PrecisionLevel::Decades => "decades",
        }
    }

    /// Position of the level in [`PrecisionLevel::ALL`].
    pub fn rank(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for PrecisionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrecisionLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "days" => Ok(PrecisionLevel::Days),
            "months" => Ok(PrecisionLevel::Months),
            "years" => Ok(PrecisionLevel::Years),
            "decades" => Ok(PrecisionLevel::Decades),
            other => Err(format!("unknown precision level: {other}")),
        }
    }
}

/// Whether the picker edits dates only or dates with a time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PickerType {
    #[serde(rename = "date")]
    Date,
    #[default]
    #[serde(rename = "date+time", alias = "datetime")]
    DateTime,
}

impl PickerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PickerType::Date => "date",
            PickerType::DateTime => "date+time",
        }
    }
}

impl fmt::Display for PickerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Clock convention of the active locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClockFormat {
    /// AM/PM selector shown; hour values stay 0-23.
    TwelveHour,
    /// Hours 0-23, no meridiem selector.
    #[default]
    TwentyFourHour,
}

impl ClockFormat {
    pub fn is_twelve_hour(&self) -> bool {
        matches!(self, ClockFormat::TwelveHour)
    }
}

/// AM/PM bucket of an hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Meridiem {
    #[serde(rename = "AM")]
    Am,
    #[serde(rename = "PM")]
    Pm,
}

impl Meridiem {
    pub const ALL: [Meridiem; 2] = [Meridiem::Am, Meridiem::Pm];

    /// Bucket for an hour in 0-23.
    pub fn from_hour(hour: u32) -> Self {
        if hour < 12 {
            Meridiem::Am
        } else {
            Meridiem::Pm
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which end of the selectable window a date limit describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LimitBound {
    Min,
    Max,
}

impl fmt::Display for LimitBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LimitBound::Min => f.write_str("minDate"),
            LimitBound::Max => f.write_str("maxDate"),
        }
    }
}
