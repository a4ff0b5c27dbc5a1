//! Precision levels selectable between the configured bounds.

use dtp_model::{PickerError, PrecisionLevel, Result};

/// Levels the picker may display, from `min` through `max` inclusive.
///
/// # Errors
///
/// Returns [`PickerError::InvalidPrecisionRange`] when `min` is coarser than
/// `max`. The bounds are never swapped.
pub fn filter_precision_levels(
    min: PrecisionLevel,
    max: PrecisionLevel,
) -> Result<Vec<PrecisionLevel>> {
    if min > max {
        return Err(PickerError::InvalidPrecisionRange { min, max });
    }
    Ok(PrecisionLevel::ALL[min.rank()..=max.rank()].to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use PrecisionLevel::{Days, Decades, Months, Years};

    #[test]
    fn full_range_keeps_all_levels() {
        let levels = filter_precision_levels(Days, Decades).unwrap();
        assert_eq!(levels, PrecisionLevel::ALL.to_vec());
    }

    #[test]
    fn inner_slice() {
        let levels = filter_precision_levels(Months, Years).unwrap();
        assert_eq!(levels, vec![Months, Years]);
    }

    #[test]
    fn single_level() {
        let levels = filter_precision_levels(Years, Years).unwrap();
        assert_eq!(levels, vec![Years]);
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let err = filter_precision_levels(Decades, Days).unwrap_err();
        assert_eq!(
            err,
            PickerError::InvalidPrecisionRange {
                min: Decades,
                max: Days,
            }
        );
    }
}
