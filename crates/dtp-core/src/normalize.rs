//! Boundary where loosely typed inputs become `Option<NaiveDateTime>`.
//!
//! Downstream stages never re-check validity: a slot is either a valid
//! date/time inside the representable range or `None`.

use chrono::NaiveDateTime;
use dtp_model::{DateInput, PickerValue};
use tracing::warn;

use crate::limits::DateLimits;

/// Converts the bound value into its slot sequence.
///
/// Range mode always yields two slots (a single input fills the first one).
/// Single mode keeps the shape of the input, so a pair bound to a single
/// picker stays a pair and the focus stage picks the slot to edit.
pub fn normalize_values(value: &PickerValue, range: bool) -> Vec<Option<NaiveDateTime>> {
    let mut slots: Vec<Option<NaiveDateTime>> = match value {
        PickerValue::Single(input) => vec![normalize_input(input.as_ref())],
        PickerValue::Range(pair) => pair
            .iter()
            .map(|input| normalize_input(input.as_ref()))
            .collect(),
    };
    if range {
        slots.resize(2, None);
    }
    slots
}

fn normalize_input(input: Option<&DateInput>) -> Option<NaiveDateTime> {
    let input = input?;
    match input.parse() {
        Some(value) if DateLimits::REPRESENTABLE.contains(value) => Some(value),
        Some(_) => {
            warn!(value = %input, "discarding picker value outside the representable range");
            None
        }
        None => {
            warn!(value = %input, "discarding malformed picker value");
            None
        }
    }
}
