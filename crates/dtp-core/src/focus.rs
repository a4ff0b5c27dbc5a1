//! Choice of the slot that receives focus after normalization.

use chrono::NaiveDateTime;
use tracing::debug;

/// Resolved focus: the active slot and the value the calendar opens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusPoint {
    pub index: usize,
    /// Value the focus month derives from; `None` means "use now".
    pub anchor: Option<NaiveDateTime>,
}

/// Picks the active slot for the normalized `values`.
///
/// In single mode the earliest non-empty slot at or after `requested` wins,
/// so focus jumps to whichever date is actually present. When no such slot
/// exists the requested index stays, nudged onto the last slot if it points
/// past the end.
///
/// Range mode keeps the requested slot; its anchor falls back to the other
/// slot's value so an open range still shows the month of its known end.
pub fn adjust_focus(
    values: &[Option<NaiveDateTime>],
    requested: usize,
    range: bool,
) -> FocusPoint {
    let last = values.len().saturating_sub(1);
    let fallback = requested.min(last);
    let point = if range {
        let anchor = values
            .get(fallback)
            .copied()
            .flatten()
            .or_else(|| values.iter().flatten().next().copied());
        FocusPoint {
            index: fallback,
            anchor,
        }
    } else {
        let present = values
            .iter()
            .enumerate()
            .skip(requested)
            .find_map(|(index, value)| value.as_ref().map(|value| (index, *value)));
        match present {
            Some((index, value)) => FocusPoint {
                index,
                anchor: Some(value),
            },
            None => FocusPoint {
                index: fallback,
                anchor: None,
            },
        }
    };
    if point.index != requested {
        debug!(requested, adjusted = point.index, "moved picker focus");
    }
    point
}
