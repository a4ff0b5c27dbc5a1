use chrono::NaiveDateTime;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use dtp_model::{PrecisionLevel, SelectionSnapshot, TimeComponents};

/// Label/value pairs describing a snapshot, in display order.
pub fn summary_rows(snapshot: &SelectionSnapshot) -> Vec<(&'static str, String)> {
    let values = snapshot
        .values
        .iter()
        .map(|value| format_slot(value.as_ref(), ToString::to_string))
        .collect::<Vec<_>>()
        .join(" / ");
    let times = snapshot
        .time_components
        .iter()
        .map(|slot| format_slot(slot.as_ref(), format_time))
        .collect::<Vec<_>>()
        .join(" / ");
    let mode = if snapshot.is_range() {
        "range"
    } else {
        "single"
    };
    let seconds = if snapshot.shows_seconds() {
        "shown"
    } else {
        "hidden"
    };
    let clock = if snapshot.clock_format.is_twelve_hour() {
        "12-hour"
    } else {
        "24-hour"
    };
    vec![
        ("Mode", mode.to_string()),
        ("Values", values),
        ("Min date", format_bound(snapshot.effective_min_date)),
        ("Max date", format_bound(snapshot.effective_max_date)),
        ("Precision", join_levels(&snapshot.allowed_precision_levels)),
        ("Focused slot", snapshot.focused_index.to_string()),
        ("Source slot", snapshot.source_index.to_string()),
        ("Focus month", snapshot.focus_date.format("%Y-%m").to_string()),
        ("Time", times),
        ("Minutes", join_numbers(&snapshot.time_options.minutes)),
        ("Seconds", seconds.to_string()),
        ("Clock", clock.to_string()),
        ("Week start", snapshot.week_start.to_string()),
    ]
}

pub fn print_snapshot(snapshot: &SelectionSnapshot) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_table_style(&mut table);
    for (label, value) in summary_rows(snapshot) {
        table.add_row(vec![Cell::new(label).fg(Color::Cyan), Cell::new(value)]);
    }
    println!("{table}");
}

pub fn print_levels(levels: &[PrecisionLevel]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Level")]);
    apply_table_style(&mut table);
    for level in levels {
        table.add_row(vec![Cell::new(level.rank()), Cell::new(level.as_str())]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn format_slot<T>(slot: Option<&T>, format: impl Fn(&T) -> String) -> String {
    slot.map_or_else(|| "-".to_string(), format)
}

fn format_time(time: &TimeComponents) -> String {
    match time.meridiem {
        Some(meridiem) => format!("{}:{}:{} {meridiem}", time.hour, time.minute, time.second),
        None => format!("{}:{}:{}", time.hour, time.minute, time.second),
    }
}

fn format_bound(value: NaiveDateTime) -> String {
    value.format("%Y-%m-%d %H:%M:%S").to_string()
}

fn join_levels(levels: &[PrecisionLevel]) -> String {
    levels
        .iter()
        .map(PrecisionLevel::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_numbers(numbers: &[u32]) -> String {
    numbers
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
