//! Integration tests for the CLI commands.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Weekday;
use dtp_cli::commands::{SnapshotRequest, load_config, run_levels, run_snapshot};
use dtp_cli::summary::summary_rows;
use dtp_model::PrecisionLevel;

fn unique_temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "dtp-{}-{}-{}",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_config(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("picker.json");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn snapshot_summary_is_stable() {
    let dir = unique_temp_dir("summary");
    let config_path = write_config(
        &dir,
        r#"{
            "value": [null, "2026-11-02 18:30:00"],
            "range": true,
            "minDate": "today",
            "maxDate": "2027-01-01",
            "maxPrecision": "years",
            "rounding": 15,
            "type": "date"
        }"#,
    );
    let request = SnapshotRequest {
        config_path,
        now: Some("2026-10-16 09:42:07".to_string()),
        ..SnapshotRequest::default()
    };

    let snapshot = run_snapshot(&request).unwrap();

    insta::assert_debug_snapshot!(summary_rows(&snapshot), @r#"
    [
        (
            "Mode",
            "range",
        ),
        (
            "Values",
            "- / 2026-11-02 18:30:00",
        ),
        (
            "Min date",
            "2026-10-16 00:00:00",
        ),
        (
            "Max date",
            "2027-01-01 23:59:59",
        ),
        (
            "Precision",
            "days, months, years",
        ),
        (
            "Focused slot",
            "0",
        ),
        (
            "Source slot",
            "0",
        ),
        (
            "Focus month",
            "2026-11",
        ),
        (
            "Time",
            "9:30:7 / 18:30:0",
        ),
        (
            "Minutes",
            "0, 15, 30, 45",
        ),
        (
            "Seconds",
            "hidden",
        ),
        (
            "Clock",
            "24-hour",
        ),
        (
            "Week start",
            "Mon",
        ),
    ]
    "#);
    fs::remove_dir_all(dir).ok();
}

#[test]
fn locale_flags_reach_the_snapshot() {
    let dir = unique_temp_dir("locale");
    let config_path = write_config(&dir, r#"{"value": "2026-10-16 21:05:00", "rounding": 0}"#);
    let request = SnapshotRequest {
        config_path,
        now: Some("2026-10-16 09:42:07".to_string()),
        time_format: Some("hh:mm:ss a".to_string()),
        week_start: Some(Weekday::Sun),
    };

    let snapshot = run_snapshot(&request).unwrap();
    let rows = summary_rows(&snapshot);

    assert!(rows.contains(&("Time", "21:5:0 PM".to_string())));
    assert!(rows.contains(&("Clock", "12-hour".to_string())));
    assert!(rows.contains(&("Seconds", "shown".to_string())));
    assert!(rows.contains(&("Week start", "Sun".to_string())));
    fs::remove_dir_all(dir).ok();
}

#[test]
fn inverted_limits_fail_the_command() {
    let dir = unique_temp_dir("inverted");
    let config_path = write_config(
        &dir,
        r#"{"minDate": "2026-05-01", "maxDate": "2026-04-01"}"#,
    );
    let request = SnapshotRequest {
        config_path,
        now: Some("2026-10-16".to_string()),
        ..SnapshotRequest::default()
    };

    let error = run_snapshot(&request).unwrap_err();
    let message = format!("{error:#}");
    assert!(message.starts_with("synchronize picker state"), "{message}");
    assert!(message.contains("comes before minDate"), "{message}");
    fs::remove_dir_all(dir).ok();
}

#[test]
fn invalid_now_is_reported() {
    let dir = unique_temp_dir("now");
    let config_path = write_config(&dir, "{}");
    let request = SnapshotRequest {
        config_path,
        now: Some("soon".to_string()),
        ..SnapshotRequest::default()
    };
    let error = run_snapshot(&request).unwrap_err();
    assert_eq!(error.to_string(), "invalid --now value: soon");
    fs::remove_dir_all(dir).ok();
}

#[test]
fn malformed_config_file_is_an_error() {
    let dir = unique_temp_dir("malformed");
    let config_path = write_config(&dir, r#"{"minPrecision": "weeks"}"#);
    let error = load_config(&config_path).unwrap_err();
    let message = error.to_string();
    assert!(message.starts_with("parse picker configuration"));
    fs::remove_dir_all(dir).ok();
}

#[test]
fn levels_command_filters() {
    use PrecisionLevel::{Days, Months, Years};

    assert_eq!(run_levels(Days, Months).unwrap(), vec![Days, Months]);
    assert!(run_levels(Years, Days).is_err());
}
