//! CLI argument definitions for the picker-state inspector.

use std::path::PathBuf;

use chrono::Weekday;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use dtp_model::PrecisionLevel;

#[derive(Parser)]
#[command(
    name = "dtp",
    version,
    about = "Inspect date/time picker selection state",
    long_about = "Evaluate a date/time picker configuration and print the derived \
                  selection state.\n\n\
                  Configurations are JSON files with the fields value, range, minDate,\n\
                  maxDate, minPrecision, maxPrecision, rounding, type and focusedDateIndex."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with timestamps (pretty and compact formats).
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Synchronize a picker configuration and print the resulting snapshot.
    Snapshot(SnapshotArgs),

    /// Print the precision levels allowed between two bounds.
    Levels(LevelsArgs),
}

#[derive(Parser)]
pub struct SnapshotArgs {
    /// Path to the picker configuration JSON file.
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Freeze "now" at this date/time (e.g. "2026-10-16 09:42:07").
    #[arg(long = "now", value_name = "DATETIME")]
    pub now: Option<String>,

    /// Locale time pattern; a pattern containing `a` selects a 12-hour clock.
    #[arg(long = "time-format", value_name = "PATTERN")]
    pub time_format: Option<String>,

    /// First day of the week (mon, tue, ..., sun).
    #[arg(long = "week-start", value_name = "DAY")]
    pub week_start: Option<Weekday>,

    /// Print the snapshot as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct LevelsArgs {
    /// Finest level to allow.
    #[arg(long = "min", value_enum, default_value = "days")]
    pub min: PrecisionArg,

    /// Coarsest level to allow.
    #[arg(long = "max", value_enum, default_value = "decades")]
    pub max: PrecisionArg,
}

/// CLI precision level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum PrecisionArg {
    Days,
    Months,
    Years,
    Decades,
}

impl From<PrecisionArg> for PrecisionLevel {
    fn from(value: PrecisionArg) -> Self {
        match value {
            PrecisionArg::Days => PrecisionLevel::Days,
            PrecisionArg::Months => PrecisionLevel::Months,
            PrecisionArg::Years => PrecisionLevel::Years,
            PrecisionArg::Decades => PrecisionLevel::Decades,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
