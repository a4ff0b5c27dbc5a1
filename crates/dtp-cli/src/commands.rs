use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use chrono::Weekday;
use tracing::{info, info_span};

use dtp_core::{FixedClock, LocaleSettings, Synchronizer, SystemClock, filter_precision_levels};
use dtp_model::{DateInput, PickerConfig, PrecisionLevel, SelectionSnapshot};

/// Inputs of the `snapshot` command.
#[derive(Debug, Clone, Default)]
pub struct SnapshotRequest {
    pub config_path: PathBuf,
    /// Frozen "now"; the system clock is used when absent.
    pub now: Option<String>,
    pub time_format: Option<String>,
    pub week_start: Option<Weekday>,
}

/// Reads a picker configuration JSON file.
pub fn load_config(path: &Path) -> Result<PickerConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("parse picker configuration {}", path.display()))
}

pub fn run_snapshot(request: &SnapshotRequest) -> Result<SelectionSnapshot> {
    let span = info_span!("snapshot", config = %request.config_path.display());
    let _guard = span.enter();

    let config = load_config(&request.config_path)?;
    let locale = locale_settings(request);
    let synchronizer = match &request.now {
        Some(text) => {
            let instant = DateInput::from(text.as_str())
                .parse()
                .ok_or_else(|| anyhow!("invalid --now value: {text}"))?;
            Synchronizer::new(FixedClock::new(instant), locale)
        }
        None => Synchronizer::new(SystemClock, locale),
    };
    let snapshot = synchronizer
        .synchronize(&config)
        .context("synchronize picker state")?;
    info!(
        slots = snapshot.values.len(),
        focused_index = snapshot.focused_index,
        "snapshot ready"
    );
    Ok(snapshot)
}

pub fn run_levels(min: PrecisionLevel, max: PrecisionLevel) -> Result<Vec<PrecisionLevel>> {
    filter_precision_levels(min, max)
        .context("filter precision levels")
}

fn locale_settings(request: &SnapshotRequest) -> LocaleSettings {
    let mut locale = LocaleSettings::default();
    if let Some(pattern) = &request.time_format {
        locale = locale.with_time_format(pattern.as_str());
    }
    if let Some(day) = request.week_start {
        locale = locale.with_week_start(day);
    }
    locale
}
