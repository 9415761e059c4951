use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::{
    cli::Cli,
    config::{DEFAULT_BUMP_THRESHOLD, Density, HorizonConfig},
};


pub const DEFAULT_SPEED: f64 = 6.0;
pub const MAX_SPEED: f64 = 13.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeSettings {
    pub speed: f64,
    pub density: Density,
    pub seed: Option<u64>,
    pub bump_threshold: f64,
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            density: Density::Standard,
            seed: None,
            bump_threshold: DEFAULT_BUMP_THRESHOLD,
        }
    }
}

impl RuntimeSettings {
    pub fn from_cli_defaults(cli: &Cli) -> Self {
        Self {
            speed: cli.speed.unwrap_or(DEFAULT_SPEED),
            density: Density::from_hidpi(cli.hidpi),
            seed: cli.seed,
            bump_threshold: cli.bump_threshold.unwrap_or(DEFAULT_BUMP_THRESHOLD),
        }
    }

    #[must_use]
    pub fn horizon_config(&self) -> HorizonConfig {
        HorizonConfig::default()
            .with_density(self.density)
            .with_bump_threshold(self.bump_threshold)
    }

    fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(speed) = cli.speed {
            self.speed = speed;
        }
        if cli.hidpi {
            self.density = Density::High;
        }
        if cli.seed.is_some() {
            self.seed = cli.seed;
        }
        if let Some(threshold) = cli.bump_threshold {
            self.bump_threshold = threshold;
        }
    }

    /// Saved files are hand-editable, so out-of-range values are pulled back.
    fn sanitize(&mut self) {
        let defaults = Self::default();
        if !self.speed.is_finite() {
            self.speed = defaults.speed;
        }
        self.speed = self.speed.clamp(0.0, MAX_SPEED);
        if !(0.0..=1.0).contains(&self.bump_threshold) {
            self.bump_threshold = defaults.bump_threshold;
        }
    }
}

pub fn load_runtime_settings(cli: &Cli, enable_disk: bool) -> (RuntimeSettings, Option<PathBuf>) {
    if !enable_disk {
        return (RuntimeSettings::from_cli_defaults(cli), None);
    }

    let Some(path) = settings_path() else {
        return (RuntimeSettings::from_cli_defaults(cli), None);
    };

    let settings = load_runtime_settings_from(cli, &path);
    (settings, Some(path))
}

/// Saved settings from `path` with explicit CLI flags layered on top.
/// A missing or unreadable file falls back to the CLI defaults.
pub fn load_runtime_settings_from(cli: &Cli, path: &Path) -> RuntimeSettings {
    let mut settings = RuntimeSettings::default();

    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<RuntimeSettings>(&content) {
            Ok(saved) => settings = saved,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "ignoring corrupt settings file");
            }
        },
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "settings file unreadable");
        }
    }

    settings.sanitize();
    settings.apply_cli_overrides(cli);
    settings
}

pub fn save_runtime_settings(path: &Path, settings: &RuntimeSettings) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("creating settings directory failed")?;
    }
    let payload =
        serde_json::to_string_pretty(settings).context("serializing settings payload failed")?;
    fs::write(path, payload).context("writing settings file failed")?;
    tracing::info!(path = %path.display(), "settings saved");
    Ok(())
}

fn settings_path() -> Option<PathBuf> {
    if let Some(base) = std::env::var_os("RUNNER_HORIZON_CONFIG_DIR") {
        return Some(PathBuf::from(base).join("settings.json"));
    }

    let home = std::env::var_os("HOME")?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join("runner-horizon")
            .join("settings.json"),
    )
}
