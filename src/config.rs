use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::error::{Result, VibecheckError};
use crate::lexicon::Lexicons;
use crate::scoring::{CalibrationConfig, MoodWeights, ScoreWeights};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Preceding populated days used for the cadence baseline.
    pub cadence_days: usize,
    /// Preceding populated days used for the mood baseline.
    pub baseline_days: usize,
    pub trend_days: usize,
    pub top_hours: usize,
    pub saturation_penalty: f64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            cadence_days: 7,
            baseline_days: 7,
            trend_days: 30,
            top_hours: 3,
            saturation_penalty: 0.4,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VibecheckConfig {
    pub weights: ScoreWeights,
    pub calibration: CalibrationConfig,
    pub mood: MoodWeights,
    pub timing: TimingConfig,
    pub lexicon: Lexicons,
}

impl VibecheckConfig {
    /// Loads the config file if one exists, then applies environment overrides.
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>)> {
        let config_path = path.or_else(default_config_path);
        let mut config = match config_path.as_ref() {
            Some(path) if path.exists() => {
                let contents =
                    std::fs::read_to_string(path).map_err(|source| VibecheckError::Io {
                        path: path.clone(),
                        source,
                    })?;
                debug!(path = %path.display(), "loaded config");
                Self::from_toml(&contents)?
            }
            _ => VibecheckConfig::default(),
        };

        config.apply_env_overrides();
        Ok((config, config_path))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    fn apply_env_overrides(&mut self) {
        override_usize("VIBECHECK_CADENCE_DAYS", &mut self.timing.cadence_days);
        override_usize("VIBECHECK_BASELINE_DAYS", &mut self.timing.baseline_days);
        override_usize("VIBECHECK_TREND_DAYS", &mut self.timing.trend_days);
        override_usize("VIBECHECK_TOP_HOURS", &mut self.timing.top_hours);
    }
}

fn override_usize(key: &str, target: &mut usize) {
    let Ok(value) = env::var(key) else {
        return;
    };
    if value.trim().is_empty() {
        return;
    }
    match value.trim().parse::<usize>() {
        Ok(parsed) => *target = parsed,
        Err(_) => warn!(key, value = value.as_str(), "ignoring non-numeric override"),
    }
}

fn default_config_path() -> Option<PathBuf> {
    env::var("VIBECHECK_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/vibecheck.toml")))
}
