//! Engine configuration
//!
//! Defaults reproduce the dashboard's fixed thresholds. Overrides come from a
//! JSON file or from `METRICS_*` environment variables (a `.env` file is read
//! first when present).

use crate::error::{MetricsError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Forecast horizon used when nothing else is configured
pub const DEFAULT_HORIZON: usize = 6;
/// One year of monthly observations
pub const DEFAULT_SEASON_LENGTH: usize = 12;
/// Half a year against the half year before it
pub const DEFAULT_COMPARISON_WINDOW: usize = 6;

/// Trend forecaster settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ForecastConfig {
    /// Number of periods to project
    pub horizon: usize,
    /// Length of one seasonal cycle for the enhanced forecaster
    pub season_length: usize,
    /// Noise half-width as a fraction of the last observed value
    pub noise_amplitude: f64,
    /// Seed of the noise generator
    pub seed: u64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            horizon: DEFAULT_HORIZON,
            season_length: DEFAULT_SEASON_LENGTH,
            noise_amplitude: 0.0,
            seed: 42,
        }
    }
}

impl ForecastConfig {
    /// Create a validated forecaster configuration
    pub fn new(horizon: usize, season_length: usize, noise_amplitude: f64, seed: u64) -> Result<Self> {
        let config = Self {
            horizon,
            season_length,
            noise_amplitude,
            seed,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that every parameter is usable
    pub fn validate(&self) -> Result<()> {
        if self.horizon == 0 {
            return Err(MetricsError::InvalidParameter(
                "Forecast horizon must be at least 1".to_string(),
            ));
        }
        if self.season_length < 2 {
            return Err(MetricsError::InvalidParameter(
                "Season length must be at least 2".to_string(),
            ));
        }
        if !self.noise_amplitude.is_finite() || self.noise_amplitude < 0.0 {
            return Err(MetricsError::InvalidParameter(
                "Noise amplitude must be a non-negative number".to_string(),
            ));
        }
        Ok(())
    }
}

/// Percentage thresholds of the alert generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AlertThresholds {
    /// Period-over-period decrease that raises a danger alert
    pub drop_percent: f64,
    /// Period-over-period increase that raises an info alert
    pub growth_percent: f64,
    /// CAC as a share of revenue that raises a warning
    pub cac_ratio_percent: f64,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            drop_percent: 10.0,
            growth_percent: 15.0,
            cac_ratio_percent: 20.0,
        }
    }
}

/// Top-level engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Forecaster settings
    pub forecast: ForecastConfig,
    /// Alert thresholds
    pub alerts: AlertThresholds,
    /// Window length of trailing period comparisons
    pub comparison_window: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            forecast: ForecastConfig::default(),
            alerts: AlertThresholds::default(),
            comparison_window: DEFAULT_COMPARISON_WINDOW,
        }
    }
}

impl EngineConfig {
    /// Load a configuration from a JSON file; missing fields keep their defaults
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config: EngineConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from `METRICS_*` environment variables
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!(path = %path.display(), "loaded environment file");
        }

        let mut config = EngineConfig::default();
        if let Some(horizon) = env_value("METRICS_FORECAST_HORIZON")? {
            config.forecast.horizon = horizon;
        }
        if let Some(season_length) = env_value("METRICS_SEASON_LENGTH")? {
            config.forecast.season_length = season_length;
        }
        if let Some(amplitude) = env_value("METRICS_NOISE_AMPLITUDE")? {
            config.forecast.noise_amplitude = amplitude;
        }
        if let Some(seed) = env_value("METRICS_NOISE_SEED")? {
            config.forecast.seed = seed;
        }
        if let Some(window) = env_value("METRICS_COMPARISON_WINDOW")? {
            config.comparison_window = window;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check every section of the configuration
    pub fn validate(&self) -> Result<()> {
        self.forecast.validate()?;
        if self.comparison_window == 0 {
            return Err(MetricsError::ConfigError(
                "Comparison window must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn env_value<T: FromStr>(key: &str) -> Result<Option<T>> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| MetricsError::ConfigError(format!("Invalid value for {}: '{}'", key, raw))),
        Err(_) => Ok(None),
    }
}
