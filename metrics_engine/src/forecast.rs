//! Trend forecasting for monthly metrics
//!
//! Two variants are provided:
//!
//! - **Baseline**: least-squares slope over the whole history, projected from
//!   the last observed value, with optional bounded zero-mean noise.
//! - **Enhanced**: removes a repeating seasonal pattern before fitting the
//!   trend and adds it back to each projected step. Series shorter than one
//!   season fall back to the baseline trend.
//!
//! Forecasting never fails: empty input yields zeros and a single
//! observation yields a flat projection.

use crate::config::ForecastConfig;
use crate::error::Result;
use crate::periods::next_period_labels;
use crate::series::{MetricKind, Observation, Series};
use metrics_math::{LinearFit, SeasonalDecomposition};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Common interface for trend projection models
pub trait TrendModel: std::fmt::Debug {
    /// Project `horizon` values past the end of `values`
    fn project(&self, values: &[f64], horizon: usize) -> Vec<f64>;

    /// Name of the model
    fn name(&self) -> &str;
}

/// Straight-line extrapolation from the last observed value
#[derive(Debug, Clone, Default)]
pub struct LinearTrend;

impl TrendModel for LinearTrend {
    fn project(&self, values: &[f64], horizon: usize) -> Vec<f64> {
        let last = match values.last() {
            Some(&last) => last,
            None => return vec![0.0; horizon],
        };
        let slope = LinearFit::fit(values).slope();

        (1..=horizon).map(|step| last + slope * step as f64).collect()
    }

    fn name(&self) -> &str {
        "Linear trend"
    }
}

/// Linear trend on deseasonalized values with the seasonal offsets re-applied
#[derive(Debug, Clone)]
pub struct SeasonalTrend {
    season_length: usize,
}

impl SeasonalTrend {
    /// Create a seasonal trend model with the given cycle length
    pub fn new(season_length: usize) -> Self {
        Self { season_length }
    }
}

impl TrendModel for SeasonalTrend {
    fn project(&self, values: &[f64], horizon: usize) -> Vec<f64> {
        if values.len() < self.season_length {
            debug!(
                points = values.len(),
                season_length = self.season_length,
                "less than one seasonal cycle, using linear trend"
            );
            return LinearTrend.project(values, horizon);
        }

        match SeasonalDecomposition::decompose(values, self.season_length) {
            Ok(decomposition) => (1..=horizon).map(|step| decomposition.project(step)).collect(),
            Err(err) => {
                debug!(error = %err, "seasonal decomposition failed, using linear trend");
                LinearTrend.project(values, horizon)
            }
        }
    }

    fn name(&self) -> &str {
        "Seasonal trend"
    }
}

/// Forecasting variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ForecastMethod {
    /// Linear trend with optional noise, used for demo data
    Baseline,
    /// Seasonally adjusted trend, used for uploaded data
    Enhanced,
}

/// Produces predicted series from historical ones
#[derive(Debug, Clone)]
pub struct TrendForecaster {
    config: ForecastConfig,
    method: ForecastMethod,
    kind: Option<MetricKind>,
}

impl TrendForecaster {
    /// Create a forecaster with a validated configuration
    pub fn new(config: ForecastConfig, method: ForecastMethod) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            method,
            kind: None,
        })
    }

    /// Baseline forecaster with default settings
    pub fn baseline() -> Self {
        Self {
            config: ForecastConfig::default(),
            method: ForecastMethod::Baseline,
            kind: None,
        }
    }

    /// Enhanced forecaster with default settings
    pub fn enhanced() -> Self {
        Self {
            config: ForecastConfig::default(),
            method: ForecastMethod::Enhanced,
            kind: None,
        }
    }

    /// Override the clamping rule instead of inferring it from the metric name
    pub fn with_kind(mut self, kind: MetricKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Variant used by this forecaster
    pub fn method(&self) -> ForecastMethod {
        self.method
    }

    /// Configuration used by this forecaster
    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Forecast the configured horizon
    pub fn forecast_default(&self, series: &Series) -> Series {
        self.forecast(series, self.config.horizon)
    }

    /// Forecast `horizon` periods past the end of `series`
    pub fn forecast(&self, series: &Series, horizon: usize) -> Series {
        let values = series.values();
        let mut projected = match self.method {
            ForecastMethod::Baseline => LinearTrend.project(&values, horizon),
            ForecastMethod::Enhanced => {
                SeasonalTrend::new(self.config.season_length).project(&values, horizon)
            }
        };

        if self.method == ForecastMethod::Baseline && self.config.noise_amplitude > 0.0 {
            let scale = self.config.noise_amplitude * values.last().copied().unwrap_or(0.0).abs();
            let mut rng = StdRng::seed_from_u64(self.config.seed);
            for value in &mut projected {
                *value += rng.gen_range(-1.0_f64..=1.0) * scale;
            }
        }

        let kind = self.kind.unwrap_or_else(|| series.kind());
        let labels = next_period_labels(series.last().map(|o| o.period.as_str()), horizon);
        let observations = labels
            .into_iter()
            .zip(projected)
            .map(|(period, value)| Observation::new(period, kind.clamp(value)))
            .collect();

        Series::predicted(series.name(), observations)
    }
}

/// Baseline forecast of `horizon` periods with default settings
pub fn forecast(series: &Series, horizon: usize) -> Series {
    TrendForecaster::baseline().forecast(series, horizon)
}

/// Seasonally adjusted forecast of `horizon` periods with default settings
pub fn forecast_enhanced(series: &Series, horizon: usize) -> Series {
    TrendForecaster::enhanced().forecast(series, horizon)
}
