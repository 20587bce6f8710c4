//! Forecast confidence from historical volatility

use crate::series::Series;
use metrics_math::stats::{differences, mean, population_std_dev};
use serde::{Deserialize, Serialize};

/// Histories shorter than this get the floor score
pub const MIN_HISTORY: usize = 6;
/// Score reported for short histories
pub const FLOOR_SCORE: u8 = 50;
/// Highest score the estimator reports
pub const MAX_SCORE: u8 = 95;

/// Ordinal confidence bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConfidenceTier {
    Low,
    Medium,
    High,
}

impl ConfidenceTier {
    /// Bucket for a confidence score
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= 80 => ConfidenceTier::High,
            s if s >= 60 => ConfidenceTier::Medium,
            _ => ConfidenceTier::Low,
        }
    }
}

/// Reliability of a forecast, 0-95
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfidenceScore {
    pub score: u8,
    pub tier: ConfidenceTier,
}

/// Score the reliability of forecasts built from `history`
pub fn confidence(history: &Series) -> ConfidenceScore {
    confidence_from_values(&history.values())
}

/// Score the reliability of forecasts built from raw values
///
/// Consistency rewards steady period-over-period changes: it falls by 20
/// points for every unit of `stdDev / |meanDiff|`. A length bonus of two
/// points per observation (at most 20) is added and the total capped at 95.
pub fn confidence_from_values(values: &[f64]) -> ConfidenceScore {
    if values.len() < MIN_HISTORY {
        return ConfidenceScore {
            score: FLOOR_SCORE,
            tier: ConfidenceTier::Low,
        };
    }

    let diffs = differences(values);
    let avg_diff = mean(&diffs);
    let std_dev = population_std_dev(&diffs);

    // zero mean change counts as perfectly consistent
    let ratio = if avg_diff == 0.0 {
        0.0
    } else {
        std_dev / avg_diff.abs()
    };

    let consistency = (100.0 - ratio * 20.0).max(0.0);
    let bonus = (values.len() as f64 * 2.0).min(20.0);
    let total = (consistency + bonus).min(MAX_SCORE as f64).round();

    let score = if total.is_finite() {
        total.clamp(0.0, MAX_SCORE as f64) as u8
    } else {
        0
    };

    ConfidenceScore {
        score,
        tier: ConfidenceTier::from_score(score),
    }
}

/// Displayed ± margin for a forecast value at the given confidence
pub fn margin_of_error(score: u8, value: f64) -> f64 {
    ((100.0 - score as f64) * value / 100.0).round()
}

/// Forecast point with its margin of error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastBand {
    pub period: String,
    pub value: f64,
    pub margin: f64,
    pub lower: f64,
    pub upper: f64,
}

/// Attach margins of error to every point of a forecast
pub fn forecast_band(score: ConfidenceScore, forecast: &Series) -> Vec<ForecastBand> {
    forecast
        .observations()
        .iter()
        .map(|point| {
            let margin = margin_of_error(score.score, point.value);
            ForecastBand {
                period: point.period.clone(),
                value: point.value,
                margin,
                lower: point.value - margin.abs(),
                upper: point.value + margin.abs(),
            }
        })
        .collect()
}
