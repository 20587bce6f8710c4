//! Period-over-period comparisons and headline metric cards

use crate::series::Series;
use metrics_math::stats::{mean, percent_change};
use serde::{Deserialize, Serialize};

/// Direction of change between two periods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    /// Direction given by the sign of `change`
    pub fn from_change(change: f64) -> Self {
        if change > 0.0 {
            Trend::Up
        } else if change < 0.0 {
            Trend::Down
        } else {
            Trend::Flat
        }
    }
}

/// Averages of two windows and how they differ
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodComparison {
    pub current: f64,
    pub previous: f64,
    pub change: f64,
    pub percent_change: f64,
    pub trend: Trend,
}

/// Compare the mean of `current` against the mean of `previous`
///
/// Returns `None` (insufficient data) when either window is empty.
pub fn compare(current: &Series, previous: &Series) -> Option<PeriodComparison> {
    compare_values(&current.values(), &previous.values())
}

/// Compare two windows of raw values
pub fn compare_values(current: &[f64], previous: &[f64]) -> Option<PeriodComparison> {
    if current.is_empty() || previous.is_empty() {
        return None;
    }

    let current_mean = mean(current);
    let previous_mean = mean(previous);
    let change = current_mean - previous_mean;

    Some(PeriodComparison {
        current: current_mean,
        previous: previous_mean,
        change,
        percent_change: percent_change(previous_mean, current_mean),
        trend: Trend::from_change(change),
    })
}

/// Compare the last `window` observations with the `window` before them
pub fn compare_trailing(series: &Series, window: usize) -> Option<PeriodComparison> {
    if window == 0 || series.len() < window * 2 {
        return None;
    }
    let values = series.values();
    let split = values.len() - window;
    compare_values(&values[split..], &values[split - window..split])
}

/// Latest value of a metric against the one before it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricCard {
    pub metric: String,
    pub current: f64,
    pub previous: f64,
    pub change_percent: f64,
    pub trend: Trend,
}

/// Headline card for a series with at least two observations
pub fn metric_card(series: &Series) -> Option<MetricCard> {
    let values = series.values();
    if values.len() < 2 {
        return None;
    }
    let current = values[values.len() - 1];
    let previous = values[values.len() - 2];

    Some(MetricCard {
        metric: series.name().to_string(),
        current,
        previous,
        change_percent: percent_change(previous, current),
        trend: Trend::from_change(current - previous),
    })
}
