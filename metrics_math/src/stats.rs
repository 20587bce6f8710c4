//! Descriptive statistics over plain value slices
//!
//! Every function here is total: empty input and zero denominators produce
//! `0.0` instead of `NaN` or infinity.

use statrs::statistics::Statistics;

/// Divide, yielding `0.0` when the denominator is zero or the result is not finite
pub fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }
    let value = numerator / denominator;
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Arithmetic mean, `0.0` for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().mean()
}

/// Population variance (mean squared deviation), `0.0` for an empty slice
pub fn population_variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().population_variance()
}

/// Population standard deviation
pub fn population_std_dev(values: &[f64]) -> f64 {
    population_variance(values).sqrt()
}

/// Successive differences `v[i] - v[i-1]`
pub fn differences(values: &[f64]) -> Vec<f64> {
    values.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Absolute relative changes `|v[i] - v[i-1]| / |v[i-1]|`
///
/// Returns `None` when any previous value is zero, since the change off zero
/// is unbounded.
pub fn abs_relative_changes(values: &[f64]) -> Option<Vec<f64>> {
    values
        .windows(2)
        .map(|w| (w[0] != 0.0).then(|| ((w[1] - w[0]) / w[0]).abs()))
        .collect()
}

/// Percentage change from `previous` to `current`, `0.0` when `previous` is zero
pub fn percent_change(previous: f64, current: f64) -> f64 {
    safe_div(current - previous, previous) * 100.0
}
