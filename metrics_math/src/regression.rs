//! Ordinary least-squares line fitting over index vs. value
//!
//! The x coordinate of an observation is its position in the slice
//! (`0, 1, 2, ...`), which matches evenly spaced monthly data.

use crate::stats::mean;
use crate::{MathError, Result};
use serde::{Deserialize, Serialize};

/// Threshold below which the x spread is treated as degenerate
const DEGENERATE_SPREAD: f64 = 1e-10;

/// Fitted line `value = intercept + slope * index`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    slope: f64,
    intercept: f64,
}

impl LinearFit {
    /// Fit a least-squares line to `values`
    ///
    /// Fewer than two points cannot define a slope; the fit degrades to a
    /// flat line through the only value (or through zero for empty input).
    pub fn fit(values: &[f64]) -> Self {
        match values.len() {
            0 => Self::flat(0.0),
            1 => Self::flat(values[0]),
            _ => Self::try_fit(values).unwrap_or_else(|_| Self::flat(mean(values))),
        }
    }

    /// Fit a least-squares line, failing on fewer than two points
    pub fn try_fit(values: &[f64]) -> Result<Self> {
        if values.len() < 2 {
            return Err(MathError::InsufficientData(
                "Need at least 2 points for a line fit".to_string(),
            ));
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(MathError::InvalidInput(
                "Values must be finite for a line fit".to_string(),
            ));
        }

        let n = values.len() as f64;
        let x_mean = (n - 1.0) / 2.0;
        let y_mean = mean(values);

        let mut numerator = 0.0;
        let mut denominator = 0.0;

        for (i, &y) in values.iter().enumerate() {
            let x = i as f64;
            numerator += (x - x_mean) * (y - y_mean);
            denominator += (x - x_mean) * (x - x_mean);
        }

        if denominator.abs() < DEGENERATE_SPREAD {
            return Err(MathError::CalculationError(
                "Cannot calculate slope: x values are too similar".to_string(),
            ));
        }

        let slope = numerator / denominator;

        Ok(Self {
            slope,
            intercept: y_mean - slope * x_mean,
        })
    }

    pub(crate) fn from_parts(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    fn flat(level: f64) -> Self {
        Self {
            slope: 0.0,
            intercept: level,
        }
    }

    /// Change in value per index step
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Fitted value at index zero
    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_perfect_line() {
        let fit = LinearFit::fit(&[1.0, 3.0, 5.0, 7.0]);
        assert_relative_eq!(fit.slope(), 2.0);
        assert_relative_eq!(fit.intercept(), 1.0);
    }

    #[test]
    fn test_short_input_is_flat() {
        let empty = LinearFit::fit(&[]);
        assert_eq!(empty.slope(), 0.0);
        assert_eq!(empty.intercept(), 0.0);

        let single = LinearFit::fit(&[42.0]);
        assert_eq!(single.slope(), 0.0);
        assert_eq!(single.intercept(), 42.0);

        assert!(LinearFit::try_fit(&[1.0]).is_err());
    }

    #[test]
    fn test_constant_values_have_zero_slope() {
        let fit = LinearFit::fit(&[5.0; 6]);
        assert_eq!(fit.slope(), 0.0);
        assert_eq!(fit.intercept(), 5.0);
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(
            LinearFit::try_fit(&[1.0, f64::NAN]),
            Err(MathError::InvalidInput(_))
        ));
    }
}
