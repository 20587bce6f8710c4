//! Additive seasonal decomposition by relative position
//!
//! A series is modelled as `level + slope * index + offset[index % period]`
//! with the offsets summing to zero. The slope is the least-squares slope of
//! values against indices measured within each position of the cycle, so a
//! repeating pattern cannot leak into the trend. With exactly one cycle every
//! position holds a single observation and the plain line fit slope is used.

use crate::regression::LinearFit;
use crate::stats::mean;
use crate::{MathError, Result};

/// Result of decomposing a series into a linear trend and repeating offsets
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonalDecomposition {
    period: usize,
    offsets: Vec<f64>,
    deseasonalized: Vec<f64>,
    trend: LinearFit,
}

impl SeasonalDecomposition {
    /// Decompose `values` with the given season length
    ///
    /// At least one full cycle (`values.len() >= period`) is required.
    pub fn decompose(values: &[f64], period: usize) -> Result<Self> {
        if period < 2 {
            return Err(MathError::InvalidInput(
                "Season length must be at least 2".to_string(),
            ));
        }
        if values.len() < period {
            return Err(MathError::InsufficientData(format!(
                "Need at least one full cycle of {} periods, got {}",
                period,
                values.len()
            )));
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(MathError::InvalidInput(
                "Values must be finite for a seasonal decomposition".to_string(),
            ));
        }

        let positions: Vec<(f64, f64)> = (0..period)
            .map(|position| {
                let indices: Vec<f64> = (position..values.len())
                    .step_by(period)
                    .map(|i| i as f64)
                    .collect();
                let at_position: Vec<f64> = values
                    .iter()
                    .skip(position)
                    .step_by(period)
                    .copied()
                    .collect();
                (mean(&indices), mean(&at_position))
            })
            .collect();

        let mut numerator = 0.0;
        let mut denominator = 0.0;
        for (i, &y) in values.iter().enumerate() {
            let (index_mean, value_mean) = positions[i % period];
            let dx = i as f64 - index_mean;
            numerator += dx * (y - value_mean);
            denominator += dx * dx;
        }

        let slope = if denominator > 1e-10 {
            numerator / denominator
        } else {
            LinearFit::try_fit(values)?.slope()
        };

        let mut offsets: Vec<f64> = positions
            .iter()
            .map(|(index_mean, value_mean)| value_mean - slope * index_mean)
            .collect();

        let level = mean(&offsets);
        for offset in &mut offsets {
            *offset -= level;
        }

        let deseasonalized: Vec<f64> = values
            .iter()
            .enumerate()
            .map(|(i, v)| v - offsets[i % period])
            .collect();

        let trend = LinearFit::from_parts(slope, level);

        Ok(Self {
            period,
            offsets,
            deseasonalized,
            trend,
        })
    }

    /// Season length used for the decomposition
    pub fn period(&self) -> usize {
        self.period
    }

    /// Centred seasonal offsets, one per position in the cycle
    pub fn offsets(&self) -> &[f64] {
        &self.offsets
    }

    /// Seasonal offset for an absolute series index
    pub fn offset_at(&self, index: usize) -> f64 {
        self.offsets[index % self.period]
    }

    /// Input values with the seasonal component removed
    pub fn deseasonalized(&self) -> &[f64] {
        &self.deseasonalized
    }

    /// Trend line of the deseasonalized values
    pub fn trend(&self) -> &LinearFit {
        &self.trend
    }

    /// Value `step` periods past the last observation
    ///
    /// Projects from the last deseasonalized value along the trend slope and
    /// re-applies the offset of the target position.
    pub fn project(&self, step: usize) -> f64 {
        let last_index = self.deseasonalized.len() - 1;
        let base = self.deseasonalized[last_index] + self.trend.slope() * step as f64;
        base + self.offset_at(last_index + step)
    }
}
