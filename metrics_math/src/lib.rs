//! # Metrics Math
//!
//! Numeric kernels shared by the metrics analytics engine.
//! This crate provides the small set of statistics, line fitting and
//! seasonal decomposition routines the forecasting and scoring code relies on.

use thiserror::Error;

pub mod regression;
pub mod seasonal;
pub mod stats;

pub use regression::LinearFit;
pub use seasonal::SeasonalDecomposition;

/// Errors that can occur in metric calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Calculation error: {0}")]
    CalculationError(String),
}

/// Result type for metric math operations
pub type Result<T> = std::result::Result<T, MathError>;
