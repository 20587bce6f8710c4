//! # Metrics Engine
//!
//! Analytics for monthly business metrics such as revenue, customer
//! acquisition cost and conversion rate.
//!
//! ## Features
//!
//! - Trend forecasting, with an optional seasonal adjustment for uploaded data
//! - Forecast confidence scoring from historical volatility
//! - Data quality scoring (completeness, consistency, recency, volume)
//! - Threshold alerts on period-over-period swings and CAC ratio
//! - Period comparisons, LTV, ROAS, payback and an ROI calculator
//! - CSV upload parsing, seeded demo data and CSV/JSON export
//!
//! Every analytics function is a pure function of its arguments.
//!
//! ## Quick Start
//!
//! ```no_run
//! use metrics_engine::data::parse_metric_csv;
//! use metrics_engine::forecast::forecast_enhanced;
//! use metrics_engine::confidence::confidence;
//! use metrics_engine::series::SALES_REVENUE;
//!
//! let metrics = parse_metric_csv(
//!     "period,sales_revenue,customer_acquisition_cost,conversion_rate\n\
//!      2024-01,850000,125,3.2\n\
//!      2024-02,920000,118,3.4\n",
//! );
//! let revenue = metrics.get(SALES_REVENUE).unwrap();
//!
//! let forecast = forecast_enhanced(revenue, 3);
//! let score = confidence(revenue);
//! println!("{} points, confidence {}", forecast.len(), score.score);
//! ```

pub mod alerts;
pub mod comparison;
pub mod confidence;
pub mod config;
pub mod data;
pub mod derived;
pub mod error;
pub mod export;
pub mod forecast;
pub mod marketing;
pub mod periods;
pub mod quality;
pub mod report;
pub mod series;

// Re-export commonly used types
pub use crate::alerts::{generate_alerts, Alert, Severity};
pub use crate::comparison::{compare, PeriodComparison, Trend};
pub use crate::confidence::{confidence, ConfidenceScore, ConfidenceTier};
pub use crate::config::EngineConfig;
pub use crate::derived::{derived_metrics, DerivedMetrics, RoiInputs, RoiProjection};
pub use crate::error::MetricsError;
pub use crate::forecast::{forecast, forecast_enhanced, TrendForecaster};
pub use crate::quality::{assess_quality, QualityScore, QualityTier};
pub use crate::report::DashboardReport;
pub use crate::series::{MetricSet, Observation, Series, SourceKind};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
