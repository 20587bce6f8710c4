//! One-call dashboard analysis
//!
//! Runs the engine components in data-flow order over a metric set:
//! quality and forecasts first, then confidence for each forecast, then
//! alerts, comparisons and derived metrics.

use crate::alerts::{generate_alerts_with, Alert};
use crate::comparison::{compare_trailing, metric_card, MetricCard, PeriodComparison};
use crate::confidence::{confidence, forecast_band, ConfidenceScore, ForecastBand};
use crate::config::EngineConfig;
use crate::derived::{derived_metrics, DerivedMetrics};
use crate::error::Result;
use crate::forecast::{ForecastMethod, TrendForecaster};
use crate::marketing::MarketingOverview;
use crate::quality::{assess_quality_at, QualityScore};
use crate::series::{MetricSet, Series, SourceKind};
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use tracing::info;

/// Analysis of a single metric
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricReport {
    pub metric: String,
    pub card: Option<MetricCard>,
    pub forecast: Series,
    pub confidence: ConfidenceScore,
    pub band: Vec<ForecastBand>,
    pub comparison: Option<PeriodComparison>,
}

/// Everything the dashboard displays for one metric set
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    pub source: SourceKind,
    pub method: ForecastMethod,
    pub quality: QualityScore,
    pub alerts: Vec<Alert>,
    pub derived: DerivedMetrics,
    pub metrics: Vec<MetricReport>,
    /// Simulated channel spend, shown with demo data only
    pub marketing: Option<MarketingOverview>,
}

impl DashboardReport {
    /// Analyse a metric set as of today
    pub fn build(metrics: &MetricSet, source: SourceKind, config: &EngineConfig) -> Result<Self> {
        Self::build_at(metrics, source, config, Utc::now().date_naive())
    }

    /// Analyse a metric set, measuring data age against `as_of`
    ///
    /// Demo data uses the baseline forecaster and uploaded data the enhanced
    /// one. Demo reports also carry a marketing spend simulation seeded from
    /// the forecast seed. Fails only on an invalid configuration.
    pub fn build_at(
        metrics: &MetricSet,
        source: SourceKind,
        config: &EngineConfig,
        as_of: NaiveDate,
    ) -> Result<Self> {
        config.validate()?;

        let (method, marketing) = match source {
            SourceKind::Demo => (
                ForecastMethod::Baseline,
                Some(MarketingOverview::simulate(config.forecast.seed)),
            ),
            SourceKind::Real => (ForecastMethod::Enhanced, None),
        };
        let forecaster = TrendForecaster::new(config.forecast.clone(), method)?;

        let quality = assess_quality_at(metrics, source, as_of);

        let reports: Vec<MetricReport> = metrics
            .iter()
            .map(|series| {
                let forecast = forecaster.forecast_default(series);
                let confidence = confidence(series);
                MetricReport {
                    metric: series.name().to_string(),
                    card: metric_card(series),
                    band: forecast_band(confidence, &forecast),
                    forecast,
                    confidence,
                    comparison: compare_trailing(series, config.comparison_window),
                }
            })
            .collect();

        let alerts = generate_alerts_with(metrics, &config.alerts);

        info!(
            metrics = metrics.len(),
            quality = quality.score,
            alerts = alerts.len(),
            "built dashboard report"
        );

        Ok(Self {
            source,
            method,
            quality,
            alerts,
            derived: derived_metrics(metrics),
            metrics: reports,
            marketing,
        })
    }

    /// Forecasts of every metric as a metric set
    pub fn predictions(&self) -> MetricSet {
        self.metrics.iter().map(|m| m.forecast.clone()).collect()
    }

    /// Report for one metric
    pub fn metric(&self, name: &str) -> Option<&MetricReport> {
        self.metrics.iter().find(|m| m.metric == name)
    }
}
