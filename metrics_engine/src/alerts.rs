//! Threshold alerts over the latest period-over-period changes

use crate::config::AlertThresholds;
use crate::series::{MetricSet, CUSTOMER_ACQUISITION_COST, SALES_REVENUE};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Alert severity, in increasing order of urgency
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Danger,
}

/// A message for the display layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

/// Generate alerts with the default thresholds
pub fn generate_alerts(metrics: &MetricSet) -> Vec<Alert> {
    generate_alerts_with(metrics, &AlertThresholds::default())
}

/// Generate alerts in metric order, followed by the CAC ratio check
///
/// Each metric with two or more observations compares its last two values.
/// A previous value of zero has no defined percentage change and is skipped.
pub fn generate_alerts_with(metrics: &MetricSet, thresholds: &AlertThresholds) -> Vec<Alert> {
    let mut alerts = Vec::new();

    for series in metrics {
        let values = series.values();
        if values.len() < 2 {
            continue;
        }
        let current = values[values.len() - 1];
        let previous = values[values.len() - 2];
        if previous == 0.0 {
            debug!(metric = series.name(), "previous value is zero, skipping change alert");
            continue;
        }

        let change = (current - previous) / previous * 100.0;
        let metric = series.name();

        if change < -thresholds.drop_percent {
            alerts.push(Alert {
                severity: Severity::Danger,
                title: format!("Significant Drop in {}", metric),
                message: format!(
                    "{} has decreased by {:.1}% from the previous period.",
                    metric,
                    change.abs()
                ),
            });
        } else if change > thresholds.growth_percent {
            alerts.push(Alert {
                severity: Severity::Info,
                title: format!("Strong Growth in {}", metric),
                message: format!(
                    "{} has increased by {:.1}% from the previous period.",
                    metric, change
                ),
            });
        }
    }

    let last_value = |name: &str| {
        metrics
            .get(name)
            .and_then(|s| s.last())
            .map(|o| o.value)
            .unwrap_or(0.0)
    };
    let revenue = last_value(SALES_REVENUE);
    let cac = last_value(CUSTOMER_ACQUISITION_COST);

    if revenue > 0.0 && cac > 0.0 {
        let cac_ratio = cac / revenue * 100.0;
        if cac_ratio > thresholds.cac_ratio_percent {
            alerts.push(Alert {
                severity: Severity::Warning,
                title: "High Customer Acquisition Cost".to_string(),
                message: format!(
                    "CAC represents {:.1}% of revenue, which may impact profitability.",
                    cac_ratio
                ),
            });
        }
    }

    alerts
}
