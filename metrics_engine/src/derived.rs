//! Secondary business metrics and the ROI calculator
//!
//! Every formula guards its divisions: a zero or missing denominator gives
//! `0.0`, never `NaN` or an error.

use crate::series::{MetricSet, CUSTOMER_ACQUISITION_COST, SALES_REVENUE};
use metrics_math::stats::safe_div;
use serde::{Deserialize, Serialize};

/// Months of revenue attributed to one acquired customer
const LTV_MONTHS: f64 = 12.0;

/// Customer lifetime value: `avgRevenue / avgCAC * 12`
pub fn lifetime_value(avg_revenue: f64, avg_cac: f64) -> f64 {
    if avg_cac > 0.0 {
        avg_revenue / avg_cac * LTV_MONTHS
    } else {
        0.0
    }
}

/// Return on ad spend: `avgRevenue / avgCAC`
pub fn return_on_ad_spend(avg_revenue: f64, avg_cac: f64) -> f64 {
    if avg_cac > 0.0 {
        avg_revenue / avg_cac
    } else {
        0.0
    }
}

/// Growth in percent across the trailing three values (at least two needed)
pub fn growth_rate(values: &[f64]) -> f64 {
    let recent = &values[values.len().saturating_sub(3)..];
    if recent.len() < 2 {
        return 0.0;
    }
    let first = recent[0];
    let last = recent[recent.len() - 1];
    safe_div(last - first, first) * 100.0
}

/// Months of average revenue needed to recover the average CAC
pub fn payback_period_months(avg_revenue: f64, avg_cac: f64) -> f64 {
    if avg_cac > 0.0 && avg_revenue > 0.0 {
        avg_cac / (avg_revenue / LTV_MONTHS)
    } else {
        0.0
    }
}

/// Secondary metrics computed from revenue and CAC
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedMetrics {
    pub ltv: f64,
    pub roas: f64,
    pub growth_rate: f64,
    pub payback_period_months: f64,
}

impl DerivedMetrics {
    /// Metrics from averages; growth needs the series and is left at zero
    pub fn from_averages(avg_revenue: f64, avg_cac: f64) -> Self {
        Self {
            ltv: lifetime_value(avg_revenue, avg_cac),
            roas: return_on_ad_spend(avg_revenue, avg_cac),
            growth_rate: 0.0,
            payback_period_months: payback_period_months(avg_revenue, avg_cac),
        }
    }
}

/// Derived metrics from the conventional revenue and CAC series
///
/// Missing series count as empty, so their average is zero.
pub fn derived_metrics(metrics: &MetricSet) -> DerivedMetrics {
    let revenue = metrics.get(SALES_REVENUE).map(|s| s.values()).unwrap_or_default();
    let avg_revenue = metrics.get(SALES_REVENUE).map(|s| s.mean()).unwrap_or(0.0);
    let avg_cac = metrics
        .get(CUSTOMER_ACQUISITION_COST)
        .map(|s| s.mean())
        .unwrap_or(0.0);

    DerivedMetrics {
        growth_rate: growth_rate(&revenue),
        ..DerivedMetrics::from_averages(avg_revenue, avg_cac)
    }
}

/// User-entered scenario for the ROI calculator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiInputs {
    pub investment: f64,
    pub timeframe_months: f64,
    pub expected_revenue: f64,
    pub current_cac: f64,
    pub target_cac: f64,
}

impl Default for RoiInputs {
    fn default() -> Self {
        Self {
            investment: 10_000.0,
            timeframe_months: 12.0,
            expected_revenue: 25_000.0,
            current_cac: 150.0,
            target_cac: 100.0,
        }
    }
}

/// Outcome of the ROI calculator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiProjection {
    pub roi_percent: f64,
    pub monthly_profit: f64,
    pub payback_period: f64,
    pub break_even: f64,
    pub projected_profit: f64,
}

impl RoiInputs {
    /// Run the calculator
    pub fn calculate(&self) -> RoiProjection {
        let net = self.expected_revenue - self.investment;
        let monthly_revenue = safe_div(self.expected_revenue, self.timeframe_months);
        let monthly_profit = safe_div(net, self.timeframe_months);

        let payback_period = if monthly_profit > 0.0 {
            safe_div(self.investment, monthly_profit)
        } else {
            0.0
        };

        // customers per month times the saving per customer, over the timeframe
        let customers_per_month = safe_div(monthly_revenue, self.current_cac);
        let cac_saving =
            customers_per_month * (self.current_cac - self.target_cac) * self.timeframe_months;

        RoiProjection {
            roi_percent: safe_div(net, self.investment) * 100.0,
            monthly_profit,
            payback_period,
            break_even: safe_div(self.investment, monthly_revenue),
            projected_profit: cac_saving + net,
        }
    }
}
