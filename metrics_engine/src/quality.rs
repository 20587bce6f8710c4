//! Data quality scoring for a metric set
//!
//! Four weighted factors make up a 0-100 score:
//!
//! | Factor       | Weight | Measures                                        |
//! |--------------|--------|-------------------------------------------------|
//! | Completeness | 30     | share of strictly positive values               |
//! | Consistency  | 25     | share of metrics without wild relative swings   |
//! | Recency      | 20     | age of the newest observation (real data only)  |
//! | Volume       | 25     | average number of observations per metric       |

use crate::periods::parse_period_date;
use crate::series::{MetricSet, SourceKind};
use chrono::{NaiveDate, Utc};
use metrics_math::stats::{abs_relative_changes, mean, safe_div};
use serde::{Deserialize, Serialize};
use tracing::debug;

const COMPLETENESS_WEIGHT: f64 = 30.0;
const CONSISTENCY_WEIGHT: f64 = 25.0;
const RECENCY_WEIGHT: f64 = 20.0;
const VOLUME_WEIGHT: f64 = 25.0;

/// Mean relative change (as a fraction) at or above which a metric is inconsistent
const CONSISTENCY_LIMIT: f64 = 2.0;

pub const ISSUE_INCOMPLETE: &str = "Some metrics have missing or zero values";
pub const ISSUE_OUTDATED: &str = "Data may be outdated";
pub const ISSUE_LIMITED_HISTORY: &str = "Limited historical data may affect prediction accuracy";

/// Ordinal quality bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum QualityTier {
    Poor,
    Good,
    Excellent,
}

impl QualityTier {
    /// Bucket for a quality score
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= 80 => QualityTier::Excellent,
            s if s >= 60 => QualityTier::Good,
            _ => QualityTier::Poor,
        }
    }
}

/// Overall data quality with the problems found
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityScore {
    pub score: u8,
    pub tier: QualityTier,
    pub issues: Vec<String>,
}

/// Assess a metric set against today's date
pub fn assess_quality(metrics: &MetricSet, source: SourceKind) -> QualityScore {
    assess_quality_at(metrics, source, Utc::now().date_naive())
}

/// Assess a metric set, measuring recency against `as_of`
pub fn assess_quality_at(metrics: &MetricSet, source: SourceKind, as_of: NaiveDate) -> QualityScore {
    let mut issues = Vec::new();

    let completeness = completeness(metrics);
    if completeness < 0.8 {
        issues.push(ISSUE_INCOMPLETE.to_string());
    }

    let consistency = consistency(metrics);

    let recency = match source {
        SourceKind::Demo => 1.0,
        SourceKind::Real => match days_since_latest(metrics, as_of) {
            Some(days) => {
                if days > 30 {
                    issues.push(ISSUE_OUTDATED.to_string());
                }
                recency_factor(days)
            }
            None => {
                debug!("no parseable period dates, treating data as outdated");
                issues.push(ISSUE_OUTDATED.to_string());
                0.3
            }
        },
    };

    let average_points = safe_div(
        metrics.iter().map(|s| s.len() as f64).sum(),
        metrics.len() as f64,
    );
    let volume = match average_points {
        n if n >= 12.0 => 1.0,
        n if n >= 6.0 => 0.7,
        _ => 0.4,
    };
    if average_points < 6.0 {
        issues.push(ISSUE_LIMITED_HISTORY.to_string());
    }

    let total = completeness * COMPLETENESS_WEIGHT
        + consistency * CONSISTENCY_WEIGHT
        + recency * RECENCY_WEIGHT
        + volume * VOLUME_WEIGHT;
    let score = total.round().clamp(0.0, 100.0) as u8;

    QualityScore {
        score,
        tier: QualityTier::from_score(score),
        issues,
    }
}

/// Average share of strictly positive values; empty series count as zero
fn completeness(metrics: &MetricSet) -> f64 {
    let shares: Vec<f64> = metrics
        .iter()
        .map(|series| {
            let positive = series.observations().iter().filter(|o| o.value > 0.0).count();
            safe_div(positive as f64, series.len() as f64)
        })
        .collect();
    mean(&shares)
}

/// Share of all metrics with at least three points, no step off zero and a
/// moderate mean swing
fn consistency(metrics: &MetricSet) -> f64 {
    let consistent = metrics
        .iter()
        .filter(|series| series.len() >= 3)
        .filter(|series| match abs_relative_changes(&series.values()) {
            Some(changes) => mean(&changes) < CONSISTENCY_LIMIT,
            None => false,
        })
        .count();
    safe_div(consistent as f64, metrics.len() as f64)
}

/// Days between `as_of` and the newest dated final observation of any metric
fn days_since_latest(metrics: &MetricSet, as_of: NaiveDate) -> Option<i64> {
    metrics
        .iter()
        .filter_map(|series| series.last())
        .filter_map(|last| parse_period_date(&last.period))
        .max()
        .map(|latest| (as_of - latest).num_days())
}

fn recency_factor(days: i64) -> f64 {
    if days < 30 {
        1.0
    } else if days < 90 {
        0.7
    } else {
        0.3
    }
}
