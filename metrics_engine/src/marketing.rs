//! Simulated marketing spend dataset
//!
//! Monthly spend per channel with the leads, conversion and revenue it
//! produced. Used by the demo dashboard alongside the core metrics.

use crate::data::DEMO_MONTHS;
use metrics_math::stats::{mean, safe_div};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Share of the monthly budget per channel
const DIGITAL_SHARE: f64 = 0.4;
const TRADITIONAL_SHARE: f64 = 0.25;
const SOCIAL_SHARE: f64 = 0.2;
const EMAIL_SHARE: f64 = 0.1;
const CONTENT_SHARE: f64 = 0.05;

/// Revenue per converted lead before the random uplift
const REVENUE_PER_CONVERSION: f64 = 150.0;

/// One month of marketing activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketingSpendRecord {
    pub month: String,
    pub digital_marketing: f64,
    pub traditional_marketing: f64,
    pub social_media: f64,
    pub email_marketing: f64,
    pub content_marketing: f64,
    pub total_spend: f64,
    pub leads_generated: f64,
    pub conversion_rate: f64,
    pub revenue_generated: f64,
    pub roi: f64,
}

/// Generate a year of marketing spend records from a seed
pub fn simulate_marketing_spend(seed: u64) -> Vec<MarketingSpendRecord> {
    let mut rng = StdRng::seed_from_u64(seed);

    DEMO_MONTHS
        .iter()
        .enumerate()
        .map(|(index, month)| {
            let base_spend = 50_000.0 + rng.gen_range(0.0..20_000.0);
            let seasonal = 1.0 + 0.3 * (index as f64 / 12.0 * 2.0 * PI).sin();
            let channel = |share: f64| (base_spend * share * seasonal).round();

            let digital_marketing = channel(DIGITAL_SHARE);
            let traditional_marketing = channel(TRADITIONAL_SHARE);
            let social_media = channel(SOCIAL_SHARE);
            let email_marketing = channel(EMAIL_SHARE);
            let content_marketing = channel(CONTENT_SHARE);

            let total_spend = digital_marketing
                + traditional_marketing
                + social_media
                + email_marketing
                + content_marketing;
            let leads_generated = (total_spend * (0.02 + rng.gen_range(0.0..0.01))).round();
            let conversion_rate = 2.5 + rng.gen_range(0.0..2.0);
            let uplift = 1.0 + rng.gen_range(0.0..0.3);
            let revenue_generated =
                (leads_generated * conversion_rate * REVENUE_PER_CONVERSION * uplift).round();
            let roi = safe_div(revenue_generated - total_spend, total_spend) * 100.0;

            MarketingSpendRecord {
                month: month.to_string(),
                digital_marketing,
                traditional_marketing,
                social_media,
                email_marketing,
                content_marketing,
                total_spend,
                leads_generated,
                conversion_rate,
                revenue_generated,
                roi,
            }
        })
        .collect()
}

/// Totals shown above the marketing charts
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketingSummary {
    pub total_spend: f64,
    pub total_leads: f64,
    pub average_roi: f64,
}

impl MarketingSummary {
    /// Aggregate a set of monthly records
    pub fn from_records(records: &[MarketingSpendRecord]) -> Self {
        let rois: Vec<f64> = records.iter().map(|r| r.roi).collect();
        Self {
            total_spend: records.iter().map(|r| r.total_spend).sum(),
            total_leads: records.iter().map(|r| r.leads_generated).sum(),
            average_roi: mean(&rois),
        }
    }
}

/// Monthly marketing records with their totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketingOverview {
    pub records: Vec<MarketingSpendRecord>,
    pub summary: MarketingSummary,
}

impl MarketingOverview {
    /// Simulate a year of spend and summarise it
    pub fn simulate(seed: u64) -> Self {
        let records = simulate_marketing_spend(seed);
        let summary = MarketingSummary::from_records(&records);
        Self { records, summary }
    }
}
