//! Metric set sources: uploaded CSV files and generated demo data

use crate::error::Result;
use crate::series::{
    MetricSet, Series, CONVERSION_RATE, CUSTOMER_ACQUISITION_COST, SALES_REVENUE,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Month labels used by the demo data
pub const DEMO_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Relative standard deviation of the demo noise
const DEMO_NOISE: f64 = 0.02;

/// Number of columns an upload row must have
const UPLOAD_COLUMNS: usize = 4;

/// Load an uploaded metrics file
///
/// Only failing to read the file is an error; the content itself is parsed
/// leniently by [`parse_metric_csv`].
pub fn load_metric_csv<P: AsRef<Path>>(path: P) -> Result<MetricSet> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let metrics = parse_metric_csv(&text);
    info!(
        path = %path.display(),
        rows = metrics.get(SALES_REVENUE).map(|s| s.len()).unwrap_or(0),
        "loaded metrics file"
    );
    Ok(metrics)
}

/// Parse upload text into the three conventional series
///
/// The expected CSV format is:
/// period,sales_revenue,customer_acquisition_cost,conversion_rate
/// Jan,850000,125,3.2
///
/// The first row is a header. Rows with fewer than four columns are dropped,
/// cells that are not finite numbers become `0`, and a repeated period
/// overwrites the earlier row.
pub fn parse_metric_csv(text: &str) -> MetricSet {
    let mut revenue = Series::new(SALES_REVENUE);
    let mut cac = Series::new(CUSTOMER_ACQUISITION_COST);
    let mut conversion = Series::new(CONVERSION_RATE);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    for (i, record) in reader.records().enumerate() {
        let line = i + 2;
        let record = match record {
            Ok(record) => record,
            Err(err) => {
                warn!(line, error = %err, "skipping unreadable row");
                continue;
            }
        };

        if record.len() < UPLOAD_COLUMNS {
            warn!(line, fields = record.len(), "skipping row with too few columns");
            continue;
        }

        let period = &record[0];
        revenue.upsert(period, parse_cell(&record[1]));
        cac.upsert(period, parse_cell(&record[2]));
        conversion.upsert(period, parse_cell(&record[3]));
    }

    [revenue, cac, conversion].into_iter().collect()
}

fn parse_cell(cell: &str) -> f64 {
    cell.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Twelve months of demonstration revenue, CAC and conversion rate
///
/// Values follow a gentle trend with a yearly seasonal swing and seeded
/// Gaussian noise, so the same seed always yields the same set.
pub fn demo_metric_set(seed: u64) -> MetricSet {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut jitter = || {
        let z: f64 = StandardNormal.sample(&mut rng);
        1.0 + DEMO_NOISE * z
    };

    let mut revenue = Series::new(SALES_REVENUE);
    let mut cac = Series::new(CUSTOMER_ACQUISITION_COST);
    let mut conversion = Series::new(CONVERSION_RATE);

    for (i, month) in DEMO_MONTHS.iter().enumerate() {
        let step = i as f64;
        let season = 1.0 + 0.1 * (step / 12.0 * 2.0 * std::f64::consts::PI).sin();

        let revenue_value = 850_000.0 * (1.0 + 0.02 * step) * season * jitter();
        let cac_value = (125.0 - 1.5 * step) * jitter();
        let conversion_value = (3.2 + 0.05 * step) * season * jitter();

        revenue.upsert(*month, revenue_value.round());
        cac.upsert(*month, (cac_value * 100.0).round() / 100.0);
        conversion.upsert(*month, (conversion_value * 100.0).round() / 100.0);
    }

    [revenue, cac, conversion].into_iter().collect()
}
