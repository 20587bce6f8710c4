//! Flat CSV and JSON renditions of historical and predicted series

use crate::error::{MetricsError, Result};
use crate::series::MetricSet;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Column names of the CSV export
pub const EXPORT_HEADER: [&str; 4] = ["metric", "date", "value", "type"];

#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    metric: &'a str,
    date: &'a str,
    value: f64,
    #[serde(rename = "type")]
    kind: &'a str,
}

/// Rows of `metric,date,value,type`: every historical row, then every prediction
pub fn export_csv(historical: &MetricSet, predictions: &MetricSet) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(EXPORT_HEADER)?;

    for (set, kind) in [(historical, "historical"), (predictions, "prediction")] {
        for series in set {
            for observation in series.observations() {
                writer.serialize(ExportRow {
                    metric: series.name(),
                    date: &observation.period,
                    value: observation.value,
                    kind,
                })?;
            }
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| MetricsError::IoError(err.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[derive(Debug, Serialize)]
struct ExportDocument<'a> {
    timestamp: String,
    historical: &'a MetricSet,
    predictions: &'a MetricSet,
}

/// Pretty JSON document `{ timestamp, historical, predictions }`
pub fn export_json(
    historical: &MetricSet,
    predictions: &MetricSet,
    timestamp: DateTime<Utc>,
) -> Result<String> {
    let document = ExportDocument {
        timestamp: timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        historical,
        predictions,
    };
    Ok(serde_json::to_string_pretty(&document)?)
}
