//! Print a dashboard report for an uploaded metrics file, or for demo data
//!
//! Usage: `metrics_report [CSV_PATH]`
//!
//! Configuration is read from `METRICS_*` environment variables. The report
//! is written to stdout as JSON; logs go to stderr.

use metrics_engine::data::{demo_metric_set, load_metric_csv};
use metrics_engine::{DashboardReport, EngineConfig, MetricsError, SourceKind};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn run() -> Result<(), MetricsError> {
    let config = EngineConfig::from_env()?;

    let (metrics, source) = match std::env::args().nth(1) {
        Some(path) => (load_metric_csv(&path)?, SourceKind::Real),
        None => {
            info!(seed = config.forecast.seed, "no file given, using demo data");
            (demo_metric_set(config.forecast.seed), SourceKind::Demo)
        }
    };

    let report = DashboardReport::build(&metrics, source, &config)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "report failed");
            ExitCode::FAILURE
        }
    }
}
