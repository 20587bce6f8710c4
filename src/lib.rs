//! # Biz Metrics
//!
//! Workspace facade for the business metrics analytics engine and its
//! numeric kernels.
//!
//! ## Example
//!
//! ```
//! use biz_metrics_workspace::engine::RoiInputs;
//!
//! let projection = RoiInputs::default().calculate();
//! assert_eq!(projection.roi_percent, 150.0);
//! ```

pub use metrics_engine as engine;
pub use metrics_math as math;

/// Analyse the demo metric set with the default configuration
///
/// # Examples
///
/// ```
/// let report = biz_metrics_workspace::demo_report(7).unwrap();
/// assert_eq!(report.metrics.len(), 3);
/// ```
pub fn demo_report(seed: u64) -> engine::error::Result<engine::DashboardReport> {
    let metrics = engine::data::demo_metric_set(seed);
    engine::DashboardReport::build(
        &metrics,
        engine::SourceKind::Demo,
        &engine::EngineConfig::default(),
    )
}
