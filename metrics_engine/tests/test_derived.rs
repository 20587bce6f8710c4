use approx::assert_relative_eq;
use metrics_engine::derived::{
    derived_metrics, growth_rate, lifetime_value, payback_period_months, return_on_ad_spend,
    DerivedMetrics, RoiInputs,
};
use metrics_engine::series::{MetricSet, Series};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn series(name: &str, values: &[f64]) -> Series {
    Series::from_pairs(
        name,
        values.iter().enumerate().map(|(i, &v)| (format!("2024-{:02}", i + 1), v)),
    )
    .unwrap()
}

#[test]
fn test_lifetime_value_and_roas() {
    assert_eq!(lifetime_value(1_000.0, 100.0), 120.0);
    assert_eq!(return_on_ad_spend(1_000.0, 100.0), 10.0);
    assert_eq!(lifetime_value(1_000.0, 0.0), 0.0);
    assert_eq!(return_on_ad_spend(1_000.0, 0.0), 0.0);
}

#[test]
fn test_payback_period() {
    assert_relative_eq!(payback_period_months(1_000.0, 100.0), 1.2, epsilon = 1e-9);
    assert_eq!(payback_period_months(0.0, 100.0), 0.0);
    assert_eq!(payback_period_months(1_000.0, 0.0), 0.0);
}

#[rstest]
#[case(&[], 0.0)]
#[case(&[100.0], 0.0)]
#[case(&[100.0, 110.0], 10.0)]
#[case(&[50.0, 100.0, 110.0, 125.0], 25.0)]
#[case(&[0.0, 10.0, 20.0], 0.0)]
fn test_growth_rate(#[case] values: &[f64], #[case] expected: f64) {
    assert_relative_eq!(growth_rate(values), expected, epsilon = 1e-9);
}

#[test]
fn test_derived_metrics_from_series() {
    let metrics: MetricSet = [
        series("salesRevenue", &[900.0, 1_000.0, 1_100.0]),
        series("customerAcquisitionCost", &[100.0, 100.0, 100.0]),
    ]
    .into_iter()
    .collect();

    let derived = derived_metrics(&metrics);
    assert_relative_eq!(derived.ltv, 120.0, epsilon = 1e-9);
    assert_relative_eq!(derived.roas, 10.0, epsilon = 1e-9);
    assert_relative_eq!(derived.growth_rate, 100.0 * 200.0 / 900.0, epsilon = 1e-9);
    assert_relative_eq!(derived.payback_period_months, 1.2, epsilon = 1e-9);
}

#[test]
fn test_missing_series_yield_zero() {
    assert_eq!(derived_metrics(&MetricSet::new()), DerivedMetrics::default());
}

#[test]
fn test_roi_calculator() {
    let projection = RoiInputs::default().calculate();
    assert_eq!(projection.roi_percent, 150.0);
    assert_relative_eq!(projection.monthly_profit, 1_250.0);
    assert_relative_eq!(projection.payback_period, 8.0);
    assert_relative_eq!(projection.break_even, 4.8, epsilon = 1e-9);
    // 13.9 customers a month saving 50 each over 12 months, plus the 15000 net
    assert_relative_eq!(projection.projected_profit, 23_333.333_333, epsilon = 1e-3);
}

#[test]
fn test_roi_calculator_loss_has_no_payback() {
    let projection = RoiInputs {
        investment: 20_000.0,
        expected_revenue: 15_000.0,
        ..RoiInputs::default()
    }
    .calculate();
    assert_relative_eq!(projection.roi_percent, -25.0);
    assert_eq!(projection.payback_period, 0.0);
}

#[test]
fn test_roi_calculator_guards_zero_denominators() {
    let projection = RoiInputs {
        investment: 0.0,
        timeframe_months: 0.0,
        expected_revenue: 0.0,
        current_cac: 0.0,
        target_cac: 0.0,
    }
    .calculate();

    for value in [
        projection.roi_percent,
        projection.monthly_profit,
        projection.payback_period,
        projection.break_even,
        projection.projected_profit,
    ] {
        assert_eq!(value, 0.0);
    }
}
