use chrono::NaiveDate;
use metrics_engine::quality::{
    assess_quality, assess_quality_at, QualityTier, ISSUE_INCOMPLETE, ISSUE_LIMITED_HISTORY,
    ISSUE_OUTDATED,
};
use metrics_engine::series::{MetricSet, Series, SourceKind};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn dated(name: &str, values: &[f64]) -> Series {
    Series::from_pairs(
        name,
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| (format!("2024-{:02}", i + 1), v)),
    )
    .unwrap()
}

fn full_year() -> MetricSet {
    let revenue: Vec<f64> = (0..12).map(|i| 800_000.0 + 10_000.0 * i as f64).collect();
    let cac: Vec<f64> = (0..12).map(|i| 130.0 - i as f64).collect();
    let conversion: Vec<f64> = (0..12).map(|i| 3.0 + 0.1 * i as f64).collect();
    [
        dated("salesRevenue", &revenue),
        dated("customerAcquisitionCost", &cac),
        dated("conversionRate", &conversion),
    ]
    .into_iter()
    .collect()
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_clean_demo_data_scores_full_marks() {
    let quality = assess_quality(&full_year(), SourceKind::Demo);
    assert_eq!(quality.score, 100);
    assert_eq!(quality.tier, QualityTier::Excellent);
    assert!(quality.issues.is_empty());
}

#[test]
fn test_fresh_real_data() {
    let quality = assess_quality_at(&full_year(), SourceKind::Real, day(2024, 12, 15));
    assert_eq!(quality.score, 100);
    assert!(quality.issues.is_empty());
}

#[test]
fn test_ageing_real_data() {
    // newest period is 2024-12, i.e. 2024-12-01
    let quality = assess_quality_at(&full_year(), SourceKind::Real, day(2025, 2, 10));
    assert_eq!(quality.score, 94);
    assert_eq!(quality.issues, vec![ISSUE_OUTDATED.to_string()]);

    let stale = assess_quality_at(&full_year(), SourceKind::Real, day(2026, 1, 1));
    assert_eq!(stale.score, 86);
    assert_eq!(stale.tier, QualityTier::Excellent);
}

#[test]
fn test_undated_real_data_is_treated_as_outdated() {
    let series = Series::from_pairs(
        "orders",
        ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"]
            .into_iter()
            .map(|m| (m, 10.0)),
    )
    .unwrap();
    let metrics: MetricSet = [series].into_iter().collect();

    let quality = assess_quality_at(&metrics, SourceKind::Real, day(2024, 6, 1));
    assert_eq!(quality.score, 86);
    assert_eq!(quality.issues, vec![ISSUE_OUTDATED.to_string()]);
}

#[test]
fn test_sparse_data_with_zeros() {
    let metrics: MetricSet = [dated("orders", &[100.0, 0.0, 100.0])].into_iter().collect();
    let quality = assess_quality(&metrics, SourceKind::Demo);

    // completeness 2/3 * 30 + consistency 0 + recency 20 + volume 0.4 * 25
    assert_eq!(quality.score, 50);
    assert_eq!(quality.tier, QualityTier::Poor);
    assert_eq!(
        quality.issues,
        vec![ISSUE_INCOMPLETE.to_string(), ISSUE_LIMITED_HISTORY.to_string()]
    );
}

#[rstest]
// completeness 0.5 * 30 + consistency 0 + recency 20 + volume 0.7 * 25 = 52.5
#[case(&[0.0, 100.0, 0.0, 100.0, 0.0, 100.0], 53)]
// completeness 0 + consistency 0 + recency 20 + volume 0.7 * 25 = 37.5
#[case(&[0.0; 6], 38)]
// one step off zero is enough: completeness 5/6 * 30 + recency 20 + volume 17.5
#[case(&[100.0, 101.0, 102.0, 0.0, 100.0, 101.0], 63)]
fn test_steps_off_zero_are_inconsistent(#[case] values: &[f64], #[case] expected: u8) {
    let metrics: MetricSet = [dated("orders", values)].into_iter().collect();
    let quality = assess_quality(&metrics, SourceKind::Demo);
    assert_eq!(quality.score, expected);
    assert_eq!(quality.tier, QualityTier::from_score(expected));
}

#[test]
fn test_zero_series_does_not_count_as_consistent() {
    let zeros = dated("refunds", &[0.0; 12]);
    let steady = dated("visits", &[10.0; 12]);
    let metrics: MetricSet = [zeros, steady].into_iter().collect();

    // completeness 0.5 * 30 + consistency 0.5 * 25 + recency 20 + volume 25
    let quality = assess_quality(&metrics, SourceKind::Demo);
    assert_eq!(quality.score, 73);
    assert_eq!(quality.tier, QualityTier::Good);
}

#[test]
fn test_wild_swings_are_inconsistent() {
    let swinging = dated("orders", &[10.0, 100.0, 10.0, 100.0, 10.0, 100.0]);
    let steady = dated("visits", &[10.0, 11.0, 12.0, 13.0, 14.0, 15.0]);
    let metrics: MetricSet = [swinging, steady].into_iter().collect();

    // completeness 30 + consistency 0.5 * 25 + recency 20 + volume 0.7 * 25
    let quality = assess_quality(&metrics, SourceKind::Demo);
    assert_eq!(quality.score, 80);
}

#[test]
fn test_empty_metric_set() {
    let quality = assess_quality(&MetricSet::new(), SourceKind::Demo);
    assert_eq!(quality.score, 30);
    assert_eq!(quality.tier, QualityTier::Poor);
    assert_eq!(
        quality.issues,
        vec![ISSUE_INCOMPLETE.to_string(), ISSUE_LIMITED_HISTORY.to_string()]
    );
}

#[test]
fn test_score_is_bounded() {
    let sets: Vec<MetricSet> = vec![
        [Series::new("empty")].into_iter().collect(),
        [dated("zeros", &[0.0; 8])].into_iter().collect(),
        full_year(),
    ];
    for metrics in &sets {
        for source in [SourceKind::Demo, SourceKind::Real] {
            let quality = assess_quality_at(metrics, source, day(2030, 1, 1));
            assert!(quality.score <= 100);
            assert_eq!(quality.tier, QualityTier::from_score(quality.score));
        }
    }
}

#[rstest]
#[case(100, QualityTier::Excellent)]
#[case(85, QualityTier::Excellent)]
#[case(80, QualityTier::Excellent)]
#[case(79, QualityTier::Good)]
#[case(65, QualityTier::Good)]
#[case(60, QualityTier::Good)]
#[case(40, QualityTier::Poor)]
fn test_tier_thresholds(#[case] score: u8, #[case] tier: QualityTier) {
    assert_eq!(QualityTier::from_score(score), tier);
    assert!(QualityTier::Poor < QualityTier::Good && QualityTier::Good < QualityTier::Excellent);
}
