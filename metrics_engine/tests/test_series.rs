use metrics_engine::series::{MetricSet, Observation, Series};
use pretty_assertions::assert_eq;

#[test]
fn test_series_json_round_trip() {
    let series = Series::from_pairs("orders", [("2024-01", 10.0), ("2024-02", 12.0)]).unwrap();
    let json = serde_json::to_string(&series).unwrap();
    let restored: Series = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, series);
    assert!(!restored.is_predicted());
}

#[test]
fn test_deserialized_series_rejects_repeated_periods() {
    let json = r#"{
        "name": "orders",
        "observations": [
            { "period": "2024-01", "value": 10.0 },
            { "period": "2024-01", "value": 12.0 }
        ]
    }"#;

    let err = serde_json::from_str::<Series>(json).unwrap_err();
    assert!(err.to_string().contains("Period '2024-01' appears more than once"));
}

#[test]
fn test_deserialized_predicted_flag_is_kept() {
    let json = r#"{ "name": "orders", "observations": [], "predicted": true }"#;
    let series: Series = serde_json::from_str(json).unwrap();
    assert!(series.is_predicted());
    assert!(series.is_empty());
}

#[test]
fn test_upsert_replaces_in_place() {
    let mut series = Series::new("orders");
    series.upsert("Jan", 1.0);
    series.upsert("Feb", 2.0);
    series.upsert("Jan", 3.0);

    assert_eq!(
        series.observations(),
        &[Observation::new("Jan", 3.0), Observation::new("Feb", 2.0)]
    );
}

#[test]
fn test_metric_set_keeps_insertion_order() {
    let mut metrics: MetricSet = [Series::new("visits"), Series::new("orders")]
        .into_iter()
        .collect();
    metrics.insert(Series::from_pairs("visits", [("Jan", 5.0)]).unwrap());

    assert_eq!(metrics.names(), vec!["visits", "orders"]);
    assert_eq!(metrics.get("visits").unwrap().len(), 1);

    let json = serde_json::to_value(&metrics).unwrap();
    assert_eq!(json["visits"][0]["period"], "Jan");
}
