use metrics_engine::config::{
    EngineConfig, ForecastConfig, DEFAULT_COMPARISON_WINDOW, DEFAULT_HORIZON, DEFAULT_SEASON_LENGTH,
};
use metrics_engine::error::MetricsError;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::fs;

#[test]
fn test_defaults() {
    let config = EngineConfig::default();
    assert_eq!(config.forecast.horizon, DEFAULT_HORIZON);
    assert_eq!(config.forecast.season_length, DEFAULT_SEASON_LENGTH);
    assert_eq!(config.forecast.noise_amplitude, 0.0);
    assert_eq!(config.alerts.drop_percent, 10.0);
    assert_eq!(config.alerts.growth_percent, 15.0);
    assert_eq!(config.alerts.cac_ratio_percent, 20.0);
    assert_eq!(config.comparison_window, DEFAULT_COMPARISON_WINDOW);
    assert_eq!(DEFAULT_COMPARISON_WINDOW, 6);
    assert!(config.validate().is_ok());
}

#[rstest]
#[case(0, 12, 0.0)]
#[case(6, 1, 0.0)]
#[case(6, 12, -0.1)]
#[case(6, 12, f64::NAN)]
fn test_invalid_forecast_config(#[case] horizon: usize, #[case] season: usize, #[case] noise: f64) {
    let result = ForecastConfig::new(horizon, season, noise, 1);
    assert!(matches!(result, Err(MetricsError::InvalidParameter(_))));
}

#[test]
fn test_zero_comparison_window_is_rejected() {
    let config = EngineConfig {
        comparison_window: 0,
        ..EngineConfig::default()
    };
    assert!(matches!(config.validate(), Err(MetricsError::ConfigError(_))));
}

#[test]
fn test_partial_json_file_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("engine.json");
    fs::write(&path, r#"{ "forecast": { "horizon": 3 }, "alerts": { "dropPercent": 5.0 } }"#).unwrap();

    let config = EngineConfig::from_json_file(&path).unwrap();
    assert_eq!(config.forecast.horizon, 3);
    assert_eq!(config.forecast.season_length, DEFAULT_SEASON_LENGTH);
    assert_eq!(config.alerts.drop_percent, 5.0);
    assert_eq!(config.alerts.growth_percent, 15.0);
}

#[test]
fn test_bad_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("engine.json");
    fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        EngineConfig::from_json_file(&path),
        Err(MetricsError::SerializationError(_))
    ));

    fs::write(&path, r#"{ "comparisonWindow": 0 }"#).unwrap();
    assert!(matches!(
        EngineConfig::from_json_file(&path),
        Err(MetricsError::ConfigError(_))
    ));

    assert!(matches!(
        EngineConfig::from_json_file(dir.path().join("absent.json")),
        Err(MetricsError::IoError(_))
    ));
}

// Environment variables are process-wide, so every case runs in one test
#[test]
fn test_environment_overrides() {
    std::env::set_var("METRICS_FORECAST_HORIZON", "9");
    std::env::set_var("METRICS_NOISE_AMPLITUDE", "0.05");
    std::env::set_var("METRICS_COMPARISON_WINDOW", " 2 ");
    let config = EngineConfig::from_env().unwrap();
    assert_eq!(config.forecast.horizon, 9);
    assert_eq!(config.forecast.noise_amplitude, 0.05);
    assert_eq!(config.comparison_window, 2);
    assert_eq!(config.forecast.season_length, DEFAULT_SEASON_LENGTH);

    std::env::set_var("METRICS_FORECAST_HORIZON", "many");
    assert!(matches!(EngineConfig::from_env(), Err(MetricsError::ConfigError(_))));

    std::env::set_var("METRICS_FORECAST_HORIZON", "0");
    assert!(matches!(EngineConfig::from_env(), Err(MetricsError::InvalidParameter(_))));

    for key in [
        "METRICS_FORECAST_HORIZON",
        "METRICS_NOISE_AMPLITUDE",
        "METRICS_COMPARISON_WINDOW",
    ] {
        std::env::remove_var(key);
    }
    assert_eq!(EngineConfig::from_env().unwrap(), EngineConfig::default());
}
