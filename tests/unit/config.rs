//! Unit tests for configuration

use stock_pulse::config::{default_companies, ConfigError, DashboardConfig, DataSource};
use stock_pulse::models::{SignalThresholds, ThresholdError};

#[test]
fn test_data_source_parsing() {
    assert_eq!("supabase".parse::<DataSource>(), Ok(DataSource::Supabase));
    assert_eq!("Postgres".parse::<DataSource>(), Ok(DataSource::Postgres));
    assert_eq!("demo".parse::<DataSource>(), Ok(DataSource::Fixture));
    assert_eq!("Simulation".parse::<DataSource>(), Ok(DataSource::Simulation));
    assert_eq!(
        "mongo".parse::<DataSource>(),
        Err(ConfigError::UnknownDataSource("mongo".to_string()))
    );
}

#[test]
fn test_threshold_error_converts_to_config_error() {
    let err: ConfigError = SignalThresholds::new(1.0, 2.0).validate().unwrap_err().into();
    assert!(matches!(
        err,
        ConfigError::InvalidThresholds(ThresholdError::Inverted { .. })
    ));
    assert!(err.to_string().contains("SIGNAL_SELL_THRESHOLD"));
}

#[test]
fn test_default_config() {
    let config = DashboardConfig::default();
    assert_eq!(config.port, 8080);
    assert_eq!(config.history_window, 30);
    assert_eq!(config.news_limit, 10);
    assert_eq!(config.news_feed_size, 4);
    assert_eq!(config.thresholds, SignalThresholds::window());
    assert_eq!(config.simulation_seed, 42);
}

#[test]
fn test_company_catalog() {
    let companies = default_companies();
    let codes: Vec<&str> = companies.iter().map(|c| c.code.as_str()).collect();
    assert_eq!(codes, vec!["AAPL", "MSFT", "GOOGL", "AMZN", "TSLA"]);

    let config = DashboardConfig::default();
    assert_eq!(config.company("tsla").map(|c| c.name.as_str()), Some("Tesla Inc."));
    assert!(config.company("XXXX").is_none());
}
