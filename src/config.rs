//! Environment-driven configuration

use std::env;
use std::str::FromStr;

use thiserror::Error;

use crate::models::{CompanyMeta, SignalThresholds, ThresholdError};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_HISTORY_WINDOW: usize = 30;
pub const DEFAULT_NEWS_LIMIT: usize = 10;
pub const DEFAULT_NEWS_FEED_SIZE: usize = 4;
pub const DEFAULT_SIMULATION_SEED: u64 = 42;

/// Deployment environment name (`ENVIRONMENT`, defaults to `sandbox`).
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("unknown data source: {0}")]
    UnknownDataSource(String),

    #[error("invalid SIGNAL_BUY_THRESHOLD/SIGNAL_SELL_THRESHOLD: {0}")]
    InvalidThresholds(#[from] ThresholdError),
}

/// Which backend feeds the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Supabase,
    Postgres,
    /// Deterministic sample series built into the binary
    Fixture,
    /// Seeded random-walk prices and randomized headlines
    Simulation,
}

impl FromStr for DataSource {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "supabase" => Ok(DataSource::Supabase),
            "postgres" | "postgresql" => Ok(DataSource::Postgres),
            "fixture" | "demo" => Ok(DataSource::Fixture),
            "simulation" | "simulated" => Ok(DataSource::Simulation),
            other => Err(ConfigError::UnknownDataSource(other.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub port: u16,
    pub data_source: DataSource,
    pub supabase_url: Option<String>,
    pub supabase_key: Option<String>,
    pub database_url: Option<String>,
    pub history_window: usize,
    pub news_limit: usize,
    pub news_feed_size: usize,
    pub thresholds: SignalThresholds,
    pub simulation_seed: u64,
    pub companies: Vec<CompanyMeta>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            data_source: DataSource::Supabase,
            supabase_url: None,
            supabase_key: None,
            database_url: None,
            history_window: DEFAULT_HISTORY_WINDOW,
            news_limit: DEFAULT_NEWS_LIMIT,
            news_feed_size: DEFAULT_NEWS_FEED_SIZE,
            thresholds: SignalThresholds::window(),
            simulation_seed: DEFAULT_SIMULATION_SEED,
            companies: default_companies(),
        }
    }
}

impl DashboardConfig {
    /// Read configuration from the process environment, falling back to
    /// defaults for anything missing or unparsable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let data_source = match env::var("DATA_SOURCE") {
            Ok(raw) => raw.parse()?,
            Err(_) => defaults.data_source,
        };

        let thresholds = SignalThresholds::new(
            parse_var("SIGNAL_BUY_THRESHOLD").unwrap_or(defaults.thresholds.buy_above),
            parse_var("SIGNAL_SELL_THRESHOLD").unwrap_or(defaults.thresholds.sell_below),
        );
        thresholds.validate()?;

        Ok(Self {
            port: parse_var("PORT").unwrap_or(defaults.port),
            data_source,
            supabase_url: env::var("SUPABASE_URL").ok(),
            supabase_key: env::var("SUPABASE_ANON_KEY").ok(),
            database_url: env::var("DATABASE_URL").ok(),
            history_window: parse_var("HISTORY_WINDOW_DAYS").unwrap_or(defaults.history_window),
            news_limit: parse_var("NEWS_LIMIT").unwrap_or(defaults.news_limit),
            news_feed_size: parse_var("NEWS_FEED_SIZE").unwrap_or(defaults.news_feed_size),
            thresholds,
            simulation_seed: parse_var("SIMULATION_SEED").unwrap_or(defaults.simulation_seed),
            companies: defaults.companies,
        })
    }

    pub fn company(&self, code: &str) -> Option<&CompanyMeta> {
        self.companies.iter().find(|c| c.code.eq_ignore_ascii_case(code))
    }
}

/// Stocks listed in the picker, in display order.
pub fn default_companies() -> Vec<CompanyMeta> {
    vec![
        CompanyMeta::new("AAPL", "Apple Inc.", "Tech"),
        CompanyMeta::new("MSFT", "Microsoft Corp.", "Tech"),
        CompanyMeta::new("GOOGL", "Alphabet Inc.", "Tech"),
        CompanyMeta::new("AMZN", "Amazon.com Inc.", "Consumer"),
        CompanyMeta::new("TSLA", "Tesla Inc.", "Auto"),
    ]
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}
