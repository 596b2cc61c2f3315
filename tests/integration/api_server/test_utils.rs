//! Test utilities for API server integration tests

use axum_test::TestServer;
use chrono::NaiveDate;
use std::sync::Arc;
use stock_pulse::config::DashboardConfig;
use stock_pulse::core::http::{create_router, AppState};
use stock_pulse::dashboard::DashboardService;
use stock_pulse::metrics::Metrics;
use stock_pulse::services::{FixtureProvider, MarketDataProvider};

/// Test helper for API server integration tests
#[allow(dead_code)]
pub struct TestApiServer {
    pub server: TestServer,
    pub metrics: Arc<Metrics>,
}

impl TestApiServer {
    pub async fn new() -> Self {
        let provider = FixtureProvider::sample(
            &["AAPL", "MSFT", "GOOGL", "AMZN", "TSLA"],
            NaiveDate::from_ymd_opt(2024, 8, 30).unwrap(),
        );
        Self::with_provider(Arc::new(provider))
    }

    pub fn with_provider(provider: Arc<dyn MarketDataProvider>) -> Self {
        let metrics = Arc::new(Metrics::new().expect("metrics initialization"));
        let dashboard = Arc::new(
            DashboardService::new(provider, DashboardConfig::default())
                .with_metrics(metrics.clone()),
        );
        let state = AppState::new(dashboard, metrics.clone());

        let app = create_router(state);
        let server = TestServer::new(app).expect("start test server");

        Self { server, metrics }
    }
}
