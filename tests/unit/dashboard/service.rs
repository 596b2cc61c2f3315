//! Unit tests for dashboard snapshot assembly

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use std::sync::Arc;
use stock_pulse::config::DashboardConfig;
use stock_pulse::dashboard::{build_snapshot, DashboardService};
use stock_pulse::metrics::Metrics;
use stock_pulse::models::{
    CompanyMeta, NewsItem, PricePoint, Sentiment, SignalAction, VolatilityRegime,
};
use stock_pulse::services::{DataError, FixtureProvider, MarketDataProvider};

struct FailingProvider;

#[async_trait]
impl MarketDataProvider for FailingProvider {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn latest_close(&self, _symbol: &str) -> Result<Option<f64>, DataError> {
        Err(DataError::Upstream {
            status: 503,
            resource: "stock_prices".to_string(),
        })
    }

    async fn price_history(
        &self,
        _symbol: &str,
        _limit: usize,
    ) -> Result<Vec<PricePoint>, DataError> {
        Err(DataError::Decode("garbage".to_string()))
    }

    async fn recent_news(&self, _symbol: &str, _limit: usize) -> Result<Vec<NewsItem>, DataError> {
        Err(DataError::Config("missing key".to_string()))
    }
}

fn end_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 8, 30).unwrap()
}

fn sample_service() -> DashboardService {
    let provider = FixtureProvider::sample(&["AAPL", "MSFT", "GOOGL", "AMZN", "TSLA"], end_date());
    DashboardService::new(Arc::new(provider), DashboardConfig::default())
}

#[tokio::test]
async fn test_load_market_lists_catalog_in_order() {
    let quotes = sample_service().load_market().await;
    let codes: Vec<&str> = quotes.iter().map(|q| q.code.as_str()).collect();
    assert_eq!(codes, vec!["AAPL", "MSFT", "GOOGL", "AMZN", "TSLA"]);
    assert!(quotes.iter().all(|q| q.price > 0.0));
    assert_eq!(quotes[0].name, "Apple Inc.");
}

#[tokio::test]
async fn test_snapshot_for_rising_stock() {
    let snapshot = sample_service().snapshot("AAPL").await.unwrap();
    assert_eq!(snapshot.chart.len(), 30);
    assert_eq!(snapshot.chart.last().unwrap().label, "30 Ags 2024");
    assert_eq!(snapshot.metrics.signal.action, SignalAction::Buy);
    assert_eq!(snapshot.signal_color, "#34D399");
    assert_eq!(snapshot.news.len(), 4);
    assert_eq!(snapshot.key_metrics.sentiment_positive, 50);
    assert_eq!(snapshot.key_metrics.sentiment_negative, 25);
    assert_eq!(snapshot.key_metrics.anomaly_status, "Normal");

    let names: Vec<&str> = snapshot.sentiment_chart.iter().map(|b| b.name).collect();
    assert_eq!(names, vec!["Pos", "Neg", "Neu"]);
}

#[tokio::test]
async fn test_snapshot_for_falling_stock() {
    let snapshot = sample_service().snapshot("MSFT").await.unwrap();
    assert_eq!(snapshot.metrics.signal.action, SignalAction::Sell);
    assert!(!snapshot.metrics.signal.is_positive);
}

#[tokio::test]
async fn test_snapshot_lookup_is_case_insensitive() {
    let snapshot = sample_service().snapshot("googl").await.unwrap();
    assert_eq!(snapshot.code, "GOOGL");
}

#[tokio::test]
async fn test_snapshot_unknown_symbol() {
    assert!(sample_service().snapshot("NOPE").await.is_none());
}

#[tokio::test]
async fn test_fetch_failures_degrade_to_empty_data() {
    let metrics = Arc::new(Metrics::new().unwrap());
    let service = DashboardService::new(Arc::new(FailingProvider), DashboardConfig::default())
        .with_metrics(metrics.clone());

    let quotes = service.load_market().await;
    assert!(quotes.iter().all(|q| q.price == 0.0));

    let snapshot = service.snapshot("AAPL").await.unwrap();
    assert_eq!(snapshot.price, 0.0);
    assert!(snapshot.chart.is_empty());
    assert!(snapshot.news.is_empty());
    assert!(snapshot.sentiment_chart.is_empty());
    assert_eq!(snapshot.metrics.signal.action, SignalAction::Hold);
    assert_eq!(snapshot.key_metrics.sentiment_positive, 0);

    // 5 market quotes + 3 snapshot fetches
    assert_eq!(metrics.loader_errors_total.get(), 8);
    assert_eq!(metrics.snapshots_total.get(), 1);
}

#[test]
fn test_build_snapshot_orders_forecast_last_and_formats() {
    let meta = CompanyMeta::new("BBCA.JK", "Bank Central Asia", "Finance");
    let day = |d| NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Duration::days(d);
    let history = vec![
        PricePoint::new(day(0), 9000.0),
        PricePoint::forecast(day(3)),
        PricePoint::new(day(1), 9100.0),
        PricePoint::new(day(2), 9150.0),
    ];
    let news = (0..6)
        .map(|i| NewsItem::from_raw(i.to_string(), "t", None, Some("negative")))
        .collect();

    let snapshot = build_snapshot(&meta, 9150.0, &history, news, &DashboardConfig::default());

    assert_eq!(snapshot.display_code, "BBCA");
    assert_eq!(snapshot.price_display, "$9,150.00");
    assert!(snapshot.chart.last().unwrap().forecast);
    assert_eq!(snapshot.chart.last().unwrap().price, None);
    assert_eq!(snapshot.news.len(), 4);
    assert_eq!(snapshot.metrics.sentiment.percent_of(Sentiment::Negative), Some(100));
    assert_eq!(snapshot.metrics.volatility.regime, VolatilityRegime::LowVolatility);
    assert_eq!(snapshot.volatility_display, "0.55% (Low Volatility)");
}
