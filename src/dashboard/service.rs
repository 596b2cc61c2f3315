//! Assembles display-ready dashboard snapshots from a data provider.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, warn};

use crate::analysis::{self, MarketMetrics};
use crate::common::format;
use crate::config::DashboardConfig;
use crate::metrics::Metrics;
use crate::models::{CompanyMeta, NewsItem, PricePoint, Sentiment, StockQuote};
use crate::services::{DataError, MarketDataProvider};

pub const ANOMALY_STATUS_NORMAL: &str = "Normal";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub date: NaiveDate,
    pub price: Option<f64>,
    pub forecast: bool,
}

impl From<&PricePoint> for ChartPoint {
    fn from(point: &PricePoint) -> Self {
        Self {
            label: format::format_full_date(point.date),
            date: point.date,
            price: point.close,
            forecast: point.is_forecast(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentBar {
    pub name: &'static str,
    pub value: u32,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyMetrics {
    pub change_percent: f64,
    pub sentiment_positive: u32,
    pub sentiment_negative: u32,
    pub anomaly_status: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub code: String,
    pub display_code: String,
    pub name: String,
    pub sector: String,
    pub price: f64,
    pub price_display: String,
    pub chart: Vec<ChartPoint>,
    pub news: Vec<NewsItem>,
    pub metrics: MarketMetrics,
    pub volatility_display: String,
    pub signal_color: &'static str,
    pub sentiment_chart: Vec<SentimentBar>,
    pub key_metrics: KeyMetrics,
}

pub struct DashboardService {
    provider: Arc<dyn MarketDataProvider>,
    config: DashboardConfig,
    metrics: Option<Arc<Metrics>>,
}

impl DashboardService {
    pub fn new(provider: Arc<dyn MarketDataProvider>, config: DashboardConfig) -> Self {
        Self {
            provider,
            config,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn company(&self, code: &str) -> Option<&CompanyMeta> {
        self.config.company(code)
    }

    /// Latest quote for every catalog entry, in catalog order. A symbol
    /// without rows, or whose fetch failed, is listed with price 0.
    pub async fn load_market(&self) -> Vec<StockQuote> {
        let mut quotes = Vec::with_capacity(self.config.companies.len());
        for meta in &self.config.companies {
            let price = self
                .recover(&meta.code, "latest close", self.provider.latest_close(&meta.code).await)
                .flatten()
                .unwrap_or(0.0);
            quotes.push(StockQuote::from_meta(meta, price));
        }
        info!(
            provider = self.provider.name(),
            count = quotes.len(),
            "Loaded market quotes"
        );
        quotes
    }

    /// Full dashboard view for one catalog symbol, `None` if the symbol is
    /// not in the catalog.
    pub async fn snapshot(&self, code: &str) -> Option<DashboardSnapshot> {
        let meta = self.company(code)?.clone();
        let symbol = meta.code.as_str();

        let (price, history, news) = tokio::join!(
            self.provider.latest_close(symbol),
            self.provider.price_history(symbol, self.config.history_window),
            self.provider.recent_news(symbol, self.config.news_limit),
        );
        let price = self.recover(symbol, "latest close", price).flatten().unwrap_or(0.0);
        let history = self.recover(symbol, "price history", history).unwrap_or_default();
        let news = self.recover(symbol, "news", news).unwrap_or_default();

        if let Some(metrics) = &self.metrics {
            metrics.snapshots_total.inc();
        }

        Some(build_snapshot(&meta, price, &history, news, &self.config))
    }

    /// Fetch failures degrade to empty data; they are logged and counted.
    fn recover<T>(&self, symbol: &str, what: &str, result: Result<T, DataError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(
                    provider = self.provider.name(),
                    symbol = %symbol,
                    error = %e,
                    "Failed to load {}", what
                );
                if let Some(metrics) = &self.metrics {
                    metrics.loader_errors_total.inc();
                }
                None
            }
        }
    }
}

/// Pure assembly of a snapshot from already-loaded data.
pub fn build_snapshot(
    meta: &CompanyMeta,
    price: f64,
    history: &[PricePoint],
    mut news: Vec<NewsItem>,
    config: &DashboardConfig,
) -> DashboardSnapshot {
    let ordered = format::order_history_first(history);
    let metrics = analysis::analyze(&ordered, &news, config.thresholds);

    let sentiment_chart = metrics
        .sentiment
        .shares
        .iter()
        .map(|share| SentimentBar {
            name: share.label,
            value: share.percent,
            color: share.sentiment.color(),
        })
        .collect();

    let key_metrics = KeyMetrics {
        change_percent: metrics.signal.change_percent,
        sentiment_positive: metrics.sentiment.percent_of(Sentiment::Positive).unwrap_or(0),
        sentiment_negative: metrics.sentiment.percent_of(Sentiment::Negative).unwrap_or(0),
        anomaly_status: ANOMALY_STATUS_NORMAL,
    };

    news.truncate(config.news_feed_size);

    DashboardSnapshot {
        code: meta.code.clone(),
        display_code: format::display_code(&meta.code).to_string(),
        name: meta.name.clone(),
        sector: meta.sector.clone(),
        price,
        price_display: format!("${}", format::format_price(price)),
        chart: ordered.iter().map(ChartPoint::from).collect(),
        news,
        volatility_display: format!(
            "{:.2}% ({})",
            metrics.volatility.volatility_percent,
            metrics.volatility.regime.label()
        ),
        signal_color: metrics.signal.action.color(),
        sentiment_chart,
        key_metrics,
        metrics,
    }
}
