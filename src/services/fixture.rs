//! In-memory provider for offline demos and tests

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};

use crate::models::{NewsItem, PricePoint, Sentiment};
use crate::services::error::DataError;
use crate::services::market_data::MarketDataProvider;

#[derive(Debug, Clone, Default)]
pub struct FixtureProvider {
    prices: HashMap<String, Vec<PricePoint>>,
    news: HashMap<String, Vec<NewsItem>>,
}

impl FixtureProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a symbol's series; points are stored oldest first.
    pub fn with_prices(mut self, symbol: &str, mut points: Vec<PricePoint>) -> Self {
        points.sort_by_key(|p| p.date);
        self.prices.insert(symbol.to_string(), points);
        self
    }

    /// Set a symbol's news; items are stored newest first.
    pub fn with_news(mut self, symbol: &str, items: Vec<NewsItem>) -> Self {
        self.news.insert(symbol.to_string(), items);
        self
    }

    /// Deterministic sample data for every given symbol: a 30-day zig-zag
    /// series around a per-symbol base price and a handful of headlines.
    pub fn sample(symbols: &[&str], end: NaiveDate) -> Self {
        let mut provider = Self::new();
        for (idx, symbol) in symbols.iter().enumerate() {
            let base = 100.0 + 50.0 * idx as f64;
            let drift = if idx % 2 == 0 { 0.4 } else { -0.3 };
            let points = (0..30)
                .map(|day| {
                    let date = end - Duration::days(29 - day);
                    let wiggle = if day % 2 == 0 { 1.2 } else { -0.8 };
                    PricePoint::new(date, base + drift * day as f64 + wiggle)
                })
                .collect();

            let news = [
                (Sentiment::Positive, "beats quarterly estimates"),
                (Sentiment::Neutral, "holds annual shareholder meeting"),
                (Sentiment::Negative, "faces regulatory review"),
                (Sentiment::Positive, "expands product line"),
            ]
            .iter()
            .enumerate()
            .map(|(n, (sentiment, headline))| NewsItem {
                id: format!("{}-{}", symbol, n),
                title: format!("{} {}", symbol, headline),
                source: "Market Wire".to_string(),
                sentiment: *sentiment,
            })
            .collect();

            provider = provider.with_prices(symbol, points).with_news(symbol, news);
        }
        provider
    }
}

#[async_trait]
impl MarketDataProvider for FixtureProvider {
    fn name(&self) -> &'static str {
        "fixture"
    }

    async fn latest_close(&self, symbol: &str) -> Result<Option<f64>, DataError> {
        Ok(self
            .prices
            .get(symbol)
            .and_then(|points| points.iter().rev().find_map(PricePoint::historical_close)))
    }

    async fn price_history(
        &self,
        symbol: &str,
        limit: usize,
    ) -> Result<Vec<PricePoint>, DataError> {
        let points = self.prices.get(symbol).map(Vec::as_slice).unwrap_or_default();
        let start = points.len().saturating_sub(limit);
        Ok(points[start..].to_vec())
    }

    async fn recent_news(&self, symbol: &str, limit: usize) -> Result<Vec<NewsItem>, DataError> {
        Ok(self
            .news
            .get(symbol)
            .map(|items| items.iter().take(limit).cloned().collect())
            .unwrap_or_default())
    }
}
