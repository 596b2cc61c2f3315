//! Randomized market data for demos
//!
//! Prices follow a bounded random walk and every headline gets a random
//! sentiment. Output is fully determined by the seed, so the same
//! `SIMULATION_SEED` always serves the same dashboard.

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::common::math::round_to;
use crate::models::{NewsItem, PricePoint, Sentiment};
use crate::services::error::DataError;
use crate::services::fixture::FixtureProvider;
use crate::services::market_data::MarketDataProvider;

pub const SIMULATED_DAYS: i64 = 30;

/// Largest single-day move, as a fraction of the previous close.
const MAX_DAILY_MOVE: f64 = 0.03;

const HEADLINES: [&str; 6] = [
    "reports quarterly earnings",
    "announces new product line",
    "faces regulatory scrutiny",
    "updates full-year guidance",
    "signs strategic partnership",
    "sees analyst rating change",
];

pub struct SimulatedProvider {
    data: FixtureProvider,
}

impl SimulatedProvider {
    /// Generate a series and a news feed for every symbol up front.
    pub fn new(symbols: &[&str], end: NaiveDate, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut data = FixtureProvider::new();

        for symbol in symbols {
            let points = random_walk(&mut rng, end);
            let news = random_headlines(&mut rng, symbol);
            data = data.with_prices(symbol, points).with_news(symbol, news);
        }

        Self { data }
    }
}

fn random_walk(rng: &mut StdRng, end: NaiveDate) -> Vec<PricePoint> {
    let mut close: f64 = rng.random_range(50.0..500.0);
    (0..SIMULATED_DAYS)
        .map(|day| {
            if day > 0 {
                close *= 1.0 + rng.random_range(-MAX_DAILY_MOVE..=MAX_DAILY_MOVE);
            }
            let date = end - Duration::days(SIMULATED_DAYS - 1 - day);
            PricePoint::new(date, round_to(close, 2))
        })
        .collect()
}

fn random_headlines(rng: &mut StdRng, symbol: &str) -> Vec<NewsItem> {
    let count = rng.random_range(3..=8);
    (0..count)
        .map(|n| {
            let sentiment = match rng.random_range(0..3) {
                0 => Sentiment::Positive,
                1 => Sentiment::Negative,
                _ => Sentiment::Neutral,
            };
            let headline = HEADLINES[rng.random_range(0..HEADLINES.len())];
            let source = if rng.random_bool(0.5) {
                "Market Wire"
            } else {
                "Finance Daily"
            };
            NewsItem {
                id: format!("{}-sim-{}", symbol, n),
                title: format!("{} {}", symbol, headline),
                source: source.to_string(),
                sentiment,
            }
        })
        .collect()
}

#[async_trait]
impl MarketDataProvider for SimulatedProvider {
    fn name(&self) -> &'static str {
        "simulation"
    }

    async fn latest_close(&self, symbol: &str) -> Result<Option<f64>, DataError> {
        self.data.latest_close(symbol).await
    }

    async fn price_history(
        &self,
        symbol: &str,
        limit: usize,
    ) -> Result<Vec<PricePoint>, DataError> {
        self.data.price_history(symbol, limit).await
    }

    async fn recent_news(&self, symbol: &str, limit: usize) -> Result<Vec<NewsItem>, DataError> {
        self.data.recent_news(symbol, limit).await
    }
}
