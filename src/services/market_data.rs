//! Market data provider interface shared by every data source.

use async_trait::async_trait;

use crate::models::{NewsItem, PricePoint};
use crate::services::error::DataError;

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Human-readable name used in logs
    fn name(&self) -> &'static str;

    /// Most recent close for a symbol, `None` when the symbol has no rows
    async fn latest_close(&self, symbol: &str) -> Result<Option<f64>, DataError>;

    /// Trailing `limit` closes, oldest first
    async fn price_history(&self, symbol: &str, limit: usize)
        -> Result<Vec<PricePoint>, DataError>;

    /// Up to `limit` news items, newest first, with normalized sentiment
    async fn recent_news(&self, symbol: &str, limit: usize) -> Result<Vec<NewsItem>, DataError>;
}
