//! Market metrics engine: pure reductions from a price series and a news
//! list to display-ready values. Nothing here performs I/O or keeps state.

pub mod sentiment;
pub mod trend;
pub mod volatility;

pub use sentiment::*;
pub use trend::*;
pub use volatility::*;

use serde::Serialize;

use crate::models::{
    NewsItem, PricePoint, SentimentBreakdown, SignalThresholds, TrendSignal, VolatilityResult,
};

/// All derived metrics for one symbol's current window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketMetrics {
    pub volatility: VolatilityResult,
    pub signal: TrendSignal,
    pub sentiment: SentimentBreakdown,
}

/// Run every calculator over the same input snapshot.
pub fn analyze(
    series: &[PricePoint],
    news: &[NewsItem],
    thresholds: SignalThresholds,
) -> MarketMetrics {
    MarketMetrics {
        volatility: compute_volatility(series),
        signal: compute_signal(series, thresholds),
        sentiment: compute_sentiment_breakdown(news),
    }
}
