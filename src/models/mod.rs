//! Shared data models spanning the loader, analysis and HTTP layers.

pub mod market;
pub mod news;
pub mod signal;

pub use market::{order_series, CompanyMeta, PricePoint, SeriesError, StockQuote};
pub use news::{NewsItem, Sentiment, DEFAULT_NEWS_SOURCE};
pub use signal::{
    SentimentBreakdown, SentimentShare, SignalAction, SignalThresholds, ThresholdError,
    TrendSignal, VolatilityRegime, VolatilityResult,
};
