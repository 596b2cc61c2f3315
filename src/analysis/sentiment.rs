//! News sentiment breakdown

use crate::common::math;
use crate::models::{NewsItem, Sentiment, SentimentBreakdown, SentimentShare};

/// Output order of the breakdown, independent of input order.
const BUCKETS: [(Sentiment, &str); 3] = [
    (Sentiment::Positive, "Pos"),
    (Sentiment::Negative, "Neg"),
    (Sentiment::Neutral, "Neu"),
];

/// Calculate the percentage of news items per sentiment label
///
/// Each share is rounded independently, so the total may drift from 100 by
/// a point. No news yields an empty breakdown rather than zero bars.
pub fn compute_sentiment_breakdown(items: &[NewsItem]) -> SentimentBreakdown {
    if items.is_empty() {
        return SentimentBreakdown::default();
    }

    let total = items.len();
    let shares = BUCKETS
        .iter()
        .map(|&(sentiment, label)| {
            let count = items.iter().filter(|n| n.sentiment == sentiment).count();
            SentimentShare {
                label,
                sentiment,
                percent: math::share_percent(count, total),
            }
        })
        .collect();

    SentimentBreakdown { shares }
}
