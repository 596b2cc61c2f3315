//! Unit tests for the sentiment breakdown

use stock_pulse::analysis::compute_sentiment_breakdown;
use stock_pulse::models::{NewsItem, Sentiment};

fn news(labels: &[Sentiment]) -> Vec<NewsItem> {
    labels
        .iter()
        .enumerate()
        .map(|(i, &sentiment)| NewsItem {
            id: i.to_string(),
            title: format!("Headline {}", i),
            source: "Wire".to_string(),
            sentiment,
        })
        .collect()
}

#[test]
fn test_breakdown_empty_news() {
    let breakdown = compute_sentiment_breakdown(&[]);
    assert!(breakdown.is_empty());
    assert!(breakdown.shares.is_empty());
}

#[test]
fn test_breakdown_percentages() {
    use Sentiment::*;
    let breakdown = compute_sentiment_breakdown(&news(&[Positive, Positive, Negative, Neutral]));
    let values: Vec<(&str, u32)> = breakdown.shares.iter().map(|s| (s.label, s.percent)).collect();
    assert_eq!(values, vec![("Pos", 50), ("Neg", 25), ("Neu", 25)]);
}

#[test]
fn test_breakdown_order_is_fixed() {
    use Sentiment::*;
    let breakdown = compute_sentiment_breakdown(&news(&[Neutral, Negative, Neutral, Neutral]));
    let labels: Vec<&str> = breakdown.shares.iter().map(|s| s.label).collect();
    assert_eq!(labels, vec!["Pos", "Neg", "Neu"]);
    assert_eq!(breakdown.percent_of(Positive), Some(0));
    assert_eq!(breakdown.percent_of(Negative), Some(25));
    assert_eq!(breakdown.percent_of(Neutral), Some(75));
}

#[test]
fn test_breakdown_rounding_drift_is_kept() {
    use Sentiment::*;
    let breakdown = compute_sentiment_breakdown(&news(&[Positive, Negative, Neutral]));
    let total: u32 = breakdown.shares.iter().map(|s| s.percent).sum();
    assert_eq!(total, 99);
    assert!(breakdown.shares.iter().all(|s| s.percent == 33));
}

#[test]
fn test_breakdown_percentages_in_range() {
    use Sentiment::*;
    let breakdown = compute_sentiment_breakdown(&news(&[Positive; 7]));
    assert_eq!(breakdown.percent_of(Positive), Some(100));
    assert!(breakdown.shares.iter().all(|s| s.percent <= 100));
}
