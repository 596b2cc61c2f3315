use serde::{Deserialize, Serialize};

pub const DEFAULT_NEWS_SOURCE: &str = "News Source";

/// Sentiment label attached to a news item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Normalize a raw label from a data source.
    ///
    /// Matching is case-insensitive; missing or unrecognized labels become
    /// `Neutral`.
    pub fn from_label(label: Option<&str>) -> Self {
        match label.map(|l| l.trim().to_lowercase()).as_deref() {
            Some("positive") => Sentiment::Positive,
            Some("negative") => Sentiment::Negative,
            _ => Sentiment::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }

    /// Chart color used by the dashboard for this label.
    pub fn color(&self) -> &'static str {
        match self {
            Sentiment::Positive => "#34d399",
            Sentiment::Negative => "#f47174",
            Sentiment::Neutral => "#60a5fa",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub source: String,
    pub sentiment: Sentiment,
}

impl NewsItem {
    /// Build an item from raw source fields, applying the ingestion rules:
    /// a missing source falls back to a generic label and the sentiment is
    /// normalized.
    pub fn from_raw(
        id: impl Into<String>,
        title: impl Into<String>,
        source: Option<&str>,
        sentiment_label: Option<&str>,
    ) -> Self {
        let source = source
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(DEFAULT_NEWS_SOURCE);
        Self {
            id: id.into(),
            title: title.into(),
            source: source.to_string(),
            sentiment: Sentiment::from_label(sentiment_label),
        }
    }
}
