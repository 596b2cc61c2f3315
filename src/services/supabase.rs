//! Supabase (PostgREST) market data provider

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::models::{NewsItem, PricePoint};
use crate::services::error::DataError;
use crate::services::market_data::MarketDataProvider;

const PRICES_TABLE: &str = "stock_prices";
const NEWS_TABLE: &str = "news_sentiment";

#[derive(Debug, Deserialize)]
struct PriceRow {
    date: String,
    close: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct CloseRow {
    close: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct NewsRow {
    id: Value,
    title: Option<String>,
    source: Option<String>,
    sentiment_label: Option<String>,
}

pub struct SupabaseProvider {
    base_url: Url,
    api_key: String,
    client: Client,
}

impl SupabaseProvider {
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self, DataError> {
        Self::with_client(base_url, api_key, Client::new())
    }

    pub fn with_client(
        base_url: &str,
        api_key: impl Into<String>,
        client: Client,
    ) -> Result<Self, DataError> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self {
            base_url,
            api_key: api_key.into(),
            client,
        })
    }

    fn table_url(&self, table: &str, params: &[(&str, String)]) -> Result<Url, DataError> {
        let mut url = self.base_url.join(&format!("rest/v1/{}", table))?;
        {
            let mut query = url.query_pairs_mut();
            for (key, value) in params {
                query.append_pair(key, value);
            }
        }
        Ok(url)
    }

    async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        params: &[(&str, String)],
    ) -> Result<Vec<T>, DataError> {
        let url = self.table_url(table, params)?;
        debug!(url = %url, "Supabase select");

        let response = self
            .client
            .get(url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DataError::Upstream {
                status: status.as_u16(),
                resource: table.to_string(),
            });
        }

        response.json::<Vec<T>>().await.map_err(DataError::from)
    }
}

/// Accepts plain dates as well as timestamp strings.
fn parse_row_date(raw: &str) -> Result<NaiveDate, DataError> {
    let day = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(day, "%Y-%m-%d")
        .map_err(|e| DataError::Decode(format!("bad date {:?}: {}", raw, e)))
}

fn id_to_string(id: &Value) -> String {
    match id {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[async_trait]
impl MarketDataProvider for SupabaseProvider {
    fn name(&self) -> &'static str {
        "supabase"
    }

    async fn latest_close(&self, symbol: &str) -> Result<Option<f64>, DataError> {
        let rows: Vec<CloseRow> = self
            .select(
                PRICES_TABLE,
                &[
                    ("select", "close".to_string()),
                    ("symbol", format!("eq.{}", symbol)),
                    ("order", "date.desc".to_string()),
                    ("limit", "1".to_string()),
                ],
            )
            .await?;
        Ok(rows.into_iter().next().and_then(|r| r.close))
    }

    async fn price_history(
        &self,
        symbol: &str,
        limit: usize,
    ) -> Result<Vec<PricePoint>, DataError> {
        let rows: Vec<PriceRow> = self
            .select(
                PRICES_TABLE,
                &[
                    ("select", "date,close".to_string()),
                    ("symbol", format!("eq.{}", symbol)),
                    ("order", "date.desc".to_string()),
                    ("limit", limit.to_string()),
                ],
            )
            .await?;

        let mut points = rows
            .iter()
            .map(|row| {
                Ok(PricePoint {
                    date: parse_row_date(&row.date)?,
                    close: row.close,
                })
            })
            .collect::<Result<Vec<_>, DataError>>()?;

        // Queried newest first
        points.reverse();
        Ok(points)
    }

    async fn recent_news(&self, symbol: &str, limit: usize) -> Result<Vec<NewsItem>, DataError> {
        let rows: Vec<NewsRow> = self
            .select(
                NEWS_TABLE,
                &[
                    ("select", "*".to_string()),
                    ("symbol", format!("eq.{}", symbol)),
                    ("order", "published_at.desc".to_string()),
                    ("limit", limit.to_string()),
                ],
            )
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                NewsItem::from_raw(
                    id_to_string(&row.id),
                    row.title.unwrap_or_default(),
                    row.source.as_deref(),
                    row.sentiment_label.as_deref(),
                )
            })
            .collect())
    }
}
