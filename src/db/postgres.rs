//! Direct Postgres access to the dashboard tables

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio_postgres::types::FromSql;
use tokio_postgres::{Client, NoTls, Row};

use crate::models::{NewsItem, PricePoint};
use crate::services::error::DataError;
use crate::services::market_data::MarketDataProvider;

pub struct PostgresProvider {
    client: Client,
}

impl PostgresProvider {
    pub async fn connect(database_url: &str) -> Result<Self, DataError> {
        let (client, connection) = tokio_postgres::connect(database_url, NoTls).await?;

        // Spawn connection task
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                tracing::error!(error = %e, "Postgres connection error");
            }
        });

        Ok(Self { client })
    }
}

/// Read one column, turning type mismatches into `DataError::Decode`
/// instead of panicking inside the row mapper.
fn column<'a, T: FromSql<'a>>(row: &'a Row, idx: usize) -> Result<T, DataError> {
    row.try_get(idx)
        .map_err(|e| DataError::Decode(format!("column {}: {}", idx, e)))
}

fn price_point_from_columns(
    date: Option<NaiveDate>,
    close: Option<f64>,
) -> Result<PricePoint, DataError> {
    let date = date.ok_or_else(|| DataError::Decode("stock_prices row without date".to_string()))?;
    Ok(PricePoint { date, close })
}

fn news_from_columns(
    id: Option<String>,
    title: Option<String>,
    source: Option<String>,
    label: Option<String>,
) -> Result<NewsItem, DataError> {
    let id = id.ok_or_else(|| DataError::Decode("news_sentiment row without id".to_string()))?;
    Ok(NewsItem::from_raw(
        id,
        title.unwrap_or_default(),
        source.as_deref(),
        label.as_deref(),
    ))
}

#[async_trait]
impl MarketDataProvider for PostgresProvider {
    fn name(&self) -> &'static str {
        "postgres"
    }

    async fn latest_close(&self, symbol: &str) -> Result<Option<f64>, DataError> {
        let row = self
            .client
            .query_opt(
                "SELECT close::float8 FROM stock_prices
                 WHERE symbol = $1
                 ORDER BY date DESC
                 LIMIT 1",
                &[&symbol],
            )
            .await?;
        match row {
            Some(r) => column::<Option<f64>>(&r, 0),
            None => Ok(None),
        }
    }

    async fn price_history(
        &self,
        symbol: &str,
        limit: usize,
    ) -> Result<Vec<PricePoint>, DataError> {
        let limit = limit as i64;
        let rows = self
            .client
            .query(
                "SELECT date::date, close::float8 FROM stock_prices
                 WHERE symbol = $1
                 ORDER BY date DESC
                 LIMIT $2",
                &[&symbol, &limit],
            )
            .await?;

        let mut points = rows
            .iter()
            .map(|row| price_point_from_columns(column(row, 0)?, column(row, 1)?))
            .collect::<Result<Vec<_>, _>>()?;

        // Reverse to get oldest first
        points.reverse();
        Ok(points)
    }

    async fn recent_news(&self, symbol: &str, limit: usize) -> Result<Vec<NewsItem>, DataError> {
        let limit = limit as i64;
        let rows = self
            .client
            .query(
                "SELECT id::text, title, source, sentiment_label FROM news_sentiment
                 WHERE symbol = $1
                 ORDER BY published_at DESC
                 LIMIT $2",
                &[&symbol, &limit],
            )
            .await?;

        rows.iter()
            .map(|row| {
                news_from_columns(
                    column(row, 0)?,
                    column(row, 1)?,
                    column(row, 2)?,
                    column(row, 3)?,
                )
            })
            .collect()
    }
}
