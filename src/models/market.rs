use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One row of a symbol's price series.
///
/// `close` is `None` for forecast-only rows appended after the historical
/// window; those rows never take part in volatility or trend math.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    #[serde(default)]
    pub close: Option<f64>,
}

impl PricePoint {
    pub fn new(date: NaiveDate, close: f64) -> Self {
        Self {
            date,
            close: Some(close),
        }
    }

    pub fn forecast(date: NaiveDate) -> Self {
        Self { date, close: None }
    }

    /// Close price usable in calculations (present and finite).
    pub fn historical_close(&self) -> Option<f64> {
        self.close.filter(|c| c.is_finite())
    }

    pub fn is_forecast(&self) -> bool {
        self.close.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeriesError {
    #[error("duplicate price point for {0}")]
    DuplicateDate(NaiveDate),
}

/// Sort a caller-supplied series oldest first.
///
/// The calculators assume ascending, unique dates; a repeated date is
/// rejected rather than guessing which close wins.
pub fn order_series(mut points: Vec<PricePoint>) -> Result<Vec<PricePoint>, SeriesError> {
    points.sort_by_key(|p| p.date);
    if let Some(pair) = points.windows(2).find(|w| w[0].date == w[1].date) {
        return Err(SeriesError::DuplicateDate(pair[1].date));
    }
    Ok(points)
}

/// Static description of a tradable company shown in the stock picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyMeta {
    pub code: String,
    pub name: String,
    pub sector: String,
}

impl CompanyMeta {
    pub fn new(code: &str, name: &str, sector: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            sector: sector.to_string(),
        }
    }
}

/// Latest quote for a catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockQuote {
    pub code: String,
    pub name: String,
    pub sector: String,
    pub price: f64,
}

impl StockQuote {
    pub fn from_meta(meta: &CompanyMeta, price: f64) -> Self {
        Self {
            code: meta.code.clone(),
            name: meta.name.clone(),
            sector: meta.sector.clone(),
            price,
        }
    }
}
