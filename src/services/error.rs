//! Errors raised while loading market data

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    /// Provider is missing required configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network or HTTP error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("Upstream returned {status} for {resource}")]
    Upstream { status: u16, resource: String },

    /// Database query failed
    #[error("Database error: {0}")]
    Database(#[from] tokio_postgres::Error),

    /// Response payload could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}
