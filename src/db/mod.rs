//! Database-backed data sources

pub mod postgres;

pub use postgres::PostgresProvider;
