//! Stock dashboard backend: market data loaders, the pure metrics engine
//! (volatility, trend signal, sentiment breakdown) and the HTTP API that
//! serves display-ready snapshots.

pub mod analysis;
pub mod common;
pub mod config;
pub mod core;
pub mod dashboard;
pub mod db;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
