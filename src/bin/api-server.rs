//! Stock Pulse API Server
//!
//! Serves the stock picker, per-symbol dashboard snapshots and the metrics
//! engine over HTTP.

use chrono::Utc;
use dotenvy::dotenv;
use std::sync::Arc;
use stock_pulse::config::{DashboardConfig, DataSource};
use stock_pulse::core::http::start_server;
use stock_pulse::dashboard::DashboardService;
use stock_pulse::db::PostgresProvider;
use stock_pulse::logging;
use stock_pulse::metrics::Metrics;
use stock_pulse::services::{
    FixtureProvider, MarketDataProvider, SimulatedProvider, SupabaseProvider,
};
use tokio::signal;
use tracing::{error, info};

async fn build_provider(
    config: &DashboardConfig,
) -> Result<Arc<dyn MarketDataProvider>, Box<dyn std::error::Error>> {
    let provider: Arc<dyn MarketDataProvider> = match config.data_source {
        DataSource::Supabase => {
            let url = config
                .supabase_url
                .as_deref()
                .ok_or("SUPABASE_URL must be set for the supabase data source")?;
            let key = config
                .supabase_key
                .as_deref()
                .ok_or("SUPABASE_ANON_KEY must be set for the supabase data source")?;
            Arc::new(SupabaseProvider::new(url, key)?)
        }
        DataSource::Postgres => {
            let url = config
                .database_url
                .as_deref()
                .ok_or("DATABASE_URL must be set for the postgres data source")?;
            Arc::new(PostgresProvider::connect(url).await?)
        }
        DataSource::Fixture => {
            let codes: Vec<&str> = config.companies.iter().map(|c| c.code.as_str()).collect();
            Arc::new(FixtureProvider::sample(&codes, Utc::now().date_naive()))
        }
        DataSource::Simulation => {
            let codes: Vec<&str> = config.companies.iter().map(|c| c.code.as_str()).collect();
            info!(seed = config.simulation_seed, "Generating simulated market data");
            Arc::new(SimulatedProvider::new(
                &codes,
                Utc::now().date_naive(),
                config.simulation_seed,
            ))
        }
    };
    Ok(provider)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    logging::init_logging();

    let config = DashboardConfig::from_env()?;
    let port = config.port;

    let env = stock_pulse::config::get_environment();
    info!("Starting Stock Pulse API Server");
    info!(environment = %env, data_source = ?config.data_source, "Environment");

    let provider = build_provider(&config).await?;
    let metrics = Arc::new(Metrics::new()?);
    let dashboard = Arc::new(DashboardService::new(provider, config).with_metrics(metrics.clone()));

    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(port, dashboard, metrics).await {
            error!(error = %e, "HTTP server error");
        }
    });

    info!(port = port, "API server started, waiting for shutdown signal...");
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
