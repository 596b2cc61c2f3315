use chrono::Utc;
use dotenvy::dotenv;
use std::sync::Arc;
use stock_pulse::config::DashboardConfig;
use stock_pulse::dashboard::{DashboardService, DashboardSnapshot};
use stock_pulse::services::FixtureProvider;

/// Prints the dashboard for one symbol using the bundled sample data.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    let config = DashboardConfig::from_env()?;
    let symbol = std::env::args()
        .nth(1)
        .or_else(|| config.companies.first().map(|c| c.code.clone()))
        .ok_or("no symbol given and the catalog is empty")?;

    let codes: Vec<&str> = config.companies.iter().map(|c| c.code.as_str()).collect();
    let provider = Arc::new(FixtureProvider::sample(&codes, Utc::now().date_naive()));
    let service = DashboardService::new(provider, config);

    let snapshot = service
        .snapshot(&symbol)
        .await
        .ok_or_else(|| format!("unknown symbol: {}", symbol))?;
    print_snapshot(&snapshot);

    Ok(())
}

fn print_snapshot(snapshot: &DashboardSnapshot) {
    println!("{} - {} ({})", snapshot.display_code, snapshot.name, snapshot.sector);
    println!("  Price: {}", snapshot.price_display);
    println!(
        "  Signal: {} ({:+.2}%)",
        snapshot.metrics.signal.action.as_str(),
        snapshot.metrics.signal.change_percent
    );
    println!("  Volatility: {}", snapshot.volatility_display);
    if snapshot.sentiment_chart.is_empty() {
        println!("  Sentiment: no news");
    } else {
        for bar in &snapshot.sentiment_chart {
            println!("  Sentiment {}: {}%", bar.name, bar.value);
        }
    }
    println!("  News:");
    for (i, item) in snapshot.news.iter().enumerate() {
        println!(
            "    {}. {} [{}] ({})",
            i + 1,
            item.title,
            item.sentiment.as_str(),
            item.source
        );
    }
}
