//! Market data sources feeding the dashboard.

pub mod error;
pub mod fixture;
pub mod market_data;
pub mod simulation;
pub mod supabase;

pub use error::DataError;
pub use fixture::FixtureProvider;
pub use market_data::MarketDataProvider;
pub use simulation::SimulatedProvider;
pub use supabase::SupabaseProvider;
