//! Dashboard view state and snapshot assembly.

pub mod selection;
pub mod service;

pub use selection::SelectionState;
pub use service::{
    build_snapshot, ChartPoint, DashboardService, DashboardSnapshot, KeyMetrics, SentimentBar,
};
