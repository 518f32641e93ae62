//! Dashboard module
//!
//! Provides the monthly analytics views over the transaction collection:
//! summary statistics, a fixed price-bucket histogram, per-product counts,
//! and a combined payload bundling all three.

mod aggregation;
mod handlers;
mod models;
mod month;

pub use handlers::{
    bar_chart_endpoint, combined_endpoint, pie_chart_endpoint, statistics_endpoint,
};
pub use models::{CategoryCount, CombinedData, RangeCount, Statistics};
