//! Shared response-model structs for the analytics views.

use serde::{Deserialize, Serialize};

/// Summary statistics for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// The summed price of the month's sold records.
    pub total_sale_amount: f64,
    /// How many of the month's records sold.
    pub total_sold_items: usize,
    /// How many of the month's records did not sell.
    pub total_not_sold_items: usize,
}

/// One price bucket of the monthly histogram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeCount {
    /// The bucket's label, e.g. "101-200".
    pub range: String,
    /// How many of the month's records have a price in the bucket.
    pub count: usize,
}

/// One product slice of the monthly pie chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    /// The product title.
    pub category: String,
    /// How many of the month's records carry this title.
    pub count: usize,
}

/// The bundled payload of all three analytics views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedData {
    /// The month's summary statistics.
    pub statistics: Statistics,
    /// The month's price-bucket histogram.
    pub bar_chart_data: Vec<RangeCount>,
    /// The month's per-product counts.
    pub pie_chart_data: Vec<CategoryCount>,
}
