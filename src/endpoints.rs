//! The API endpoints URIs.

/// The route to list transactions with search and pagination.
pub const TRANSACTIONS: &str = "/api/transactions";
/// The route to seed the transaction collection from the external dataset.
pub const SEED: &str = "/api/transactions/init";
/// The route for monthly summary statistics.
pub const STATISTICS: &str = "/api/transactions/statistics";
/// The route for the monthly price-bucket histogram.
pub const BAR_CHART: &str = "/api/transactions/bar-chart";
/// The route for monthly per-product counts.
pub const PIE_CHART: &str = "/api/transactions/pie-chart";
/// The route bundling statistics, bar chart, and pie chart into one response.
pub const COMBINED: &str = "/api/transactions/combined-data";

// These tests are here so that we know when we call `Uri::from_shared` it will not panic.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::TRANSACTIONS);
        assert_endpoint_is_valid_uri(endpoints::SEED);
        assert_endpoint_is_valid_uri(endpoints::STATISTICS);
        assert_endpoint_is_valid_uri(endpoints::BAR_CHART);
        assert_endpoint_is_valid_uri(endpoints::PIE_CHART);
        assert_endpoint_is_valid_uri(endpoints::COMBINED);
    }
}
