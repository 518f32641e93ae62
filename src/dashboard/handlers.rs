//! Route handlers for the monthly analytics views.
//!
//! Each handler validates the `month` query parameter, selects the records in
//! the month window of the current calendar year, and aggregates them with
//! the pure functions in [aggregation](super::aggregation). The combined
//! handler reads the store once and feeds the same records to all three
//! aggregations.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use time::OffsetDateTime;

use crate::{
    AppState, Error,
    stores::{DateWindow, TransactionStore},
};

use super::{
    aggregation::{compute_bar_chart, compute_pie_chart, compute_statistics},
    models::{CategoryCount, CombinedData, RangeCount, Statistics},
    month::{month_window, parse_month},
};

/// The query parameters accepted by the month-scoped analytics endpoints.
///
/// `month` is kept as raw text so that a missing, non-numeric, or
/// out-of-range value all fail the same way.
#[derive(Debug, Deserialize)]
pub(crate) struct MonthParams {
    month: Option<String>,
}

impl MonthParams {
    /// Resolve the month window for the current calendar year.
    ///
    /// The window always uses the year at query time, regardless of the years
    /// present in the stored data.
    ///
    /// # Errors
    /// Returns [Error::InvalidMonth] before any store access if the month
    /// parameter is invalid.
    fn window(&self) -> Result<DateWindow, Error> {
        let month = parse_month(self.month.as_deref())?;
        let year = OffsetDateTime::now_utc().year();

        Ok(month_window(month, year))
    }
}

/// A route handler for the month's summary statistics.
pub async fn statistics_endpoint<T>(
    State(state): State<AppState<T>>,
    Query(params): Query<MonthParams>,
) -> Result<Json<Statistics>, Error>
where
    T: TransactionStore + Send + Sync,
{
    let window = params.window()?;
    let transactions = state.transaction_store.get_in_window(window)?;

    Ok(Json(compute_statistics(&transactions)))
}

/// A route handler for the month's price-bucket histogram.
pub async fn bar_chart_endpoint<T>(
    State(state): State<AppState<T>>,
    Query(params): Query<MonthParams>,
) -> Result<Json<Vec<RangeCount>>, Error>
where
    T: TransactionStore + Send + Sync,
{
    let window = params.window()?;
    let transactions = state.transaction_store.get_in_window(window)?;

    Ok(Json(compute_bar_chart(&transactions)))
}

/// A route handler for the month's per-product counts.
pub async fn pie_chart_endpoint<T>(
    State(state): State<AppState<T>>,
    Query(params): Query<MonthParams>,
) -> Result<Json<Vec<CategoryCount>>, Error>
where
    T: TransactionStore + Send + Sync,
{
    let window = params.window()?;
    let transactions = state.transaction_store.get_in_window(window)?;

    Ok(Json(compute_pie_chart(&transactions)))
}

/// A route handler bundling all three analytics views into one payload.
///
/// The store is read once; the three views are computed from the same records.
pub async fn combined_endpoint<T>(
    State(state): State<AppState<T>>,
    Query(params): Query<MonthParams>,
) -> Result<Json<CombinedData>, Error>
where
    T: TransactionStore + Send + Sync,
{
    let window = params.window()?;
    let transactions = state.transaction_store.get_in_window(window)?;

    Ok(Json(CombinedData {
        statistics: compute_statistics(&transactions),
        bar_chart_data: compute_bar_chart(&transactions),
        pie_chart_data: compute_pie_chart(&transactions),
    }))
}
