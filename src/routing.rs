//! Application router configuration.

use axum::{
    Json, Router,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;

use crate::{
    AppState,
    dashboard::{bar_chart_endpoint, combined_endpoint, pie_chart_endpoint, statistics_endpoint},
    endpoints,
    logging::logging_middleware,
    seed::seed_endpoint,
    stores::TransactionStore,
    transaction::list_transactions_endpoint,
};

/// Return a router with all the app's routes.
pub fn build_router<T>(state: AppState<T>) -> Router
where
    T: TransactionStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(endpoints::TRANSACTIONS, get(list_transactions_endpoint))
        .route(endpoints::SEED, get(seed_endpoint))
        .route(endpoints::STATISTICS, get(statistics_endpoint))
        .route(endpoints::BAR_CHART, get(bar_chart_endpoint))
        .route(endpoints::PIE_CHART, get(pie_chart_endpoint))
        .route(endpoints::COMBINED, get(combined_endpoint))
        .layer(middleware::from_fn(logging_middleware))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The response for requests to routes that do not exist.
async fn get_404_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "The requested resource could not be found" })),
    )
        .into_response()
}
