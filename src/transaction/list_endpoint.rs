//! The route handler for the paginated, searchable transaction list.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::{
    AppState, Error,
    stores::{TransactionQuery, TransactionStore},
    transaction::Transaction,
};

/// The query parameters for the transaction list.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListParams {
    search: Option<String>,
    page: Option<u64>,
    per_page: Option<u64>,
}

/// A route handler for listing one page of transactions.
///
/// Records match when their title, description, or price rendered as text
/// contains `search` as a case-insensitive substring; an empty or absent
/// search matches everything. Page numbers are 1-based; requesting a page
/// past the end yields an empty array.
pub async fn list_transactions_endpoint<T>(
    State(state): State<AppState<T>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Transaction>>, Error>
where
    T: TransactionStore + Send + Sync,
{
    let config = &state.pagination_config;
    let query = TransactionQuery {
        search: params.search.unwrap_or_default(),
        page: params.page.unwrap_or(config.default_page).max(1),
        per_page: params.per_page.unwrap_or(config.default_page_size),
    };

    Ok(Json(state.transaction_store.get_page(&query)?))
}
