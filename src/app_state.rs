//! Implements a struct that holds the state of the REST server.

use std::marker::{Send, Sync};

use crate::{pagination::PaginationConfig, stores::TransactionStore};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState<T>
where
    T: TransactionStore + Send + Sync,
{
    /// The config that controls how to display pages of data.
    pub pagination_config: PaginationConfig,
    /// The URL the seed operation fetches the transaction dataset from.
    pub seed_url: String,
    /// The HTTP client used to fetch the seed dataset.
    pub http_client: reqwest::Client,
    /// The store for managing the [Transaction](crate::Transaction) collection.
    pub transaction_store: T,
}

impl<T> AppState<T>
where
    T: TransactionStore + Send + Sync,
{
    /// Create a new [AppState].
    pub fn new(transaction_store: T, pagination_config: PaginationConfig, seed_url: &str) -> Self {
        Self {
            pagination_config,
            seed_url: seed_url.to_owned(),
            http_client: reqwest::Client::new(),
            transaction_store,
        }
    }
}
