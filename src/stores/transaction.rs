//! Defines the transaction store trait.

use time::OffsetDateTime;

use crate::{
    Error,
    transaction::{NewTransaction, Transaction},
};

/// Handles the bulk replacement and retrieval of product transactions.
pub trait TransactionStore {
    /// Replace the entire contents of the store with `transactions`.
    ///
    /// The replacement must be atomic: readers observe either the old record
    /// set or the new one, never an empty store in between.
    ///
    /// Returns the number of records inserted.
    fn replace_all(&mut self, transactions: Vec<NewTransaction>) -> Result<usize, Error>;

    /// Retrieve one page of transactions in the way defined by `query`.
    fn get_page(&self, query: &TransactionQuery) -> Result<Vec<Transaction>, Error>;

    /// Retrieve transactions whose date of sale falls within `window`, in
    /// insertion order.
    fn get_in_window(&self, window: DateWindow) -> Result<Vec<Transaction>, Error>;
}

/// Defines how transactions should be fetched from [TransactionStore::get_page].
///
/// `search` matches records whose title, description, or price rendered as
/// text contains it as a case-insensitive substring. An empty search matches
/// every record.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionQuery {
    /// Free-text filter. The empty string matches all records.
    pub search: String,
    /// The 1-based page number. Values below 1 are treated as page 1.
    pub page: u64,
    /// The number of records per page.
    pub per_page: u64,
}

impl Default for TransactionQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            page: 1,
            per_page: 10,
        }
    }
}

/// A half-open date-time range `[start, end)` used to scope queries to a
/// calendar month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateWindow {
    /// The first instant inside the window.
    pub start: OffsetDateTime,
    /// The first instant after the window.
    pub end: OffsetDateTime,
}
