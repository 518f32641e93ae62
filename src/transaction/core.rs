//! Defines the core data models for product transactions.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::database_id::TransactionId;

/// A record of a product being listed for sale, and whether it sold.
///
/// Transactions are immutable once stored. The whole collection is replaced
/// in one go by the seed operation, there are no per-record writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// The name of the product.
    pub title: String,
    /// A text description of the product.
    pub description: String,
    /// The listed price of the product.
    pub price: f64,
    /// When the sale was recorded. Normalized to UTC at ingestion.
    #[serde(with = "time::serde::rfc3339")]
    pub date_of_sale: OffsetDateTime,
    /// Whether the product sold.
    pub sold: bool,
}

/// A transaction that has not been assigned a database ID yet.
///
/// Produced by coercing raw seed-dataset records, and consumed by
/// [TransactionStore::replace_all](crate::stores::TransactionStore::replace_all).
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    /// The name of the product.
    pub title: String,
    /// A text description of the product.
    pub description: String,
    /// The listed price of the product.
    pub price: f64,
    /// When the sale was recorded.
    pub date_of_sale: OffsetDateTime,
    /// Whether the product sold.
    pub sold: bool,
}
