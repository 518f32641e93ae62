//! Contains the trait and implementations for objects that store the
//! [Transaction](crate::Transaction) collection.

mod sqlite;
mod transaction;

pub use sqlite::SQLiteTransactionStore;
pub use transaction::{DateWindow, TransactionQuery, TransactionStore};
