//! Product transaction management.
//!
//! This module contains everything related to the transaction collection:
//! - The `Transaction` and `NewTransaction` models
//! - The route handler for the paginated, searchable transaction list

mod core;
mod list_endpoint;

pub use core::{NewTransaction, Transaction};
pub use list_endpoint::list_transactions_endpoint;
