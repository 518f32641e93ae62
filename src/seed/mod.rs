//! Seeding the transaction collection from the external dataset.
//!
//! This module contains:
//! - The HTTP fetch and type coercion for the raw dataset
//! - The route handler that replaces the store contents with the fetched set

mod endpoint;
mod fetch;

pub use endpoint::{SeedResponse, seed_endpoint};
pub use fetch::DEFAULT_SEED_URL;
