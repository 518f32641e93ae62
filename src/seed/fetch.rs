//! Fetching and coercing the external seed dataset.

use serde::Deserialize;
use time::{OffsetDateTime, UtcOffset};

use crate::{Error, transaction::NewTransaction};

/// The production dataset the seed operation fetches by default.
pub const DEFAULT_SEED_URL: &str = "https://s3.amazonaws.com/roxiler.com/product_transaction.json";

/// A raw dataset record of unknown shape.
///
/// Every field is optional so that records can be inspected after
/// deserialization; unknown fields in the dataset are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RawTransaction {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    price: Option<f64>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    date_of_sale: Option<OffsetDateTime>,
    #[serde(default)]
    sold: Option<bool>,
}

/// The outcome of coercing the raw dataset into typed records.
#[derive(Debug, PartialEq)]
pub(super) struct CoercedDataset {
    /// The records that passed coercion, in dataset order.
    pub(super) transactions: Vec<NewTransaction>,
    /// How many raw records were skipped for missing a price or date of sale.
    pub(super) skipped: usize,
}

/// Coerce raw dataset records into [NewTransaction]s.
///
/// A record without a price or a date of sale is skipped and counted rather
/// than stored with made-up values, since both fields feed the analytics
/// views. Missing titles and descriptions become empty strings, a missing
/// sold flag becomes `false`, and dates of sale are normalized to UTC.
pub(super) fn coerce_dataset(raw_records: Vec<RawTransaction>) -> CoercedDataset {
    let mut transactions = Vec::with_capacity(raw_records.len());
    let mut skipped = 0;

    for record in raw_records {
        let (Some(price), Some(date_of_sale)) = (record.price, record.date_of_sale) else {
            skipped += 1;
            continue;
        };

        transactions.push(NewTransaction {
            title: record.title.unwrap_or_default(),
            description: record.description.unwrap_or_default(),
            price,
            date_of_sale: date_of_sale.to_offset(UtcOffset::UTC),
            sold: record.sold.unwrap_or(false),
        });
    }

    CoercedDataset {
        transactions,
        skipped,
    }
}

/// Fetch the seed dataset from `url` and coerce it into typed records.
///
/// # Errors
/// Returns [Error::UpstreamFetch] if the request fails, the response has an
/// error status, or the body is not a JSON array of records.
pub(super) async fn fetch_seed_dataset(
    client: &reqwest::Client,
    url: &str,
) -> Result<CoercedDataset, Error> {
    let raw_records = client
        .get(url)
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(|error| Error::UpstreamFetch(error.to_string()))?
        .json::<Vec<RawTransaction>>()
        .await
        .map_err(|error| Error::UpstreamFetch(error.to_string()))?;

    Ok(coerce_dataset(raw_records))
}
