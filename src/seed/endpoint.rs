//! The route handler for seeding the transaction collection.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::{AppState, Error, stores::TransactionStore};

use super::fetch::fetch_seed_dataset;

/// The response payload for a successful seed.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct SeedResponse {
    /// A confirmation message.
    pub message: String,
    /// How many records were inserted.
    pub inserted: usize,
    /// How many raw records were skipped during coercion.
    pub skipped: usize,
}

/// A route handler that replaces the whole transaction collection with the
/// external seed dataset.
///
/// The fetch happens before any write, so a failed fetch leaves the store
/// untouched. The replacement itself is atomic, see
/// [TransactionStore::replace_all].
pub async fn seed_endpoint<T>(
    State(state): State<AppState<T>>,
) -> Result<Json<SeedResponse>, Error>
where
    T: TransactionStore + Send + Sync,
{
    let dataset = fetch_seed_dataset(&state.http_client, &state.seed_url).await?;

    if dataset.skipped > 0 {
        tracing::warn!(
            "Skipped {} seed records with no price or date of sale.",
            dataset.skipped
        );
    }

    let mut store = state.transaction_store;
    let inserted = store.replace_all(dataset.transactions)?;

    tracing::info!("Seeded the transaction collection with {inserted} records.");

    Ok(Json(SeedResponse {
        message: "Database initialized with seed data".to_owned(),
        inserted,
        skipped: dataset.skipped,
    }))
}

#[cfg(test)]
mod seed_endpoint_tests {
    use std::sync::{Arc, Mutex};

    use axum::{Json, Router, http::StatusCode, routing::get};
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::{Value, json};
    use time::macros::datetime;

    use crate::{
        AppState, PaginationConfig, build_router,
        db::initialize,
        endpoints,
        stores::{SQLiteTransactionStore, TransactionQuery, TransactionStore},
        transaction::NewTransaction,
    };

    use super::SeedResponse;

    /// Serve `dataset` from a local HTTP server and return its URL.
    async fn spawn_upstream(dataset: Value) -> String {
        let upstream = Router::new().route("/dataset", get(move || async move { Json(dataset) }));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Could not bind the upstream listener.");
        let address = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, upstream)
                .await
                .expect("The upstream server failed.");
        });

        format!("http://{address}/dataset")
    }

    fn get_test_server(seed_url: &str) -> (TestServer, SQLiteTransactionStore) {
        let connection =
            Connection::open_in_memory().expect("Could not open database in memory.");
        initialize(&connection).expect("Could not initialize database.");

        let store = SQLiteTransactionStore::new(Arc::new(Mutex::new(connection)));
        let state = AppState::new(store.clone(), PaginationConfig::default(), seed_url);
        let server =
            TestServer::try_new(build_router(state)).expect("Could not create test server.");

        (server, store)
    }

    #[tokio::test]
    async fn seeding_replaces_store_contents_with_the_dataset() {
        let seed_url = spawn_upstream(json!([
            {
                "id": 1,
                "title": "Laptop",
                "description": "Thin and light",
                "price": 799.0,
                "dateOfSale": "2021-11-27T20:29:54+05:30",
                "sold": true
            },
            {
                "id": 2,
                "title": "Mouse",
                "description": "Wireless",
                "price": 25.0,
                "dateOfSale": "2021-12-01T08:00:00Z",
                "sold": false
            }
        ]))
        .await;
        let (server, mut store) = get_test_server(&seed_url);

        store
            .replace_all(vec![NewTransaction {
                title: "Stale".to_owned(),
                description: String::new(),
                price: 1.0,
                date_of_sale: datetime!(2020-01-01 0:00 UTC),
                sold: false,
            }])
            .unwrap();

        let response = server.get(endpoints::SEED).await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<SeedResponse>(),
            SeedResponse {
                message: "Database initialized with seed data".to_owned(),
                inserted: 2,
                skipped: 0,
            }
        );

        let transactions = store.get_page(&TransactionQuery::default()).unwrap();
        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0].title, "Laptop");
        assert_eq!(transactions[1].title, "Mouse");
    }

    #[tokio::test]
    async fn seeding_reports_skipped_records() {
        let seed_url = spawn_upstream(json!([
            {"title": "No price", "dateOfSale": "2022-01-01T00:00:00Z"},
            {"title": "Complete", "price": 10.0, "dateOfSale": "2022-01-01T00:00:00Z"}
        ]))
        .await;
        let (server, _) = get_test_server(&seed_url);

        let response = server.get(endpoints::SEED).await;

        response.assert_status_ok();
        let seed_response = response.json::<SeedResponse>();
        assert_eq!(seed_response.inserted, 1);
        assert_eq!(seed_response.skipped, 1);
    }

    #[tokio::test]
    async fn failed_fetch_leaves_store_untouched() {
        // Nothing is listening on this port.
        let (server, mut store) = get_test_server("http://127.0.0.1:1/dataset");

        store
            .replace_all(vec![NewTransaction {
                title: "Keep me".to_owned(),
                description: String::new(),
                price: 1.0,
                date_of_sale: datetime!(2020-01-01 0:00 UTC),
                sold: false,
            }])
            .unwrap();

        let response = server.get(endpoints::SEED).await;

        response.assert_status(StatusCode::BAD_GATEWAY);

        let transactions = store.get_page(&TransactionQuery::default()).unwrap();
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].title, "Keep me");
    }
}
