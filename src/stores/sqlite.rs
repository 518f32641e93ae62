//! Implements a SQLite backed transaction store.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row, types::Type};
use time::OffsetDateTime;

use crate::{
    Error,
    stores::transaction::{DateWindow, TransactionQuery, TransactionStore},
    transaction::{NewTransaction, Transaction},
};

const SELECT_COLUMNS: &str = "id, title, description, price, date_of_sale, sold";

/// Stores product transactions in a SQLite database.
///
/// Dates of sale are stored as unix timestamps so that month windows can be
/// compared numerically in SQL.
#[derive(Debug, Clone)]
pub struct SQLiteTransactionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteTransactionStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    fn map_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
        let timestamp: i64 = row.get(4)?;
        let date_of_sale = OffsetDateTime::from_unix_timestamp(timestamp).map_err(|error| {
            rusqlite::Error::FromSqlConversionFailure(4, Type::Integer, Box::new(error))
        })?;

        Ok(Transaction {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            price: row.get(3)?,
            date_of_sale,
            sold: row.get(5)?,
        })
    }
}

impl TransactionStore for SQLiteTransactionStore {
    /// Replace the entire contents of the store with `transactions`.
    ///
    /// The delete and the bulk insert run inside a single SQL transaction, so
    /// a failure part way through rolls back to the previous record set and
    /// concurrent readers never observe an empty store.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an unexpected SQL error.
    fn replace_all(&mut self, transactions: Vec<NewTransaction>) -> Result<usize, Error> {
        let connection = self.connection.lock().map_err(|_| Error::DatabaseLock)?;

        let tx = connection.unchecked_transaction()?;
        tx.execute("DELETE FROM \"transaction\"", ())?;

        {
            let mut stmt = tx.prepare(
                "INSERT INTO \"transaction\" (title, description, price, date_of_sale, sold)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;

            for transaction in &transactions {
                stmt.execute((
                    &transaction.title,
                    &transaction.description,
                    transaction.price,
                    transaction.date_of_sale.unix_timestamp(),
                    transaction.sold,
                ))?;
            }
        }

        tx.commit()?;

        Ok(transactions.len())
    }

    /// Retrieve one page of transactions matching `query`.
    ///
    /// Records are matched by case-insensitive substring against the title,
    /// the description, and the price rendered as text. Results are ordered
    /// by ID so that pages are stable across requests.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an unexpected SQL error.
    fn get_page(&self, query: &TransactionQuery) -> Result<Vec<Transaction>, Error> {
        let connection = self.connection.lock().map_err(|_| Error::DatabaseLock)?;

        let limit = query.per_page as i64;
        let offset = (query.page.saturating_sub(1) * query.per_page) as i64;

        if query.search.is_empty() {
            let sql = format!(
                "SELECT {SELECT_COLUMNS} FROM \"transaction\" ORDER BY id ASC LIMIT ?1 OFFSET ?2"
            );

            connection
                .prepare(&sql)?
                .query_map((limit, offset), Self::map_row)?
                .map(|transaction_result| transaction_result.map_err(Error::SqlError))
                .collect()
        } else {
            // instr is used instead of LIKE so that '%' and '_' in the search
            // text match literally.
            let sql = format!(
                "SELECT {SELECT_COLUMNS} FROM \"transaction\" \
                 WHERE instr(lower(title), lower(?1)) > 0 \
                    OR instr(lower(description), lower(?1)) > 0 \
                    OR instr(CAST(price AS TEXT), ?1) > 0 \
                 ORDER BY id ASC LIMIT ?2 OFFSET ?3"
            );

            connection
                .prepare(&sql)?
                .query_map((&query.search, limit, offset), Self::map_row)?
                .map(|transaction_result| transaction_result.map_err(Error::SqlError))
                .collect()
        }
    }

    /// Retrieve transactions whose date of sale falls within `window`.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an unexpected SQL error.
    fn get_in_window(&self, window: DateWindow) -> Result<Vec<Transaction>, Error> {
        let connection = self.connection.lock().map_err(|_| Error::DatabaseLock)?;

        let sql = format!(
            "SELECT {SELECT_COLUMNS} FROM \"transaction\" \
             WHERE date_of_sale >= ?1 AND date_of_sale < ?2 \
             ORDER BY id ASC"
        );

        connection
            .prepare(&sql)?
            .query_map(
                (window.start.unix_timestamp(), window.end.unix_timestamp()),
                Self::map_row,
            )?
            .map(|transaction_result| transaction_result.map_err(Error::SqlError))
            .collect()
    }
}
