//! Sets up the application's database.

use rusqlite::Connection;

use crate::Error;

/// Initialize the database by creating the transaction table if it does not
/// already exist.
///
/// Dates of sale are stored as unix timestamps (see
/// [SQLiteTransactionStore](crate::stores::SQLiteTransactionStore)).
///
/// # Errors
/// Returns an [Error::SqlError] if there is an unexpected SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                description TEXT NOT NULL,
                price REAL NOT NULL,
                date_of_sale INTEGER NOT NULL,
                sold INTEGER NOT NULL
                )",
        (),
    )?;

    Ok(())
}

#[cfg(test)]
mod db_tests {
    use rusqlite::Connection;

    use super::initialize;

    #[test]
    fn initialize_creates_transaction_table() {
        let connection = Connection::open_in_memory().unwrap();

        initialize(&connection).expect("Could not initialize database.");

        let count: i64 = connection
            .query_row("SELECT COUNT(*) FROM \"transaction\"", (), |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn initialize_is_idempotent() {
        let connection = Connection::open_in_memory().unwrap();

        initialize(&connection).unwrap();
        initialize(&connection).expect("Second initialize should not fail.");
    }
}
