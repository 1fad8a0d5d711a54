//! Implements a SQLite backed key-value snapshot store.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, OptionalExtension};

use crate::{Error, stores::SnapshotStore, transaction::Transaction};

/// The fixed key the transaction collection is stored under.
const SNAPSHOT_KEY: &str = "transactions";

/// Stores the ledger snapshot as a JSON payload in a SQLite key-value table.
///
/// The whole collection lives in a single `key_value` row; every write
/// replaces that row.
#[derive(Debug, Clone)]
pub struct SqliteSnapshotStore {
    connection: Arc<Mutex<Connection>>,
}

impl SqliteSnapshotStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl SnapshotStore for SqliteSnapshotStore {
    /// Retrieve the last-saved collection from the database.
    ///
    /// A missing row, an SQL error, and an undecodable payload are all
    /// reported as [None]; the latter two are logged at the warn level.
    fn read_all(&self) -> Option<Vec<Transaction>> {
        let payload: Option<String> = self
            .connection
            .lock()
            .unwrap()
            .query_row(
                "SELECT value FROM key_value WHERE key = :key",
                &[(":key", SNAPSHOT_KEY)],
                |row| row.get(0),
            )
            .optional()
            .inspect_err(|error| tracing::warn!("could not read the ledger snapshot: {error}"))
            .ok()
            .flatten();

        serde_json::from_str(&payload?)
            .inspect_err(|error| tracing::warn!("could not decode the ledger snapshot: {error}"))
            .ok()
    }

    /// Replace the persisted snapshot with `transactions`.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::JSONSerializationError] if the collection cannot be encoded,
    /// - or [Error::SqlError] if the row cannot be written.
    fn write_all(&mut self, transactions: &[Transaction]) -> Result<(), Error> {
        let payload = serde_json::to_string(transactions)
            .map_err(|error| Error::JSONSerializationError(error.to_string()))?;

        self.connection.lock().unwrap().execute(
            "INSERT INTO key_value (key, value) VALUES (:key, :value)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            &[(":key", SNAPSHOT_KEY), (":value", payload.as_str())],
        )?;

        Ok(())
    }
}

/// Create the key-value table that holds the ledger snapshot.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn create_key_value_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS key_value (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
                )",
        (),
    )?;

    Ok(())
}
