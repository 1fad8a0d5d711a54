//! Sets up the application's SQLite schema.

use rusqlite::Connection;

use crate::{Error, stores::sqlite::create_key_value_table};

/// Create the tables the ledger needs in `connection`'s database.
///
/// # Errors
/// Returns an [Error::SqlError] if the schema cannot be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    create_key_value_table(connection)?;

    Ok(())
}
