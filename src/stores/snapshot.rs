//! Defines the snapshot store trait.

use crate::{Error, transaction::Transaction};

/// Handles reading and writing the persisted ledger snapshot.
///
/// The whole collection is written as one serialized snapshot on every
/// mutation; there is no incremental persistence.
pub trait SnapshotStore {
    /// Retrieve the last-saved collection.
    ///
    /// Returns [None] when nothing was ever saved, or when the saved payload
    /// cannot be decoded. A missing snapshot means "empty ledger", not an
    /// error, so implementers should log decode failures rather than
    /// propagate them.
    fn read_all(&self) -> Option<Vec<Transaction>>;

    /// Overwrite the entire persisted snapshot with `transactions`.
    ///
    /// # Errors
    /// Returns [Error::SqlError] or [Error::JSONSerializationError] if the
    /// snapshot cannot be written.
    fn write_all(&mut self, transactions: &[Transaction]) -> Result<(), Error>;
}
