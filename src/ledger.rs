//! The ledger store: the single source of truth for the transaction
//! collection.

use crate::{
    Error,
    stores::SnapshotStore,
    transaction::{Transaction, TransactionDraft, TransactionId},
};

/// Owns the canonical in-memory collection of transactions and the store it
/// is persisted through.
///
/// Every successful mutation synchronously rewrites the entire persisted
/// snapshot, so the collection on disk always matches the collection in
/// memory.
#[derive(Debug)]
pub struct Ledger<S>
where
    S: SnapshotStore,
{
    store: S,
    transactions: Vec<Transaction>,
    next_id: TransactionId,
}

impl<S> Ledger<S>
where
    S: SnapshotStore,
{
    /// Load the persisted collection from `store`.
    ///
    /// A missing or undecodable snapshot initializes an empty ledger; loading
    /// never fails. The id counter resumes above the largest persisted id so
    /// ids stay unique across restarts.
    pub fn load(store: S) -> Self {
        let transactions = store.read_all().unwrap_or_default();
        let next_id = transactions
            .iter()
            .map(|transaction| transaction.id)
            .max()
            .unwrap_or(0)
            + 1;

        tracing::debug!("loaded {} transactions from the snapshot store", transactions.len());

        Self {
            store,
            transactions,
            next_id,
        }
    }

    /// Validate `draft`, assign it a fresh id, append it to the collection,
    /// and persist the whole collection.
    ///
    /// The stored title is the draft title with surrounding whitespace
    /// removed.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::EmptyTitle] if the trimmed title is empty,
    /// - [Error::NonPositiveAmount] if the amount is zero, negative, or NaN,
    /// - or [Error::SqlError]/[Error::JSONSerializationError] if the snapshot
    ///   write fails, in which case the append is rolled back.
    ///
    /// On a validation error the collection is left unchanged.
    pub fn add(&mut self, draft: TransactionDraft) -> Result<Transaction, Error> {
        let title = draft.title.trim();

        if title.is_empty() {
            return Err(Error::EmptyTitle);
        }

        // `!(x > 0.0)` also catches NaN, which `x <= 0.0` would let through.
        if !(draft.amount > 0.0) {
            return Err(Error::NonPositiveAmount(draft.amount));
        }

        let transaction = Transaction {
            id: self.next_id,
            title: title.to_owned(),
            amount: draft.amount,
            kind: draft.kind,
            date: draft.date,
        };

        self.transactions.push(transaction.clone());

        if let Err(error) = self.store.write_all(&self.transactions) {
            // Roll back the append so memory and disk stay in step.
            self.transactions.pop();
            return Err(error);
        }

        self.next_id += 1;

        Ok(transaction)
    }

    /// Remove the transaction with `id` from the collection and persist the
    /// remainder.
    ///
    /// Returns `Ok(false)` when no transaction has that id; removing an
    /// unknown id is a no-op, not an error.
    ///
    /// # Errors
    /// Returns [Error::SqlError] or [Error::JSONSerializationError] if the
    /// snapshot write fails, in which case the removal is rolled back.
    pub fn remove(&mut self, id: TransactionId) -> Result<bool, Error> {
        let Some(index) = self
            .transactions
            .iter()
            .position(|transaction| transaction.id == id)
        else {
            return Ok(false);
        };

        let removed = self.transactions.remove(index);

        if let Err(error) = self.store.write_all(&self.transactions) {
            self.transactions.insert(index, removed);
            return Err(error);
        }

        Ok(true)
    }

    /// The full collection in insertion order.
    ///
    /// The borrow is shared, so callers cannot mutate the ledger through it.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }
}
