//! Moneylog is a personal finance ledger for recording income and expenses.
//!
//! This library owns the transaction collection, validates and persists
//! mutations, and derives the views (filtered listing, aggregate totals, and
//! chart data) that a presentation layer renders. It has no rendering or
//! network surface of its own: the embedding application routes user input
//! into the [command handlers](crate::handle_add) and draws whatever
//! [LedgerView] hands back.

#![warn(missing_docs)]

mod commands;
mod dashboard;
mod db;
mod filter;
mod format;
mod ledger;
mod stores;
mod transaction;

pub use commands::{
    AddTransactionForm, LedgerView, handle_add, handle_delete, handle_filter_change,
};
pub use dashboard::{ChartSummary, Totals, chart_summary, income_expense_chart, totals};
pub use db::initialize as initialize_db;
pub use filter::{FilterChange, FilterState, filtered_transactions};
pub use format::currency;
pub use ledger::Ledger;
pub use stores::{SnapshotStore, SqliteSnapshotStore};
pub use transaction::{Transaction, TransactionDraft, TransactionId, TransactionKind};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An empty title was used to create a transaction.
    #[error("transaction title cannot be empty")]
    EmptyTitle,

    /// No amount was entered for a new transaction.
    #[error("transaction amount cannot be empty")]
    EmptyAmount,

    /// The amount text could not be parsed as a number.
    #[error("could not parse \"{0}\" as an amount")]
    InvalidAmount(String),

    /// A zero or negative amount was used to create a transaction.
    ///
    /// Transactions record a positive magnitude of money moving in one
    /// direction; the direction itself is the transaction kind.
    #[error("transaction amounts must be positive, got {0}")]
    NonPositiveAmount(f64),

    /// No transaction kind was selected.
    #[error("a transaction must be marked as either income or an expense")]
    UnsetKind,

    /// The kind text did not name a known transaction kind.
    #[error("\"{0}\" is not a valid transaction kind")]
    InvalidKind(String),

    /// No date was entered for a new transaction.
    #[error("transaction date cannot be empty")]
    EmptyDate,

    /// The date text could not be parsed as a calendar date.
    #[error("could not parse \"{0}\" as a calendar date")]
    InvalidDate(String),

    /// An error occurred while serializing the ledger snapshot as JSON.
    #[error("could not serialize as JSON: {0}")]
    JSONSerializationError(String),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        tracing::error!("an unhandled SQL error occurred: {}", value);
        Error::SqlError(value)
    }
}
