//! Defines the core transaction model shared by the ledger and its views.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::Date;

use crate::Error;

/// Alias for the integer ids assigned to ledger transactions.
pub type TransactionId = i64;

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// New instances enter the ledger only through [Ledger::add](crate::Ledger::add)
/// and are never mutated in place afterwards.
///
/// The serialized form matches the persisted snapshot layout: the kind is
/// written under the field name `type` and the date as `YYYY-MM-DD` text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// A short text label for what the transaction was.
    pub title: String,
    /// The amount of money spent or earned. Always positive.
    pub amount: f64,
    /// Whether money was earned or spent.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// When the transaction happened.
    pub date: Date,
}

impl Transaction {
    /// Create a draft for a new transaction.
    ///
    /// Shortcut for [TransactionDraft] for discoverability. The draft is
    /// validated when it is passed to [Ledger::add](crate::Ledger::add).
    pub fn draft(title: &str, amount: f64, kind: TransactionKind, date: Date) -> TransactionDraft {
        TransactionDraft {
            title: title.to_owned(),
            amount,
            kind,
            date,
        }
    }
}

/// Whether a transaction brought money in or took money out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money was earned.
    Income,
    /// Money was spent.
    Expense,
}

impl FromStr for TransactionKind {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text.to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(Error::InvalidKind(text.to_owned())),
        }
    }
}

/// The field values for a transaction that has not been admitted to the
/// ledger yet.
///
/// A draft carries no id; the ledger assigns one when the draft passes
/// validation.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    /// A short text label for what the transaction is.
    pub title: String,
    /// The amount of money spent or earned.
    pub amount: f64,
    /// Whether money was earned or spent.
    pub kind: TransactionKind,
    /// When the transaction happened.
    pub date: Date,
}
