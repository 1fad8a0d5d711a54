//! Filtering and searching of the transaction listing.

use crate::transaction::{Transaction, TransactionKind};

/// The transient search and kind-filter state for the transaction listing.
///
/// Owned by the presentation layer and passed into view derivation on each
/// render request; never persisted. It narrows the listing only — aggregate
/// totals are always computed over the full collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    /// Free search text, matched case-insensitively against the title, the
    /// decimal text form of the amount, and the date text.
    pub search_text: String,
    /// Show only transactions of this kind. [None] means "no filter".
    pub kind_filter: Option<TransactionKind>,
}

/// A single update to the [FilterState].
#[derive(Debug, Clone, PartialEq)]
pub enum FilterChange {
    /// The search text changed.
    SearchText(String),
    /// The kind filter changed.
    KindFilter(Option<TransactionKind>),
}

/// Select the transactions that pass `filter`, preserving insertion order.
///
/// The kind filter and the search text are conjunctive: a transaction must
/// pass both. An empty result is a valid state for the caller to render a
/// placeholder for, not an error.
pub fn filtered_transactions(
    transactions: &[Transaction],
    filter: &FilterState,
) -> Vec<Transaction> {
    let search = filter.search_text.trim().to_lowercase();

    transactions
        .iter()
        .filter(|transaction| {
            filter
                .kind_filter
                .is_none_or(|kind| transaction.kind == kind)
        })
        .filter(|transaction| search.is_empty() || matches_search(transaction, &search))
        .cloned()
        .collect()
}

/// Whether `needle` (already trimmed and lowercased) occurs in the
/// transaction's title, amount text, or date text.
fn matches_search(transaction: &Transaction, needle: &str) -> bool {
    transaction.title.to_lowercase().contains(needle)
        || transaction.amount.to_string().contains(needle)
        || transaction.date.to_string().contains(needle)
}
