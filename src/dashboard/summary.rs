//! Aggregate summaries over the transaction collection.
//!
//! These are pure functions of the full, unfiltered collection: the listing's
//! search and kind filter never affect the summary numbers.

use crate::transaction::{Transaction, TransactionKind};

/// The aggregate sums shown in the summary cards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    /// Sum of all income amounts.
    pub income: f64,
    /// Sum of all expense amounts.
    pub expense: f64,
    /// `income - expense`. Negative when more was spent than earned.
    pub net: f64,
}

/// The two-category breakdown fed to the income-vs-expense chart.
///
/// Carries the same aggregates as [Totals]; it is recomputed on every call
/// rather than cached, since the collection stays small.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartSummary {
    /// Sum of all income amounts.
    pub income: f64,
    /// Sum of all expense amounts.
    pub expense: f64,
}

/// Sum the income and expense amounts over the whole collection.
pub fn totals(transactions: &[Transaction]) -> Totals {
    let mut income = 0.0;
    let mut expense = 0.0;

    for transaction in transactions {
        match transaction.kind {
            TransactionKind::Income => income += transaction.amount,
            TransactionKind::Expense => expense += transaction.amount,
        }
    }

    Totals {
        income,
        expense,
        net: income - expense,
    }
}

/// The [totals] re-exposed as the chart's two categories.
pub fn chart_summary(transactions: &[Transaction]) -> ChartSummary {
    let Totals {
        income, expense, ..
    } = totals(transactions);

    ChartSummary { income, expense }
}
