//! Command handlers that connect presentation-layer input to the ledger.
//!
//! The presentation layer collects raw text and selection values, hands them
//! to these handlers, and re-renders from a freshly derived [LedgerView]
//! after every successful mutation. Nothing in this module knows how the
//! result is drawn.

use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    Error,
    dashboard::{ChartSummary, Totals, chart_summary, totals},
    filter::{FilterChange, FilterState, filtered_transactions},
    ledger::Ledger,
    stores::SnapshotStore,
    transaction::{Transaction, TransactionDraft, TransactionId},
};

/// The date format accepted from the presentation layer's date input.
const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// The raw values of a create-transaction request, exactly as the
/// presentation layer collected them.
#[derive(Debug, Clone, PartialEq)]
pub struct AddTransactionForm {
    /// The title text input.
    pub title: String,
    /// The amount text input.
    pub amount: String,
    /// The kind selection, `"income"` or `"expense"`; empty when unset.
    pub kind: String,
    /// The date input as `YYYY-MM-DD` text.
    pub date: String,
}

/// Parse `form` and append the resulting transaction to `ledger`.
///
/// # Errors
/// This function will return a:
/// - [Error::EmptyTitle], [Error::EmptyAmount], [Error::UnsetKind], or
///   [Error::EmptyDate] if the corresponding field was left blank,
/// - [Error::InvalidAmount], [Error::InvalidKind], or [Error::InvalidDate]
///   if a field does not parse,
/// - [Error::NonPositiveAmount] if the amount is zero, negative, or NaN,
/// - or a storage error from [Ledger::add] if the snapshot write fails.
///
/// The ledger is unchanged unless the created transaction is returned.
pub fn handle_add<S>(
    ledger: &mut Ledger<S>,
    form: AddTransactionForm,
) -> Result<Transaction, Error>
where
    S: SnapshotStore,
{
    let draft = parse_add_form(form)?;

    ledger.add(draft)
}

/// Remove the transaction with `id` from `ledger`.
///
/// Returns `Ok(false)` when no transaction has that id, matching
/// [Ledger::remove]: deleting something that is already gone is not an
/// error.
///
/// # Errors
/// Returns a storage error from [Ledger::remove] if the snapshot write
/// fails.
pub fn handle_delete<S>(ledger: &mut Ledger<S>, id: TransactionId) -> Result<bool, Error>
where
    S: SnapshotStore,
{
    ledger.remove(id)
}

/// Apply a search-text or kind-filter update to the transient filter state.
pub fn handle_filter_change(filter: &mut FilterState, change: FilterChange) {
    match change {
        FilterChange::SearchText(text) => filter.search_text = text,
        FilterChange::KindFilter(kind) => filter.kind_filter = kind,
    }
}

/// Everything the presentation layer needs to redraw after a mutation or a
/// filter change.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerView {
    /// The transactions that pass the current filter, in insertion order.
    pub rows: Vec<Transaction>,
    /// Aggregate sums over the full, unfiltered collection.
    pub totals: Totals,
    /// The two-category breakdown for the income-vs-expense chart.
    pub chart: ChartSummary,
}

impl LedgerView {
    /// Recompute every derived view from the current collection and filter.
    ///
    /// Deterministic and side-effect free; call it as often as needed.
    pub fn derive(transactions: &[Transaction], filter: &FilterState) -> Self {
        Self {
            rows: filtered_transactions(transactions, filter),
            totals: totals(transactions),
            chart: chart_summary(transactions),
        }
    }
}

/// Turn the raw form values into a validated draft.
fn parse_add_form(form: AddTransactionForm) -> Result<TransactionDraft, Error> {
    let title = form.title.trim();
    if title.is_empty() {
        return Err(Error::EmptyTitle);
    }

    let amount_text = form.amount.trim();
    if amount_text.is_empty() {
        return Err(Error::EmptyAmount);
    }
    let amount: f64 = amount_text
        .parse()
        .map_err(|_| Error::InvalidAmount(amount_text.to_owned()))?;

    let kind_text = form.kind.trim();
    if kind_text.is_empty() {
        return Err(Error::UnsetKind);
    }
    let kind = kind_text.parse()?;

    let date_text = form.date.trim();
    if date_text.is_empty() {
        return Err(Error::EmptyDate);
    }
    let date = Date::parse(date_text, DATE_FORMAT)
        .map_err(|_| Error::InvalidDate(date_text.to_owned()))?;

    Ok(TransactionDraft {
        title: title.to_owned(),
        amount,
        kind,
        date,
    })
}

#[cfg(test)]
mod handler_tests {
    use std::sync::{Arc, Mutex};

    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        Error,
        db::initialize,
        filter::{FilterChange, FilterState},
        ledger::Ledger,
        stores::SqliteSnapshotStore,
        transaction::TransactionKind,
    };

    use super::{AddTransactionForm, LedgerView, handle_add, handle_delete, handle_filter_change};

    fn get_test_ledger() -> Ledger<SqliteSnapshotStore> {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();

        Ledger::load(SqliteSnapshotStore::new(Arc::new(Mutex::new(conn))))
    }

    fn salary_form() -> AddTransactionForm {
        AddTransactionForm {
            title: "Salary".to_owned(),
            amount: "50000".to_owned(),
            kind: "income".to_owned(),
            date: "2024-01-01".to_owned(),
        }
    }

    #[test]
    fn add_parses_the_raw_form_values() {
        let mut ledger = get_test_ledger();

        let transaction = handle_add(&mut ledger, salary_form()).expect("Could not add transaction");

        assert_eq!(transaction.title, "Salary");
        assert_eq!(transaction.amount, 50000.0);
        assert_eq!(transaction.kind, TransactionKind::Income);
        assert_eq!(transaction.date, date!(2024 - 01 - 01));
    }

    #[test]
    fn add_fails_on_each_blank_field() {
        let mut ledger = get_test_ledger();

        let cases = [
            (
                AddTransactionForm {
                    title: "  ".to_owned(),
                    ..salary_form()
                },
                Error::EmptyTitle,
            ),
            (
                AddTransactionForm {
                    amount: "".to_owned(),
                    ..salary_form()
                },
                Error::EmptyAmount,
            ),
            (
                AddTransactionForm {
                    kind: "".to_owned(),
                    ..salary_form()
                },
                Error::UnsetKind,
            ),
            (
                AddTransactionForm {
                    date: "".to_owned(),
                    ..salary_form()
                },
                Error::EmptyDate,
            ),
        ];

        for (form, want) in cases {
            let got = handle_add(&mut ledger, form);

            assert_eq!(got, Err(want));
        }

        assert!(ledger.transactions().is_empty());
    }

    #[test]
    fn add_fails_on_unparseable_fields() {
        let mut ledger = get_test_ledger();

        let amount_result = handle_add(
            &mut ledger,
            AddTransactionForm {
                amount: "twelve".to_owned(),
                ..salary_form()
            },
        );
        assert_eq!(
            amount_result,
            Err(Error::InvalidAmount("twelve".to_owned()))
        );

        let kind_result = handle_add(
            &mut ledger,
            AddTransactionForm {
                kind: "transfer".to_owned(),
                ..salary_form()
            },
        );
        assert_eq!(kind_result, Err(Error::InvalidKind("transfer".to_owned())));

        let date_result = handle_add(
            &mut ledger,
            AddTransactionForm {
                date: "01/01/2024".to_owned(),
                ..salary_form()
            },
        );
        assert_eq!(
            date_result,
            Err(Error::InvalidDate("01/01/2024".to_owned()))
        );

        assert!(ledger.transactions().is_empty());
    }

    #[test]
    fn add_fails_on_non_positive_amount_text() {
        let mut ledger = get_test_ledger();

        let got = handle_add(
            &mut ledger,
            AddTransactionForm {
                amount: "-5".to_owned(),
                ..salary_form()
            },
        );

        assert_eq!(got, Err(Error::NonPositiveAmount(-5.0)));
        assert!(ledger.transactions().is_empty());
    }

    #[test]
    fn filter_change_updates_the_state() {
        let mut filter = FilterState::default();

        handle_filter_change(&mut filter, FilterChange::SearchText("rent".to_owned()));
        handle_filter_change(
            &mut filter,
            FilterChange::KindFilter(Some(TransactionKind::Expense)),
        );

        assert_eq!(
            filter,
            FilterState {
                search_text: "rent".to_owned(),
                kind_filter: Some(TransactionKind::Expense),
            }
        );

        handle_filter_change(&mut filter, FilterChange::KindFilter(None));

        assert_eq!(filter.kind_filter, None);
    }

    // The walkthrough scenario: record a salary and a grocery run, check the
    // derived views, then delete the salary.
    #[test]
    fn record_search_and_delete_walkthrough() {
        let mut ledger = get_test_ledger();

        let salary = handle_add(&mut ledger, salary_form()).unwrap();
        let groceries = handle_add(
            &mut ledger,
            AddTransactionForm {
                title: "Groceries".to_owned(),
                amount: "2000".to_owned(),
                kind: "expense".to_owned(),
                date: "2024-01-02".to_owned(),
            },
        )
        .unwrap();

        let view = LedgerView::derive(ledger.transactions(), &FilterState::default());
        assert_eq!(view.totals.income, 50000.0);
        assert_eq!(view.totals.expense, 2000.0);
        assert_eq!(view.totals.net, 48000.0);
        assert_eq!(view.rows.len(), 2);

        // Searching narrows the listing but never the totals.
        let search = FilterState {
            search_text: "gro".to_owned(),
            ..Default::default()
        };
        let filtered_view = LedgerView::derive(ledger.transactions(), &search);
        assert_eq!(filtered_view.rows, [groceries.clone()]);
        assert_eq!(filtered_view.totals, view.totals);
        assert_eq!(filtered_view.chart, view.chart);

        let removed = handle_delete(&mut ledger, salary.id).unwrap();
        assert!(removed);
        assert_eq!(ledger.transactions(), [groceries]);
    }
}
