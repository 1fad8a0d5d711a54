//! Chart configuration for the income-vs-expense visualization.
//!
//! The chart is generated as an ECharts option object; the presentation layer
//! serializes it with `to_string()` and hands it to its chart runtime. No
//! rendering happens here.

use charming::{
    Chart,
    component::Legend,
    df,
    element::{Tooltip, Trigger},
    series::Pie,
};

use crate::{dashboard::summary::chart_summary, transaction::Transaction};

/// Build the doughnut chart comparing total income against total expenses.
///
/// The two slices are proportional to the aggregates over the full,
/// unfiltered collection. With an empty ledger both slices are zero; the
/// caller decides whether to show the chart at all in that case.
pub fn income_expense_chart(transactions: &[Transaction]) -> Chart {
    let summary = chart_summary(transactions);

    Chart::new()
        .legend(Legend::new().top("bottom"))
        .tooltip(Tooltip::new().trigger(Trigger::Item))
        .series(
            Pie::new()
                .name("Income vs Expenses")
                .radius(vec!["40%", "70%"])
                .data(df![
                    (summary.income, "Income"),
                    (summary.expense, "Expenses")
                ]),
        )
}
