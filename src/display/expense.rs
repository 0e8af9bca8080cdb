//! Expense display formatting
//!
//! Renders the expense table and the total/balance summary for the terminal.
//! Dates are shown in the configured display format, which is deliberately
//! independent of the ISO form used in the expense file.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::{Amount, ExpenseEntry};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    row: usize,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Date")]
    date: String,
}

/// Format the expense list as a table with 1-based row numbers
pub fn format_expense_table(entries: &[ExpenseEntry], settings: &Settings) -> String {
    if entries.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let rows = entries.iter().enumerate().map(|(i, entry)| ExpenseRow {
        row: i + 1,
        amount: entry.expense.amount.to_string(),
        category: entry.expense.category.clone(),
        date: entry
            .expense
            .date
            .format(&settings.display_date_format)
            .to_string(),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .with(Modify::new(Columns::single(1)).with(Alignment::right()));

    format!("{}\n", table)
}

/// Format the total and balance lines
pub fn format_summary(total: Amount, balance: Amount, settings: &Settings) -> String {
    format!(
        "Total: {}\nBalance: {}\n",
        total.format_with_label(&settings.currency_label),
        balance.format_with_label(&settings.currency_label)
    )
}
