//! Boundary parsing of user input
//!
//! Turns raw text from the command line into validated values. Nothing that
//! fails here ever reaches the store; the messages are meant for the user.

use chrono::{Local, NaiveDate};

use crate::config::Settings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{resolve_category, Amount, Expense};

/// ISO format always accepted alongside the display format
const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse an expense amount
pub fn parse_amount(text: &str) -> ExpenseResult<Amount> {
    Amount::parse(text).map_err(|_| ExpenseError::Validation("Enter valid amount.".into()))
}

/// Parse a monthly income
pub fn parse_income(text: &str) -> ExpenseResult<Amount> {
    Amount::parse(text).map_err(|_| ExpenseError::Validation("Enter valid income.".into()))
}

/// Parse a date in the display format or ISO form; missing means today
pub fn parse_date(text: Option<&str>, display_format: &str) -> ExpenseResult<NaiveDate> {
    let Some(text) = text.map(str::trim).filter(|t| !t.is_empty()) else {
        return Ok(Local::now().date_naive());
    };

    NaiveDate::parse_from_str(text, display_format)
        .or_else(|_| NaiveDate::parse_from_str(text, ISO_DATE_FORMAT))
        .map_err(|_| {
            ExpenseError::Validation(format!(
                "Enter valid date: '{}'. Use {} or YYYY-MM-DD.",
                text,
                describe_format(display_format)
            ))
        })
}

/// Human-readable form of a strftime date format, e.g. `DD/MM/YYYY`
pub fn describe_format(format: &str) -> String {
    format
        .replace("%d", "DD")
        .replace("%m", "MM")
        .replace("%Y", "YYYY")
}

/// Raw fields of an expense as entered by the user
#[derive(Debug, Clone, Default)]
pub struct ExpenseInput {
    pub amount: String,
    pub category: Option<String>,
    pub custom_category: Option<String>,
    pub date: Option<String>,
}

impl ExpenseInput {
    /// Validate every field and build the expense
    ///
    /// Fields are checked in entry order: amount, category, date.
    pub fn into_expense(self, settings: &Settings) -> ExpenseResult<Expense> {
        let amount = parse_amount(&self.amount)?;
        let category =
            resolve_category(self.category.as_deref(), self.custom_category.as_deref())?;
        let date = parse_date(self.date.as_deref(), &settings.display_date_format)?;
        Ok(Expense::new(amount, category, date))
    }
}
