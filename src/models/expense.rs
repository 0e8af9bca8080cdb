//! Expense model
//!
//! An expense is an immutable value: amount, free-form category and a
//! calendar date. Two expenses with the same fields are equal.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;
use super::ids::ExpenseId;

/// One user-entered spending event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub amount: Amount,
    pub category: String,
    pub date: NaiveDate,
}

impl Expense {
    /// Create a new expense
    ///
    /// No validation is performed; callers parse and check input first.
    pub fn new(amount: Amount, category: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            amount,
            category: category.into(),
            date,
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.date, self.category, self.amount)
    }
}

/// An expense as held by the store, tagged with its session id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    pub id: ExpenseId,
    #[serde(flatten)]
    pub expense: Expense,
}

impl ExpenseEntry {
    /// Wrap an expense with a freshly generated id
    pub fn new(expense: Expense) -> Self {
        Self {
            id: ExpenseId::new(),
            expense,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_value_equality() {
        let a = Expense::new(Amount::new(500.0), "Food", date(2024, 1, 10));
        let b = Expense::new(Amount::new(500.0), "Food", date(2024, 1, 10));
        let c = Expense::new(Amount::new(500.0), "Food", date(2024, 1, 11));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_entries_with_equal_values_have_distinct_ids() {
        let expense = Expense::new(Amount::new(5.0), "Bills", date(2024, 2, 1));
        let first = ExpenseEntry::new(expense.clone());
        let second = ExpenseEntry::new(expense);

        assert_eq!(first.expense, second.expense);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_display() {
        let expense = Expense::new(Amount::new(200.0), "Travel", date(2024, 1, 12));
        assert_eq!(expense.to_string(), "2024-01-12 Travel (200.00)");
    }
}
