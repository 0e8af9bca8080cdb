//! Core data models for the expense tracker
//!
//! Expenses, their amounts and ids, and the category presets.

pub mod amount;
pub mod category;
pub mod expense;
pub mod ids;

pub use amount::{Amount, AmountParseError};
pub use category::{resolve_category, PresetCategory};
pub use expense::{Expense, ExpenseEntry};
pub use ids::ExpenseId;
