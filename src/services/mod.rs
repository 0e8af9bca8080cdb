//! Service layer for the expense tracker
//!
//! Keeps the store and the expense file in step.

pub mod expense;

pub use expense::{ExpenseService, Saved};
