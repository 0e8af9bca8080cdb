//! Expense Tracker - personal expense tracking with flat-file persistence
//!
//! Users record a monthly income and dated, categorized expenses, then view
//! the running total and the remaining balance.
//!
//! # Architecture
//!
//! - `models`: expense values, amounts, ids and category presets
//! - `store`: the in-memory ordered store, the session's source of truth
//! - `storage`: the comma-separated expense file and atomic writes
//! - `services`: mutate-then-save flow with non-fatal save failures
//! - `config`: base directory and user settings
//! - `input`, `display`, `export`, `cli`: the command-line presentation layer
//!
//! # Example
//!
//! ```rust,no_run
//! use expense_tracker::models::{Amount, Expense};
//! use expense_tracker::services::ExpenseService;
//! use chrono::NaiveDate;
//!
//! let mut service = ExpenseService::open("expenses.csv", Amount::new(1000.0))?;
//! let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
//! service.add(Expense::new(Amount::new(500.0), "Food", date));
//! println!("Balance: {}", service.balance());
//! # Ok::<(), expense_tracker::ExpenseError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod input;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;
pub mod store;

pub use error::{ExpenseError, ExpenseResult};
pub use store::{ExpenseStore, StoreEvent};
