//! CLI command handlers
//!
//! Bridges clap argument parsing with the expense service. This is the
//! presentation layer: it parses user text, prints results, and turns save
//! failures into warnings.

pub mod expense;

pub use expense::{handle_expense_command, ExpenseCommands, ExportFormat};

use crate::config::{Settings, TrackerPaths};
use crate::error::ExpenseResult;
use crate::services::ExpenseService;

/// Everything a command needs: paths, settings and the loaded expenses
#[derive(Debug)]
pub struct Session {
    pub paths: TrackerPaths,
    pub settings: Settings,
    pub service: ExpenseService,
}

impl Session {
    /// Load settings and the expense file
    pub fn open(paths: TrackerPaths) -> ExpenseResult<Self> {
        let settings = Settings::load_or_create(&paths)?;
        let expense_file = paths.expense_file(&settings.expense_file_name);
        let service = ExpenseService::open(expense_file, settings.monthly_income)?;

        for skipped in service.skipped_lines() {
            eprintln!(
                "Warning: skipped line {} of {}: {}",
                skipped.line,
                service.path().display(),
                skipped.reason
            );
        }

        for line in service.requoted_lines() {
            eprintln!(
                "Warning: line {} of {} was read with CSV quote rules and will be rewritten on the next save",
                line,
                service.path().display()
            );
        }

        Ok(Self {
            paths,
            settings,
            service,
        })
    }
}
