//! Expense service
//!
//! Ties the in-memory store to the expense file: every mutation is followed
//! by a full save. A failed save never undoes the mutation; it comes back to
//! the caller as a warning so the presentation layer can tell the user.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Amount, Expense, ExpenseId};
use crate::storage::flat_file::{self, SkippedLine};
use crate::store::ExpenseStore;

/// Outcome of a mutation: the value, plus the save error if persisting failed
#[derive(Debug)]
pub struct Saved<T> {
    pub value: T,
    pub warning: Option<ExpenseError>,
}

impl<T> Saved<T> {
    /// True if the change reached the expense file
    pub fn is_persisted(&self) -> bool {
        self.warning.is_none()
    }
}

/// Service for expense management
#[derive(Debug)]
pub struct ExpenseService {
    store: ExpenseStore,
    path: PathBuf,
    income: Amount,
    skipped: Vec<SkippedLine>,
    requoted: Vec<u64>,
}

impl ExpenseService {
    /// Load the expense file once and start a session
    pub fn open(path: impl Into<PathBuf>, income: Amount) -> ExpenseResult<Self> {
        let path = path.into();
        let report = flat_file::load(&path)?;

        if !report.is_clean() {
            warn!(
                path = %path.display(),
                skipped = report.skipped.len(),
                "some expense records could not be read"
            );
        }

        Ok(Self {
            store: report.store,
            path,
            income,
            skipped: report.skipped,
            requoted: report.requoted,
        })
    }

    /// Records skipped while loading
    pub fn skipped_lines(&self) -> &[SkippedLine] {
        &self.skipped
    }

    /// Lines that will be rewritten in a different form on the next save
    pub fn requoted_lines(&self) -> &[u64] {
        &self.requoted
    }

    /// Path of the expense file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read access to the store
    pub fn store(&self) -> &ExpenseStore {
        &self.store
    }

    /// Add an expense and save
    pub fn add(&mut self, expense: Expense) -> Saved<ExpenseId> {
        let id = self.store.add(expense);
        debug!(%id, "added expense");
        self.persisted(id)
    }

    /// Remove the first expense equal to `expense` and save
    ///
    /// Nothing is written when no expense matched.
    pub fn remove(&mut self, expense: &Expense) -> Saved<Option<Expense>> {
        let removed = self.store.remove(expense);
        self.persisted_if_removed(removed)
    }

    /// Remove an expense by id and save
    pub fn remove_by_id(&mut self, id: ExpenseId) -> Saved<Option<Expense>> {
        let removed = self.store.remove_by_id(id);
        self.persisted_if_removed(removed)
    }

    /// Remove the expense shown at a 1-based row and save
    pub fn remove_row(&mut self, row: usize) -> ExpenseResult<Saved<Expense>> {
        let removed = row
            .checked_sub(1)
            .and_then(|index| self.store.remove_at(index))
            .ok_or_else(|| ExpenseError::expense_not_found(format!("row {}", row)))?;
        Ok(self.persisted(removed))
    }

    /// Write the whole store to the expense file
    pub fn save(&self) -> ExpenseResult<()> {
        flat_file::save(&self.store, &self.path)
    }

    /// Current monthly income
    pub fn income(&self) -> Amount {
        self.income
    }

    /// Change the monthly income (kept in settings, not in the expense file)
    pub fn set_income(&mut self, income: Amount) {
        self.income = income;
    }

    /// Sum of all expenses
    pub fn total(&self) -> Amount {
        self.store.total()
    }

    /// Income minus total expenses
    pub fn balance(&self) -> Amount {
        self.store.balance(self.income)
    }

    fn persisted<T>(&self, value: T) -> Saved<T> {
        let warning = self.save().err();
        if let Some(err) = &warning {
            warn!(path = %self.path.display(), error = %err, "failed to save expenses");
        }
        Saved { value, warning }
    }

    fn persisted_if_removed(&self, removed: Option<Expense>) -> Saved<Option<Expense>> {
        if removed.is_some() {
            self.persisted(removed)
        } else {
            Saved {
                value: None,
                warning: None,
            }
        }
    }
}
