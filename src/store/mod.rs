//! In-memory expense store
//!
//! The store is the session's source of truth: an ordered list of expenses
//! where insertion order is display order. It knows nothing about files or
//! presentation; interested parties subscribe to change events instead.

use std::fmt;

use crate::models::{Amount, Expense, ExpenseEntry, ExpenseId};

/// Change notification emitted after every mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    Added { id: ExpenseId, index: usize },
    Removed { id: ExpenseId, index: usize },
}

type Listener = Box<dyn FnMut(&StoreEvent)>;

/// Ordered, append/remove-capable collection of expenses
#[derive(Default)]
pub struct ExpenseStore {
    entries: Vec<ExpenseEntry>,
    listeners: Vec<Listener>,
}

impl ExpenseStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from expenses, preserving their order
    pub fn from_expenses<I>(expenses: I) -> Self
    where
        I: IntoIterator<Item = Expense>,
    {
        Self {
            entries: expenses.into_iter().map(ExpenseEntry::new).collect(),
            listeners: Vec::new(),
        }
    }

    /// Register a listener called after every add or remove
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&StoreEvent) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Append an expense to the end of the store
    pub fn add(&mut self, expense: Expense) -> ExpenseId {
        let entry = ExpenseEntry::new(expense);
        let id = entry.id;
        self.entries.push(entry);
        self.notify(StoreEvent::Added {
            id,
            index: self.entries.len() - 1,
        });
        id
    }

    /// Remove the first expense equal to `expense`
    ///
    /// Returns `None` and leaves the store untouched when nothing matches.
    pub fn remove(&mut self, expense: &Expense) -> Option<Expense> {
        let index = self.entries.iter().position(|e| &e.expense == expense)?;
        self.remove_at(index)
    }

    /// Remove the expense with the given id
    pub fn remove_by_id(&mut self, id: ExpenseId) -> Option<Expense> {
        let index = self.position(id)?;
        self.remove_at(index)
    }

    /// Remove the expense at a zero-based position
    pub fn remove_at(&mut self, index: usize) -> Option<Expense> {
        if index >= self.entries.len() {
            return None;
        }
        let entry = self.entries.remove(index);
        self.notify(StoreEvent::Removed {
            id: entry.id,
            index,
        });
        Some(entry.expense)
    }

    /// Iterate over all expenses in order
    pub fn all(&self) -> impl Iterator<Item = &Expense> + '_ {
        self.entries.iter().map(|e| &e.expense)
    }

    /// All entries (id + expense) in order
    pub fn entries(&self) -> &[ExpenseEntry] {
        &self.entries
    }

    /// Look up an expense by id
    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .map(|e| &e.expense)
    }

    /// Zero-based position of an id
    pub fn position(&self, id: ExpenseId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    /// Sum of all amounts
    pub fn total(&self) -> Amount {
        self.all().map(|e| e.amount).sum()
    }

    /// Income minus total expenses
    pub fn balance(&self, income: Amount) -> Amount {
        income - self.total()
    }

    /// Number of stored expenses
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn notify(&mut self, event: StoreEvent) {
        for listener in &mut self.listeners {
            listener(&event);
        }
    }
}

impl fmt::Debug for ExpenseStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpenseStore")
            .field("entries", &self.entries)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn expense(amount: f64, category: &str, day: u32) -> Expense {
        Expense::new(
            Amount::new(amount),
            category,
            NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
        )
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut store = ExpenseStore::new();
        store.add(expense(500.0, "Food", 10));
        store.add(expense(200.0, "Travel", 12));
        store.add(expense(50.0, "Bills", 1));

        let categories: Vec<_> = store.all().map(|e| e.category.as_str()).collect();
        assert_eq!(categories, vec!["Food", "Travel", "Bills"]);
    }

    #[test]
    fn test_total_and_balance() {
        let mut store = ExpenseStore::new();
        store.add(expense(500.0, "Food", 10));
        store.add(expense(200.0, "Travel", 12));

        assert_eq!(store.total().value(), 700.0);
        assert_eq!(store.balance(Amount::new(1000.0)).value(), 300.0);
    }

    #[test]
    fn test_total_is_order_independent() {
        let amounts = [0.25, 1.5, 3.0, 42.0, 100.75];

        let mut forward = ExpenseStore::new();
        for (i, a) in amounts.iter().enumerate() {
            forward.add(expense(*a, "Food", i as u32 + 1));
        }

        let mut backward = ExpenseStore::new();
        for (i, a) in amounts.iter().enumerate().rev() {
            backward.add(expense(*a, "Food", i as u32 + 1));
        }

        assert_eq!(forward.total(), backward.total());
        assert_eq!(forward.total().value(), amounts.iter().sum::<f64>());
    }

    #[test]
    fn test_empty_store() {
        let store = ExpenseStore::new();
        assert!(store.is_empty());
        assert_eq!(store.total(), Amount::zero());
        assert_eq!(store.balance(Amount::new(250.0)).value(), 250.0);
    }

    #[test]
    fn test_remove_first_match_only() {
        let mut store = ExpenseStore::new();
        store.add(expense(10.0, "Food", 1));
        let second = store.add(expense(10.0, "Food", 1));

        let removed = store.remove(&expense(10.0, "Food", 1));
        assert_eq!(removed, Some(expense(10.0, "Food", 1)));
        assert_eq!(store.len(), 1);
        assert_eq!(store.entries()[0].id, second);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut store = ExpenseStore::new();
        store.add(expense(10.0, "Food", 1));

        assert_eq!(store.remove(&expense(99.0, "Food", 1)), None);
        assert_eq!(store.len(), 1);
        assert_eq!(store.remove_at(5), None);
        assert_eq!(store.remove_by_id(ExpenseId::new()), None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_by_id_disambiguates_duplicates() {
        let mut store = ExpenseStore::new();
        let first = store.add(expense(10.0, "Food", 1));
        let second = store.add(expense(10.0, "Food", 1));

        store.remove_by_id(second).unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.get(first).is_some());
        assert!(store.get(second).is_none());
    }

    #[test]
    fn test_subscribers_see_changes() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);

        let mut store = ExpenseStore::new();
        store.subscribe(move |event| sink.borrow_mut().push(*event));

        let id = store.add(expense(5.0, "Food", 2));
        store.remove_at(0);
        store.remove_at(0);

        assert_eq!(
            *events.borrow(),
            vec![
                StoreEvent::Added { id, index: 0 },
                StoreEvent::Removed { id, index: 0 },
            ]
        );
    }

    #[test]
    fn test_from_expenses() {
        let store = ExpenseStore::from_expenses(vec![
            expense(1.0, "Food", 1),
            expense(2.0, "Travel", 2),
        ]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.all().next().unwrap().category, "Food");
    }
}
