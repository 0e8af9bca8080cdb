//! Flat-file persistence for the expense store
//!
//! One record per line, `amount,category,date`, no header. Dates use the ISO
//! `YYYY-MM-DD` form. Fields are quoted only when they need to be (a category
//! containing a comma, quote or line break), so files without such categories
//! are byte-for-byte what the original comma-joined format produced.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use tracing::{debug, warn};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Amount, Expense};
use crate::store::ExpenseStore;

use super::file_io::write_atomic;

/// A line that could not be turned into an expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the file
    pub line: u64,
    pub reason: String,
}

/// Result of loading the expense file
#[derive(Debug, Default)]
pub struct LoadReport {
    pub store: ExpenseStore,
    pub skipped: Vec<SkippedLine>,
    /// Lines whose text is not how the record would be written back, e.g. a
    /// legacy category starting with `"` that was read with quote rules.
    /// The next save rewrites them in canonical form.
    pub requoted: Vec<u64>,
}

impl LoadReport {
    /// True if every record in the file was loaded
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Render the store in the expense file format
pub fn encode(store: &ExpenseStore) -> ExpenseResult<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for expense in store.all() {
        let date = expense.date.to_string();
        writer.write_record([
            expense.amount.to_record_string().as_str(),
            expense.category.as_str(),
            date.as_str(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| ExpenseError::Csv(format!("Failed to flush records: {}", e)))
}

/// Overwrite `path` with every expense in the store
pub fn save<P: AsRef<Path>>(store: &ExpenseStore, path: P) -> ExpenseResult<()> {
    let path = path.as_ref();
    let bytes = encode(store)?;
    write_atomic(path, &bytes)?;
    debug!(path = %path.display(), count = store.len(), "saved expenses");
    Ok(())
}

/// Load the expense file at `path`
///
/// A missing file yields an empty store. Malformed records are skipped and
/// reported rather than aborting the whole load.
pub fn load<P: AsRef<Path>>(path: P) -> ExpenseResult<LoadReport> {
    let path = path.as_ref();

    if !path.exists() {
        debug!(path = %path.display(), "no expense file, starting empty");
        return Ok(LoadReport::default());
    }

    let file = File::open(path).map_err(|e| {
        ExpenseError::Storage(format!("Failed to open {}: {}", path.display(), e))
    })?;

    let report = decode(file)?;
    debug!(
        path = %path.display(),
        loaded = report.store.len(),
        skipped = report.skipped.len(),
        "loaded expenses"
    );
    Ok(report)
}

/// Parse expense records from any reader
pub fn decode<R: Read>(mut input: R) -> ExpenseResult<LoadReport> {
    let mut raw = Vec::new();
    input
        .read_to_end(&mut raw)
        .map_err(|e| ExpenseError::Storage(format!("Failed to read expense file: {}", e)))?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(raw.as_slice());

    let mut expenses = Vec::new();
    let mut skipped = Vec::new();
    let mut requoted = Vec::new();

    for result in reader.records() {
        match result {
            Ok(record) => {
                let (line, byte) = record
                    .position()
                    .map(|p| (p.line(), p.byte() as usize))
                    .unwrap_or((0, 0));
                match parse_record(&record) {
                    Ok(expense) => {
                        if !is_canonical(&record, raw.get(byte..).unwrap_or_default()) {
                            warn!(
                                line,
                                category = %expense.category,
                                "expense record read with quote rules, it will be rewritten on save"
                            );
                            requoted.push(line);
                        }
                        expenses.push(expense);
                    }
                    Err(reason) => {
                        warn!(line, %reason, "skipping malformed expense record");
                        skipped.push(SkippedLine { line, reason });
                    }
                }
            }
            Err(e) => {
                let line = e.position().map(|p| p.line()).unwrap_or(0);
                let reason = e.to_string();
                warn!(line, %reason, "skipping unreadable expense record");
                skipped.push(SkippedLine { line, reason });
            }
        }
    }

    Ok(LoadReport {
        store: ExpenseStore::from_expenses(expenses),
        skipped,
        requoted,
    })
}

/// True if `raw` starts with exactly the bytes a save would write for `record`
fn is_canonical(record: &StringRecord, raw: &[u8]) -> bool {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    if writer.write_record(record).is_err() {
        return false;
    }

    match writer.into_inner() {
        Ok(mut encoded) => {
            encoded.pop();
            raw.starts_with(&encoded)
        }
        Err(_) => false,
    }
}

/// Parse one record positionally: amount, category, date
///
/// More than three fields means a category with unescaped commas (written by
/// the old comma-joined format); the middle fields are joined back together.
fn parse_record(record: &StringRecord) -> Result<Expense, String> {
    if record.len() < 3 {
        return Err(format!("expected 3 fields, found {}", record.len()));
    }

    let last = record.len() - 1;
    let amount_text = &record[0];
    let date_text = &record[last];
    let category = (1..last)
        .map(|i| &record[i])
        .collect::<Vec<_>>()
        .join(",");

    let amount = Amount::parse(amount_text).map_err(|e| e.to_string())?;

    if category.trim().is_empty() {
        return Err("empty category".to_string());
    }

    let date: NaiveDate = date_text
        .trim()
        .parse()
        .map_err(|e| format!("invalid date '{}': {}", date_text, e))?;

    Ok(Expense::new(amount, category, date))
}
