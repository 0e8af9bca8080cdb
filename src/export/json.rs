//! JSON Export functionality
//!
//! Exports the current session (expenses, income, totals) to JSON.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Amount, ExpenseEntry};
use crate::services::ExpenseService;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Snapshot of the session for export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub income: Amount,
    pub total: Amount,
    pub balance: Amount,

    /// All expenses in store order
    pub expenses: Vec<ExpenseEntry>,
}

impl ExpenseExport {
    /// Capture the service's current state
    pub fn from_service(service: &ExpenseService) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            income: service.income(),
            total: service.total(),
            balance: service.balance(),
            expenses: service.store().entries().to_vec(),
        }
    }
}

/// Export the session to JSON
pub fn export_json<W: Write>(
    service: &ExpenseService,
    writer: &mut W,
    pretty: bool,
) -> ExpenseResult<()> {
    let export = ExpenseExport::from_service(service);

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    }
    .map_err(|e| ExpenseError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| ExpenseError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Expense;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_json_export() {
        let temp_dir = TempDir::new().unwrap();
        let mut service =
            ExpenseService::open(temp_dir.path().join("expenses.csv"), Amount::new(1000.0))
                .unwrap();
        service.add(Expense::new(
            Amount::new(500.0),
            "Food",
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        ));

        let mut output = Vec::new();
        export_json(&service, &mut output, true).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(parsed["income"], 1000.0);
        assert_eq!(parsed["total"], 500.0);
        assert_eq!(parsed["balance"], 500.0);
        assert_eq!(parsed["expenses"][0]["category"], "Food");
        assert_eq!(parsed["expenses"][0]["date"], "2024-01-10");
    }

    #[test]
    fn test_json_export_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let service =
            ExpenseService::open(temp_dir.path().join("expenses.csv"), Amount::zero()).unwrap();

        let mut output = Vec::new();
        export_json(&service, &mut output, false).unwrap();

        let export: ExpenseExport = serde_json::from_slice(&output).unwrap();
        assert!(export.expenses.is_empty());
        assert_eq!(export.total, Amount::zero());
    }
}
