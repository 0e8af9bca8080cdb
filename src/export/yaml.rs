//! YAML Export functionality
//!
//! Same snapshot as the JSON export, in a human-readable form.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::json::ExpenseExport;
use crate::services::ExpenseService;

/// Export the session to YAML
pub fn export_yaml<W: Write>(service: &ExpenseService, writer: &mut W) -> ExpenseResult<()> {
    let export = ExpenseExport::from_service(service);

    let header = format!(
        "# Expense Tracker Export\n# Generated: {}\n# App Version: {}\n\n",
        export.exported_at, export.app_version
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, Expense};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_yaml_export() {
        let temp_dir = TempDir::new().unwrap();
        let mut service =
            ExpenseService::open(temp_dir.path().join("expenses.csv"), Amount::new(1000.0))
                .unwrap();
        service.add(Expense::new(
            Amount::new(200.0),
            "Travel",
            NaiveDate::from_ymd_opt(2024, 1, 12).unwrap(),
        ));

        let mut output = Vec::new();
        export_yaml(&service, &mut output).unwrap();

        let yaml = String::from_utf8(output).unwrap();
        assert!(yaml.starts_with("# Expense Tracker Export"));
        assert!(yaml.contains("category: Travel"));

        let export: ExpenseExport = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(export.expenses.len(), 1);
        assert_eq!(export.balance.value(), 800.0);
    }
}
