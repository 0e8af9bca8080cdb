//! User settings for the expense tracker
//!
//! Stores the monthly income and presentation preferences. The expense file
//! itself never contains any of this.

use std::fmt::Write as _;

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::paths::{TrackerPaths, DEFAULT_EXPENSE_FILE};
use crate::error::ExpenseError;
use crate::models::Amount;

/// User settings for the expense tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Monthly income used to compute the balance
    #[serde(default)]
    pub monthly_income: Amount,

    /// Label printed in front of amounts
    #[serde(default = "default_currency_label")]
    pub currency_label: String,

    /// Date format for display and input (strftime format)
    #[serde(default = "default_display_date_format")]
    pub display_date_format: String,

    /// Expense file name, relative to the base directory
    #[serde(default = "default_expense_file_name")]
    pub expense_file_name: String,
}

fn default_currency_label() -> String {
    "Rs".to_string()
}

fn default_display_date_format() -> String {
    "%d/%m/%Y".to_string()
}

fn default_expense_file_name() -> String {
    DEFAULT_EXPENSE_FILE.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            monthly_income: Amount::zero(),
            currency_label: default_currency_label(),
            display_date_format: default_display_date_format(),
            expense_file_name: default_expense_file_name(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                ExpenseError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ExpenseError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Reject settings that would break formatting later on
    pub fn validate(&self) -> Result<(), ExpenseError> {
        let invalid = StrftimeItems::new(&self.display_date_format)
            .any(|item| matches!(item, Item::Error));

        // Time or zone specifiers parse fine but fail when applied to a date
        let sample = NaiveDate::default();
        let unformattable = write!(
            String::new(),
            "{}",
            sample.format(&self.display_date_format)
        )
        .is_err();

        if invalid || unformattable || self.display_date_format.is_empty() {
            return Err(ExpenseError::Config(format!(
                "Invalid display date format: '{}'",
                self.display_date_format
            )));
        }

        if self.expense_file_name.trim().is_empty() {
            return Err(ExpenseError::Config("Expense file name is empty".into()));
        }

        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            ExpenseError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        crate::storage::file_io::write_atomic(paths.settings_file(), contents.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.monthly_income, Amount::zero());
        assert_eq!(settings.currency_label, "Rs");
        assert_eq!(settings.display_date_format, "%d/%m/%Y");
        assert_eq!(settings.expense_file_name, "expenses.csv");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.monthly_income = Amount::new(1000.0);
        settings.currency_label = "EUR".to_string();
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.monthly_income.value(), 1000.0);
        assert_eq!(loaded.currency_label, "EUR");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"monthly_income": 250.5}"#).unwrap();
        assert_eq!(settings.monthly_income.value(), 250.5);
        assert_eq!(settings.currency_label, "Rs");
        assert_eq!(settings.expense_file_name, "expenses.csv");
    }

    #[test]
    fn test_validate_rejects_bad_date_format() {
        let mut settings = Settings::default();
        assert!(settings.validate().is_ok());

        settings.display_date_format = "%d/%!".to_string();
        assert!(matches!(settings.validate(), Err(ExpenseError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_time_specifiers() {
        let mut settings = Settings::default();
        settings.display_date_format = "%d/%m/%Y %H:%M".to_string();
        assert!(matches!(settings.validate(), Err(ExpenseError::Config(_))));
    }

    #[test]
    fn test_load_rejects_time_specifiers() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(
            paths.settings_file(),
            r#"{"display_date_format": "%d/%m/%Y %H:%M"}"#,
        )
        .unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, ExpenseError::Config(_)));
    }

    #[test]
    fn test_corrupt_settings_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, ExpenseError::Config(_)));
    }
}
