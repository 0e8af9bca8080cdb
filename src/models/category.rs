//! Expense categories
//!
//! Categories are free-form text in the store. The presets below are the
//! choices offered for quick entry; `Custom` stands for "let me type one".

use std::fmt;

use crate::error::{ExpenseError, ExpenseResult};

/// Category choices offered to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetCategory {
    Food,
    Travel,
    Shopping,
    Bills,
    Custom,
}

impl PresetCategory {
    /// All presets in display order
    pub const ALL: [PresetCategory; 5] = [
        PresetCategory::Food,
        PresetCategory::Travel,
        PresetCategory::Shopping,
        PresetCategory::Bills,
        PresetCategory::Custom,
    ];

    /// Canonical name of the preset
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Travel => "Travel",
            Self::Shopping => "Shopping",
            Self::Bills => "Bills",
            Self::Custom => "Custom",
        }
    }

    /// Look up a preset by name, ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|preset| preset.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for PresetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolve a category choice (and optional custom text) to plain text
///
/// - a preset name yields its canonical spelling
/// - `Custom` takes the custom text, which must not be blank
/// - anything else non-blank is used as typed (trimmed)
pub fn resolve_category(choice: Option<&str>, custom: Option<&str>) -> ExpenseResult<String> {
    let choice = choice.map(str::trim).filter(|c| !c.is_empty());

    let Some(choice) = choice else {
        return Err(ExpenseError::Validation("Select category.".into()));
    };

    match PresetCategory::from_name(choice) {
        Some(PresetCategory::Custom) => custom
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .ok_or_else(|| ExpenseError::Validation("Enter custom category.".into())),
        Some(preset) => Ok(preset.name().to_string()),
        None => Ok(choice.to_string()),
    }
}
