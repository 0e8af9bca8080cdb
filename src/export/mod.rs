//! Export module for the expense tracker
//!
//! - JSON: machine-readable snapshot of the session
//! - YAML: human-readable snapshot of the session

pub mod json;
pub mod yaml;

pub use json::{export_json, ExpenseExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_yaml;
