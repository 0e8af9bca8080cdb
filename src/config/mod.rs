//! Configuration module for the expense tracker
//!
//! - Base directory and file path resolution
//! - User settings persistence (income, currency label, date format)

pub mod paths;
pub mod settings;

pub use paths::TrackerPaths;
pub use settings::Settings;
