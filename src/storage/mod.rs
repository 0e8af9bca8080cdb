//! Storage layer for the expense tracker
//!
//! The expense file is a derived artifact: it is rewritten in full from the
//! store after every change and read once at startup.

pub mod file_io;
pub mod flat_file;

pub use file_io::write_atomic;
pub use flat_file::{load, save, LoadReport, SkippedLine};
