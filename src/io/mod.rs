//! File I/O for dashboard results.
//!
//! This module writes the filtered tables as CSV and whole views as JSON.

pub mod export;
pub mod report;

pub use export::{ExportPaths, export_tables, overview_to_csv, systems_to_csv};
pub use report::{view_to_json, write_view_json};
