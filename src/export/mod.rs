//! Export module for the budget tracker
//!
//! Provides data export in two formats:
//! - CSV: transactions and the expense report (spreadsheet-compatible)
//! - JSON: the whole session, machine-readable and re-importable

pub mod csv;
pub mod json;

pub use self::csv::{export_report_csv, export_transactions_csv};
pub use self::json::{export_json, import_json, SessionExport, EXPORT_SCHEMA_VERSION};
