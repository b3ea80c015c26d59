//! Inventory reporting: CSV export and display formatting.
//!
//! Reads ledger statistics and renders them; nothing here mutates state.

pub mod format;
pub mod report;

pub use format::{format_currency, format_thousands};
pub use report::{ReportError, inventory_report_csv};
