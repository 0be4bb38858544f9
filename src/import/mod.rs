//! Spreadsheet import boundary: uploaded tabular budgets become normalized
//! category records before they ever reach the aggregation engine.

pub mod csv_adapter;

use thiserror::Error;

/// Failure reasons surfaced at the import boundary. Partially-invalid sheets
/// degrade row by row; only an unreadable or fully-invalid sheet fails.
#[derive(Debug, Error)]
pub enum ImportError {
    /// Every row was missing a category name or carried a non-numeric amount.
    #[error("no valid data found")]
    NoValidData,
    #[error("failed to read spreadsheet: {0}")]
    Read(#[from] csv::Error),
    #[error("failed to write spreadsheet: {0}")]
    Write(#[from] std::io::Error),
}

pub use csv_adapter::{parse_budget_csv, write_template, ImportReport};
