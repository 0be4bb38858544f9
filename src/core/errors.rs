use std::result::Result as StdResult;

use thiserror::Error;

use crate::import::ImportError;

/// Unified error type for core/domain/storage layers.
#[derive(Error, Debug)]
pub enum BudgetError {
    #[error("Persistence error: {0}")]
    StorageError(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error(transparent)]
    Import(#[from] ImportError),
}

pub type Result<T> = StdResult<T, BudgetError>;

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        BudgetError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        BudgetError::StorageError(err.to_string())
    }
}
