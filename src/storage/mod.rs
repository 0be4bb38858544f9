pub mod json_backend;

use crate::{core::errors::BudgetError, domain::AppState};

pub type Result<T> = std::result::Result<T, BudgetError>;

/// Abstraction over persistence backends holding the application snapshot.
pub trait StateStore: Send + Sync {
    /// Returns the stored snapshot, or a default-initialized one when the
    /// backing data is absent or unreadable. Read failures never surface to
    /// the caller.
    fn load(&self) -> AppState;

    fn save(&self, state: &AppState) -> Result<()>;

    fn reset(&self) -> Result<()>;
}

pub use json_backend::JsonStore;
