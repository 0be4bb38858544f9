//! Domain records for budgets, recorded flows, and savings goals.

pub mod category;
pub mod dream;
pub mod expense;
pub mod income;
pub mod period;
pub mod reserve;
pub mod state;

pub use category::{Budget, BudgetCategory};
pub use dream::Dream;
pub use expense::Expense;
pub use income::IncomeEntry;
pub use period::{convert_amount, normalize_budget_to_period, Period};
pub use reserve::Reserve;
pub use state::{AppState, FinancialSnapshot, UserProfile};
