use serde::{Deserialize, Serialize};

use super::{
    category::Budget, dream::Dream, expense::Expense, income::IncomeEntry, period::Period,
    reserve::Reserve,
};

const CURRENT_SCHEMA_VERSION: u8 = 1;

/// Onboarding status and the user's preferred comparison period.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub has_completed_onboarding: bool,
    #[serde(default)]
    pub budget_period: Period,
}

/// The whole persisted application snapshot. Loaded and replaced as a unit;
/// mutated only through the state reducers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppState {
    #[serde(default)]
    pub user: UserProfile,
    #[serde(default)]
    pub budget: Budget,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub income_entries: Vec<IncomeEntry>,
    #[serde(default)]
    pub reserves: Vec<Reserve>,
    /// Last displayed savings value, kept for trend comparison.
    #[serde(default)]
    pub savings: f64,
    #[serde(default)]
    pub previous_savings: f64,
    #[serde(default)]
    pub dreams: Vec<Dream>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_savings_goal: Option<f64>,
    #[serde(default = "AppState::schema_version_default")]
    pub schema_version: u8,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            user: UserProfile::default(),
            budget: Budget::default(),
            expenses: Vec::new(),
            income_entries: Vec::new(),
            reserves: Vec::new(),
            savings: 0.0,
            previous_savings: 0.0,
            dreams: Vec::new(),
            global_savings_goal: None,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }
}

impl AppState {
    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}

/// The derived financial summary, recomputed from the records on every read
/// and never persisted on its own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FinancialSnapshot {
    pub total_income: f64,
    pub total_expenses: f64,
    pub balance: f64,
    pub savings: f64,
    pub total_reserves: f64,
}
