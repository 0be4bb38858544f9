use serde::{Deserialize, Serialize};

use super::period::Period;

/// A budget line recorded during onboarding or import. Positive amounts are
/// income; negative amounts represent fixed outflows entered as budget lines.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetCategory {
    pub name: String,
    pub amount: f64,
    #[serde(default)]
    pub period: Period,
    /// Set by the normalizer when the amount was converted from another
    /// recurrence period.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_period: Option<Period>,
}

impl BudgetCategory {
    pub fn new(name: impl Into<String>, amount: f64, period: Period) -> Self {
        Self {
            name: name.into(),
            amount,
            period,
            original_period: None,
        }
    }
}

/// The category list captured at onboarding plus its income total at the
/// time of capture.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Budget {
    #[serde(default)]
    pub categories: Vec<BudgetCategory>,
    #[serde(default)]
    pub total_income: f64,
}

impl Budget {
    pub fn new(categories: Vec<BudgetCategory>, total_income: f64) -> Self {
        Self {
            categories,
            total_income,
        }
    }
}
