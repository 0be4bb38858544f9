use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Money set aside outside the income/expense flow. Adds directly to
/// displayed savings, independent of the budget balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reserve {
    pub id: Uuid,
    pub date: NaiveDate,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Reserve {
    pub fn new(date: NaiveDate, amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            amount,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
