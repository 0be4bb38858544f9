use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An ad-hoc income entry outside the periodic budget lines. Append-only,
/// deletable by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeEntry {
    pub id: Uuid,
    pub date: NaiveDate,
    pub source: String,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl IncomeEntry {
    pub fn new(date: NaiveDate, source: impl Into<String>, amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            source: source.into(),
            amount,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
