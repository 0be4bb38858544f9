use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named savings goal. Achievement is sticky: once savings first reach the
/// target the flag stays set even if savings later drop below it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dream {
    pub id: Uuid,
    pub name: String,
    pub target_amount: f64,
    #[serde(default)]
    pub achieved: bool,
}

impl Dream {
    pub fn new(name: impl Into<String>, target_amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            target_amount,
            achieved: false,
        }
    }
}
