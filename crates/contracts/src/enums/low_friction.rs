use serde::{Deserialize, Serialize};

use super::Choice;

/// Оценка низкого трения (low_friction)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LowFriction {
    Excellent,
    #[serde(rename = "Very Low")]
    VeryLow,
    Low,
    Good,
    Fair,
    #[serde(rename = "Very Good")]
    VeryGood,
}

impl Choice for LowFriction {
    fn all() -> &'static [Self] {
        &[
            LowFriction::Excellent,
            LowFriction::VeryLow,
            LowFriction::Low,
            LowFriction::Good,
            LowFriction::Fair,
            LowFriction::VeryGood,
        ]
    }

    fn display_name(&self) -> &'static str {
        match self {
            LowFriction::Excellent => "Excellent",
            LowFriction::VeryLow => "Very Low",
            LowFriction::Low => "Low",
            LowFriction::Good => "Good",
            LowFriction::Fair => "Fair",
            LowFriction::VeryGood => "Very Good",
        }
    }
}

impl std::fmt::Display for LowFriction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
