use serde::{Deserialize, Serialize};

use super::Choice;

/// Совместимость со смазкой (grease_compatibility)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GreaseCompatibility {
    Best,
    Excellent,
    #[serde(rename = "Very Good")]
    VeryGood,
    Good,
    Poor,
}

impl Choice for GreaseCompatibility {
    fn all() -> &'static [Self] {
        &[
            GreaseCompatibility::Best,
            GreaseCompatibility::Excellent,
            GreaseCompatibility::VeryGood,
            GreaseCompatibility::Good,
            GreaseCompatibility::Poor,
        ]
    }

    fn display_name(&self) -> &'static str {
        match self {
            GreaseCompatibility::Best => "Best",
            GreaseCompatibility::Excellent => "Excellent",
            GreaseCompatibility::VeryGood => "Very Good",
            GreaseCompatibility::Good => "Good",
            GreaseCompatibility::Poor => "Poor",
        }
    }
}

impl std::fmt::Display for GreaseCompatibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
