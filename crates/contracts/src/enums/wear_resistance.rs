use serde::{Deserialize, Serialize};

use super::Choice;

/// Износостойкость (wear_resistance)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WearResistance {
    Excellent,
    High,
    Good,
    Fair,
}

impl Choice for WearResistance {
    fn all() -> &'static [Self] {
        &[
            WearResistance::Excellent,
            WearResistance::High,
            WearResistance::Good,
            WearResistance::Fair,
        ]
    }

    fn display_name(&self) -> &'static str {
        match self {
            WearResistance::Excellent => "Excellent",
            WearResistance::High => "High",
            WearResistance::Good => "Good",
            WearResistance::Fair => "Fair",
        }
    }
}

impl std::fmt::Display for WearResistance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
