use serde::{Deserialize, Serialize};

use super::Choice;

/// Химическая стойкость (chemical_resistance)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChemicalResistance {
    Excellent,
    #[serde(rename = "Very Good")]
    VeryGood,
    Good,
}

impl Choice for ChemicalResistance {
    fn all() -> &'static [Self] {
        &[
            ChemicalResistance::Excellent,
            ChemicalResistance::VeryGood,
            ChemicalResistance::Good,
        ]
    }

    fn display_name(&self) -> &'static str {
        match self {
            ChemicalResistance::Excellent => "Excellent",
            ChemicalResistance::VeryGood => "Very Good",
            ChemicalResistance::Good => "Good",
        }
    }
}

impl std::fmt::Display for ChemicalResistance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
