use serde::{Deserialize, Serialize};

use super::format::{format_number, format_raw, format_temp_range, format_yes_no};
use crate::domain::a001_material::MaterialRecord;

/// Колонки таблицы результатов и отчёта, в порядке вывода
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportColumn {
    Material,
    LowFriction,
    WearResistance,
    SelfLubricating,
    TensileStrength,
    LimitingPv,
    WaterAbsorption,
    GreaseCompatibility,
    ChemicalResistance,
    TempRange,
}

impl ReportColumn {
    pub fn all() -> &'static [ReportColumn] {
        &[
            ReportColumn::Material,
            ReportColumn::LowFriction,
            ReportColumn::WearResistance,
            ReportColumn::SelfLubricating,
            ReportColumn::TensileStrength,
            ReportColumn::LimitingPv,
            ReportColumn::WaterAbsorption,
            ReportColumn::GreaseCompatibility,
            ReportColumn::ChemicalResistance,
            ReportColumn::TempRange,
        ]
    }

    pub fn header(&self) -> &'static str {
        match self {
            ReportColumn::Material => "Material",
            ReportColumn::LowFriction => "Low Friction",
            ReportColumn::WearResistance => "Wear Resistance",
            ReportColumn::SelfLubricating => "Self-Lubricating",
            ReportColumn::TensileStrength => "Tensile (psi)",
            ReportColumn::LimitingPv => "Limiting PV",
            ReportColumn::WaterAbsorption => "Water Abs.",
            ReportColumn::GreaseCompatibility => "Grease Compat.",
            ReportColumn::ChemicalResistance => "Chemical Resist.",
            ReportColumn::TempRange => "Temp Range (°F)",
        }
    }

    /// Grade columns are rendered as colored badges in the UI
    pub fn is_grade(&self) -> bool {
        matches!(
            self,
            ReportColumn::LowFriction
                | ReportColumn::WearResistance
                | ReportColumn::GreaseCompatibility
                | ReportColumn::ChemicalResistance
        )
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            ReportColumn::TensileStrength | ReportColumn::LimitingPv | ReportColumn::WaterAbsorption
        )
    }

    /// Display text of this column for a record
    pub fn cell(&self, record: &MaterialRecord) -> String {
        let text = |v: &Option<String>| v.as_deref().map(str::trim).unwrap_or("").to_string();
        match self {
            ReportColumn::Material => record.name().trim().to_string(),
            ReportColumn::LowFriction => text(&record.low_friction),
            ReportColumn::WearResistance => text(&record.wear_resistance),
            ReportColumn::SelfLubricating => format_yes_no(record.self_lubricating).to_string(),
            ReportColumn::TensileStrength => format_number(record.tensile_strength.as_ref()),
            ReportColumn::LimitingPv => format_number(record.limiting_pv.as_ref()),
            ReportColumn::WaterAbsorption => format_raw(record.water_absorption.as_ref()),
            ReportColumn::GreaseCompatibility => text(&record.grease_compatibility),
            ReportColumn::ChemicalResistance => text(&record.chemical_resistance),
            ReportColumn::TempRange => format_temp_range(
                record.low_temperature.as_ref(),
                record.high_temperature.as_ref(),
            ),
        }
    }

    /// All cells of a record in column order
    pub fn row(record: &MaterialRecord) -> Vec<String> {
        ReportColumn::all().iter().map(|c| c.cell(record)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_row_formats_every_column() {
        let record: MaterialRecord = serde_json::from_value(json!({
            "material": " PEEK ",
            "low_friction": "Good",
            "wear_resistance": "Excellent",
            "self_lubricating": true,
            "tensile_strength": 14000,
            "limiting_pv": "n/a",
            "water_absorption": 0.1,
            "grease_compatibility": "Best",
            "low_temperature": -50,
            "high_temperature": 480
        }))
        .unwrap();

        assert_eq!(
            ReportColumn::row(&record),
            vec![
                "PEEK",
                "Good",
                "Excellent",
                "Yes",
                "14,000",
                "n/a",
                "0.1",
                "Best",
                "",
                "-50° to 480°",
            ]
        );
    }

    #[test]
    fn test_headers_match_columns() {
        assert_eq!(ReportColumn::all().len(), 10);
        assert_eq!(ReportColumn::TempRange.header(), "Temp Range (°F)");
        assert!(ReportColumn::LowFriction.is_grade());
        assert!(!ReportColumn::Material.is_grade());
    }
}
