use serde::{Deserialize, Serialize};

use super::CriteriaError;
use crate::enums::{
    ChemicalResistance, Choice, GreaseCompatibility, LowFriction, WearResistance, YesNo,
};

/// Ключи всех ограничений фильтра (без строки поиска)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterField {
    LowFriction,
    WearResistance,
    GreaseCompatibility,
    ChemicalResistance,
    SelfLubricating,
    MinTensileStrength,
    MinTemp,
    MaxTemp,
    MinLimitingPv,
    MaxWaterAbsorption,
}

/// How a field is entered in the filter panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Select,
    Number,
}

impl FilterField {
    pub fn all() -> &'static [FilterField] {
        &[
            FilterField::LowFriction,
            FilterField::WearResistance,
            FilterField::GreaseCompatibility,
            FilterField::ChemicalResistance,
            FilterField::SelfLubricating,
            FilterField::MinTensileStrength,
            FilterField::MinTemp,
            FilterField::MaxTemp,
            FilterField::MinLimitingPv,
            FilterField::MaxWaterAbsorption,
        ]
    }

    /// snake_case key, same as in the catalog JSON and the query string
    pub fn key(&self) -> &'static str {
        match self {
            FilterField::LowFriction => "low_friction",
            FilterField::WearResistance => "wear_resistance",
            FilterField::GreaseCompatibility => "grease_compatibility",
            FilterField::ChemicalResistance => "chemical_resistance",
            FilterField::SelfLubricating => "self_lubricating",
            FilterField::MinTensileStrength => "min_tensile_strength",
            FilterField::MinTemp => "min_temp",
            FilterField::MaxTemp => "max_temp",
            FilterField::MinLimitingPv => "min_limiting_pv",
            FilterField::MaxWaterAbsorption => "max_water_absorption",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FilterField::LowFriction => "Low Friction",
            FilterField::WearResistance => "Wear Resistance",
            FilterField::GreaseCompatibility => "Grease Compatibility",
            FilterField::ChemicalResistance => "Chemical Resistance",
            FilterField::SelfLubricating => "Self-Lubricating",
            FilterField::MinTensileStrength => "Min Tensile Strength (psi)",
            FilterField::MinTemp => "Min Temp (°F)",
            FilterField::MaxTemp => "Max Temp (°F)",
            FilterField::MinLimitingPv => "Min Limiting PV",
            FilterField::MaxWaterAbsorption => "Max Water Absorption",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FilterField::LowFriction
            | FilterField::WearResistance
            | FilterField::GreaseCompatibility
            | FilterField::ChemicalResistance
            | FilterField::SelfLubricating => FieldKind::Select,
            _ => FieldKind::Number,
        }
    }

    /// Labels offered by a select field, empty for number fields
    pub fn choices(&self) -> Vec<&'static str> {
        fn labels<T: Choice>() -> Vec<&'static str> {
            T::all().iter().map(|c| c.display_name()).collect()
        }
        match self {
            FilterField::LowFriction => labels::<LowFriction>(),
            FilterField::WearResistance => labels::<WearResistance>(),
            FilterField::GreaseCompatibility => labels::<GreaseCompatibility>(),
            FilterField::ChemicalResistance => labels::<ChemicalResistance>(),
            FilterField::SelfLubricating => labels::<YesNo>(),
            _ => Vec::new(),
        }
    }

    /// Placeholder shown in empty number inputs
    pub fn placeholder(&self) -> &'static str {
        match self {
            FilterField::MinTensileStrength => "e.g. 12000",
            FilterField::MinTemp => "-40",
            FilterField::MaxTemp => "500",
            FilterField::MinLimitingPv => "e.g. 20000",
            FilterField::MaxWaterAbsorption => "e.g. 0.2",
            _ => "",
        }
    }

    pub fn from_key(key: &str) -> Result<FilterField, CriteriaError> {
        FilterField::all()
            .iter()
            .copied()
            .find(|f| f.key() == key)
            .ok_or_else(|| CriteriaError::UnknownField(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_roundtrip_for_every_field() {
        for field in FilterField::all() {
            assert_eq!(FilterField::from_key(field.key()), Ok(*field));
        }
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(
            FilterField::from_key("color"),
            Err(CriteriaError::UnknownField("color".into()))
        );
    }

    #[test]
    fn test_choices_follow_enum_order() {
        assert_eq!(FilterField::SelfLubricating.choices(), vec!["Yes", "No"]);
        assert_eq!(FilterField::WearResistance.choices()[0], "Excellent");
        assert!(FilterField::MinTemp.choices().is_empty());
        for field in FilterField::all() {
            assert_eq!(field.choices().is_empty(), field.kind() == FieldKind::Number);
        }
    }

    #[test]
    fn test_kind() {
        assert_eq!(FilterField::SelfLubricating.kind(), FieldKind::Select);
        assert_eq!(FilterField::MaxTemp.kind(), FieldKind::Number);
    }
}
