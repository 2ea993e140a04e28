use serde::{Deserialize, Serialize};

use super::coerce::{normalize, to_number};
use super::{CriteriaError, FilterField};
use crate::enums::{
    ChemicalResistance, Choice, GreaseCompatibility, LowFriction, WearResistance, YesNo,
};

/// Query-string key of the free-text search
pub const SEARCH_KEY: &str = "q";

/// Snapshot of everything the user asked for in the filter panel.
///
/// Values are never edited in place: every `with_*`/`without` call returns a
/// new snapshot, the old one stays valid. Categorical constraints are `None`
/// for "Any". Numeric constraints keep the text as typed; text that does not
/// coerce to a number leaves the constraint inactive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub low_friction: Option<LowFriction>,
    pub wear_resistance: Option<WearResistance>,
    pub grease_compatibility: Option<GreaseCompatibility>,
    pub chemical_resistance: Option<ChemicalResistance>,
    pub self_lubricating: Option<YesNo>,

    pub min_tensile_strength: String,
    pub min_temp: String,
    pub max_temp: String,
    pub min_limiting_pv: String,
    pub max_water_absorption: String,

    pub search_query: String,
}

fn parse_choice<T: Choice>(field: FilterField, raw: &str) -> Result<Option<T>, CriteriaError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    T::from_label(raw)
        .map(Some)
        .ok_or_else(|| CriteriaError::InvalidChoice {
            field,
            value: raw.to_string(),
        })
}

fn label_of<T: Choice>(value: Option<T>) -> String {
    value.map(|v| v.display_name().to_string()).unwrap_or_default()
}

impl FilterCriteria {
    /// Defaults: no constraint, empty search ("Clear All")
    pub fn cleared() -> Self {
        Self::default()
    }

    /// Replace one constraint with a raw UI value.
    ///
    /// Empty text clears the constraint. Unknown select values are rejected.
    pub fn with_value(&self, field: FilterField, raw: &str) -> Result<Self, CriteriaError> {
        let mut next = self.clone();
        match field {
            FilterField::LowFriction => next.low_friction = parse_choice(field, raw)?,
            FilterField::WearResistance => next.wear_resistance = parse_choice(field, raw)?,
            FilterField::GreaseCompatibility => {
                next.grease_compatibility = parse_choice(field, raw)?
            }
            FilterField::ChemicalResistance => {
                next.chemical_resistance = parse_choice(field, raw)?
            }
            FilterField::SelfLubricating => next.self_lubricating = parse_choice(field, raw)?,
            FilterField::MinTensileStrength => next.min_tensile_strength = raw.to_string(),
            FilterField::MinTemp => next.min_temp = raw.to_string(),
            FilterField::MaxTemp => next.max_temp = raw.to_string(),
            FilterField::MinLimitingPv => next.min_limiting_pv = raw.to_string(),
            FilterField::MaxWaterAbsorption => next.max_water_absorption = raw.to_string(),
        }
        Ok(next)
    }

    pub fn with_search(&self, query: &str) -> Self {
        Self {
            search_query: query.to_string(),
            ..self.clone()
        }
    }

    /// Drop a single constraint, keeping the rest
    pub fn without(&self, field: FilterField) -> Self {
        self.with_value(field, "").unwrap_or_else(|_| self.clone())
    }

    /// Current value of a field as shown in the panel ("" = Any / empty)
    pub fn value_of(&self, field: FilterField) -> String {
        match field {
            FilterField::LowFriction => label_of(self.low_friction),
            FilterField::WearResistance => label_of(self.wear_resistance),
            FilterField::GreaseCompatibility => label_of(self.grease_compatibility),
            FilterField::ChemicalResistance => label_of(self.chemical_resistance),
            FilterField::SelfLubricating => label_of(self.self_lubricating),
            FilterField::MinTensileStrength => self.min_tensile_strength.clone(),
            FilterField::MinTemp => self.min_temp.clone(),
            FilterField::MaxTemp => self.max_temp.clone(),
            FilterField::MinLimitingPv => self.min_limiting_pv.clone(),
            FilterField::MaxWaterAbsorption => self.max_water_absorption.clone(),
        }
    }

    /// Threshold of a numeric field, `None` when inactive
    pub fn threshold(&self, field: FilterField) -> Option<f64> {
        match field {
            FilterField::MinTensileStrength => to_number(&self.min_tensile_strength),
            FilterField::MinTemp => to_number(&self.min_temp),
            FilterField::MaxTemp => to_number(&self.max_temp),
            FilterField::MinLimitingPv => to_number(&self.min_limiting_pv),
            FilterField::MaxWaterAbsorption => to_number(&self.max_water_absorption),
            _ => None,
        }
    }

    pub fn is_active(&self, field: FilterField) -> bool {
        match field {
            FilterField::LowFriction => self.low_friction.is_some(),
            FilterField::WearResistance => self.wear_resistance.is_some(),
            FilterField::GreaseCompatibility => self.grease_compatibility.is_some(),
            FilterField::ChemicalResistance => self.chemical_resistance.is_some(),
            FilterField::SelfLubricating => self.self_lubricating.is_some(),
            _ => self.threshold(field).is_some(),
        }
    }

    /// Number of active constraints, search excluded
    pub fn active_count(&self) -> usize {
        FilterField::all()
            .iter()
            .filter(|f| self.is_active(**f))
            .count()
    }

    /// Active constraints as chips: field + "Label: value"
    pub fn active_tags(&self) -> Vec<(FilterField, String)> {
        FilterField::all()
            .iter()
            .copied()
            .filter(|f| self.is_active(*f))
            .map(|f| {
                let text = format!("{}: {}", f.display_name(), self.value_of(f).trim());
                (f, text)
            })
            .collect()
    }

    pub fn has_search(&self) -> bool {
        !normalize(&self.search_query).is_empty()
    }

    /// True when filtering returns the input unchanged
    pub fn is_unconstrained(&self) -> bool {
        self.active_count() == 0 && !self.has_search()
    }

    /// Non-empty values as (key, value) pairs, search last under [`SEARCH_KEY`]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs: Vec<(&'static str, String)> = FilterField::all()
            .iter()
            .map(|f| (f.key(), self.value_of(*f)))
            .filter(|(_, v)| !v.trim().is_empty())
            .collect();
        if !self.search_query.trim().is_empty() {
            pairs.push((SEARCH_KEY, self.search_query.clone()));
        }
        pairs
    }

    /// Rebuild criteria from (key, value) pairs.
    ///
    /// Bad pairs are collected and skipped; the rest still apply.
    pub fn from_pairs<'a, I>(pairs: I) -> (Self, Vec<CriteriaError>)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut criteria = Self::default();
        let mut errors = Vec::new();
        for (key, value) in pairs {
            if key == SEARCH_KEY {
                criteria = criteria.with_search(value);
                continue;
            }
            let applied = FilterField::from_key(key)
                .and_then(|field| criteria.with_value(field, value));
            match applied {
                Ok(next) => criteria = next,
                Err(e) => errors.push(e),
            }
        }
        (criteria, errors)
    }
}
