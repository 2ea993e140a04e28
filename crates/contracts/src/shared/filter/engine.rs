//! Filter engine: narrows the material list against a [`FilterCriteria`].
//!
//! Pure and total: no I/O, no errors, every record judged on its own. All
//! constraints are AND-combined; an inactive constraint lets everything pass,
//! an active one fails closed on missing or malformed data.

use super::coerce::{normalize, normalize_opt};
use super::{FilterCriteria, FilterField};
use crate::domain::a001_material::MaterialRecord;
use crate::enums::Choice;

/// Criteria compiled for evaluation: labels normalized, thresholds coerced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterPlan {
    search: Option<String>,
    low_friction: Option<String>,
    wear_resistance: Option<String>,
    grease_compatibility: Option<String>,
    chemical_resistance: Option<String>,
    self_lubricating: Option<bool>,
    min_tensile_strength: Option<f64>,
    min_temp: Option<f64>,
    max_temp: Option<f64>,
    min_limiting_pv: Option<f64>,
    max_water_absorption: Option<f64>,
}

fn choice_key<T: Choice>(value: Option<T>) -> Option<String> {
    value.map(|v| normalize(v.display_name()))
}

/// Categorical match after normalization of both sides
fn grade_matches(wanted: &Option<String>, actual: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(w) => normalize_opt(actual) == *w,
    }
}

/// Active bound with a missing value fails
fn bound_holds(threshold: Option<f64>, value: Option<f64>, holds: fn(f64, f64) -> bool) -> bool {
    match threshold {
        None => true,
        Some(t) => value.map_or(false, |v| holds(v, t)),
    }
}

impl FilterPlan {
    pub fn new(criteria: &FilterCriteria) -> Self {
        let search = normalize(&criteria.search_query);
        Self {
            search: (!search.is_empty()).then_some(search),
            low_friction: choice_key(criteria.low_friction),
            wear_resistance: choice_key(criteria.wear_resistance),
            grease_compatibility: choice_key(criteria.grease_compatibility),
            chemical_resistance: choice_key(criteria.chemical_resistance),
            self_lubricating: criteria.self_lubricating.map(|v| v.as_bool()),
            min_tensile_strength: criteria.threshold(FilterField::MinTensileStrength),
            min_temp: criteria.threshold(FilterField::MinTemp),
            max_temp: criteria.threshold(FilterField::MaxTemp),
            min_limiting_pv: criteria.threshold(FilterField::MinLimitingPv),
            max_water_absorption: criteria.threshold(FilterField::MaxWaterAbsorption),
        }
    }

    /// True when no constraint is active and the search is empty
    pub fn is_empty(&self) -> bool {
        *self == FilterPlan::default()
    }

    pub fn matches(&self, record: &MaterialRecord) -> bool {
        // Поиск по названию материала
        if let Some(q) = &self.search {
            if !normalize(record.name()).contains(q.as_str()) {
                return false;
            }
        }

        if !grade_matches(&self.low_friction, record.low_friction.as_deref())
            || !grade_matches(&self.wear_resistance, record.wear_resistance.as_deref())
            || !grade_matches(
                &self.grease_compatibility,
                record.grease_compatibility.as_deref(),
            )
            || !grade_matches(
                &self.chemical_resistance,
                record.chemical_resistance.as_deref(),
            )
        {
            return false;
        }

        if let Some(want) = self.self_lubricating {
            if record.self_lubricating != want {
                return false;
            }
        }

        // Temperature window: the material's range must cover the requested
        // point, so its floor must be at or below min_temp and its ceiling at
        // or above max_temp.
        bound_holds(self.min_tensile_strength, record.tensile_strength(), |v, t| v >= t)
            && bound_holds(self.min_temp, record.low_temperature(), |v, t| v <= t)
            && bound_holds(self.max_temp, record.high_temperature(), |v, t| v >= t)
            && bound_holds(self.min_limiting_pv, record.limiting_pv(), |v, t| v >= t)
            && bound_holds(self.max_water_absorption, record.water_absorption(), |v, t| v <= t)
    }
}

/// Stable filter: matching records in their original order
pub fn filter_materials<'a>(
    records: &'a [MaterialRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a MaterialRecord> {
    let plan = FilterPlan::new(criteria);
    records.iter().filter(|r| plan.matches(r)).collect()
}

/// Filtered list together with the unfiltered size, for "N of M" displays
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome<'a> {
    pub total: usize,
    pub matched: Vec<&'a MaterialRecord>,
}

impl FilterOutcome<'_> {
    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }
}

pub fn evaluate<'a>(records: &'a [MaterialRecord], criteria: &FilterCriteria) -> FilterOutcome<'a> {
    FilterOutcome {
        total: records.len(),
        matched: filter_materials(records, criteria),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(value: serde_json::Value) -> Vec<MaterialRecord> {
        serde_json::from_value(value).unwrap()
    }

    fn peek_ptfe() -> Vec<MaterialRecord> {
        records(json!([
            {"material": "PEEK", "tensile_strength": 14000, "low_temperature": -50, "high_temperature": 480},
            {"material": "PTFE", "tensile_strength": 3000, "low_temperature": -100, "high_temperature": 260}
        ]))
    }

    fn sample() -> Vec<MaterialRecord> {
        records(json!([
            {
                "material": "Acetal", "low_friction": "Good", "wear_resistance": "Good",
                "grease_compatibility": "Excellent", "chemical_resistance": "Good",
                "self_lubricating": false, "tensile_strength": "10,000", "limiting_pv": 3000,
                "water_absorption": 0.25, "low_temperature": -40, "high_temperature": 180
            },
            {
                "material": "Oil-Filled Nylon", "low_friction": " very low ", "wear_resistance": "High",
                "grease_compatibility": "Best", "chemical_resistance": "Very Good",
                "self_lubricating": true, "tensile_strength": 11000, "limiting_pv": "n/a",
                "water_absorption": "1.2", "low_temperature": -60, "high_temperature": 230
            },
            {
                "material": "Bronze", "low_friction": "Fair", "wear_resistance": "Excellent",
                "grease_compatibility": "Very Good", "chemical_resistance": "Excellent",
                "tensile_strength": 45000, "limiting_pv": 50000,
                "low_temperature": null, "high_temperature": 500
            },
            {
                "material": "PTFE Composite", "low_friction": "Excellent", "wear_resistance": "Fair",
                "grease_compatibility": "Poor", "chemical_resistance": "Excellent",
                "self_lubricating": true, "tensile_strength": "abc",
                "water_absorption": 0.01, "low_temperature": -100, "high_temperature": "260"
            }
        ]))
    }

    fn names(found: &[&MaterialRecord]) -> Vec<String> {
        found.iter().map(|r| r.name().to_string()).collect()
    }

    fn criteria(field: FilterField, value: &str) -> FilterCriteria {
        FilterCriteria::cleared().with_value(field, value).unwrap()
    }

    #[test]
    fn test_no_constraints_is_identity() {
        let all = sample();
        let found = filter_materials(&all, &FilterCriteria::cleared());
        assert_eq!(found.len(), all.len());
        assert!(found.iter().zip(all.iter()).all(|(a, b)| std::ptr::eq(*a, b)));
        assert!(FilterPlan::new(&FilterCriteria::cleared()).is_empty());
    }

    #[test]
    fn test_whitespace_only_search_is_inactive() {
        let all = sample();
        let found = filter_materials(&all, &FilterCriteria::cleared().with_search("   "));
        assert_eq!(found.len(), all.len());
    }

    #[test]
    fn test_min_tensile_scenario() {
        let all = peek_ptfe();
        let found = filter_materials(&all, &criteria(FilterField::MinTensileStrength, "10000"));
        assert_eq!(names(&found), vec!["PEEK"]);
    }

    #[test]
    fn test_min_temp_scenario() {
        let all = peek_ptfe();
        let found = filter_materials(&all, &criteria(FilterField::MinTemp, "-60"));
        assert_eq!(names(&found), vec!["PTFE"]);
    }

    #[test]
    fn test_search_scenario() {
        let all = peek_ptfe();
        let found = filter_materials(&all, &FilterCriteria::cleared().with_search("pe"));
        assert_eq!(names(&found), vec!["PEEK"]);
    }

    #[test]
    fn test_categorical_match_is_normalized() {
        let all = sample();
        let found = filter_materials(&all, &criteria(FilterField::LowFriction, "Very Low"));
        assert_eq!(names(&found), vec!["Oil-Filled Nylon"]);

        let found = filter_materials(&all, &criteria(FilterField::ChemicalResistance, "excellent"));
        assert_eq!(names(&found), vec!["Bronze", "PTFE Composite"]);
    }

    #[test]
    fn test_categorical_property_over_all_choices() {
        let all = sample();
        for grade in crate::enums::WearResistance::all() {
            let c = criteria(FilterField::WearResistance, grade.display_name());
            let found = filter_materials(&all, &c);
            for r in &all {
                let expected = normalize_opt(r.wear_resistance.as_deref())
                    == normalize(grade.display_name());
                let present = found.iter().any(|f| std::ptr::eq(*f, r));
                assert_eq!(present, expected, "{} / {}", r.name(), grade);
            }
        }
    }

    #[test]
    fn test_self_lubricating_treats_missing_as_false() {
        let all = sample();
        let yes = filter_materials(&all, &criteria(FilterField::SelfLubricating, "Yes"));
        assert_eq!(names(&yes), vec!["Oil-Filled Nylon", "PTFE Composite"]);

        let no = filter_materials(&all, &criteria(FilterField::SelfLubricating, "No"));
        assert_eq!(names(&no), vec!["Acetal", "Bronze"]);
    }

    #[test]
    fn test_bounds_fail_closed_on_bad_data() {
        let all = sample();
        // "abc" tensile never passes an active bound
        let found = filter_materials(&all, &criteria(FilterField::MinTensileStrength, "1"));
        assert_eq!(names(&found), vec!["Acetal", "Oil-Filled Nylon", "Bronze"]);

        // "n/a" PV and missing PV both excluded
        let found = filter_materials(&all, &criteria(FilterField::MinLimitingPv, "0"));
        assert_eq!(names(&found), vec!["Acetal", "Bronze"]);

        // Bronze has no water absorption at all
        let found = filter_materials(&all, &criteria(FilterField::MaxWaterAbsorption, "1.2"));
        assert_eq!(names(&found), vec!["Acetal", "Oil-Filled Nylon", "PTFE Composite"]);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let all = sample();
        let found = filter_materials(&all, &criteria(FilterField::MinTensileStrength, "10,000"));
        assert!(names(&found).contains(&"Acetal".to_string()));

        let found = filter_materials(&all, &criteria(FilterField::MaxTemp, "260"));
        assert_eq!(names(&found), vec!["Bronze", "PTFE Composite"]);
    }

    #[test]
    fn test_temperature_range_properties() {
        let all = sample();
        for t in [-120.0, -60.0, -40.0, 0.0] {
            let found = filter_materials(&all, &criteria(FilterField::MinTemp, &t.to_string()));
            for r in &found {
                assert!(r.low_temperature().map_or(false, |lo| lo <= t));
            }
        }
        for t in [100.0, 230.0, 500.0, 600.0] {
            let found = filter_materials(&all, &criteria(FilterField::MaxTemp, &t.to_string()));
            for r in &found {
                assert!(r.high_temperature().map_or(false, |hi| hi >= t));
            }
        }
        // Bronze has no floor, so any active min_temp drops it
        let found = filter_materials(&all, &criteria(FilterField::MinTemp, "1000"));
        assert!(!names(&found).contains(&"Bronze".to_string()));
    }

    #[test]
    fn test_max_temp_excludes_missing_or_malformed_ceiling() {
        let all = records(json!([
            {"material": "Nylon", "high_temperature": 250},
            {"material": "No Ceiling", "high_temperature": null},
            {"material": "Unknown Ceiling", "high_temperature": "n/a"}
        ]));

        for t in ["-1000", "0", "500"] {
            let found = filter_materials(&all, &criteria(FilterField::MaxTemp, t));
            assert!(!names(&found).contains(&"No Ceiling".to_string()), "max_temp {t}");
            assert!(!names(&found).contains(&"Unknown Ceiling".to_string()), "max_temp {t}");
        }

        let found = filter_materials(&all, &criteria(FilterField::MaxTemp, "-1000"));
        assert_eq!(names(&found), vec!["Nylon"]);

        let found = filter_materials(&all, &FilterCriteria::cleared());
        assert_eq!(names(&found), vec!["Nylon", "No Ceiling", "Unknown Ceiling"]);
    }

    #[test]
    fn test_max_water_absorption_excludes_missing_value() {
        let all = records(json!([
            {"material": "Acetal", "water_absorption": 0.25},
            {"material": "Bronze"}
        ]));

        let found = filter_materials(&all, &criteria(FilterField::MaxWaterAbsorption, "1000000000"));
        assert_eq!(names(&found), vec!["Acetal"]);

        let found = filter_materials(&all, &FilterCriteria::cleared());
        assert_eq!(names(&found), vec!["Acetal", "Bronze"]);
    }

    #[test]
    fn test_uncoercible_criterion_imposes_nothing() {
        let all = sample();
        let found = filter_materials(&all, &criteria(FilterField::MinLimitingPv, "lots"));
        assert_eq!(found.len(), all.len());
    }

    #[test]
    fn test_constraints_combine_with_and() {
        let all = sample();
        let c = criteria(FilterField::SelfLubricating, "Yes")
            .with_value(FilterField::MinTemp, "-80")
            .unwrap()
            .with_search("ptfe");
        let found = filter_materials(&all, &c);
        assert_eq!(names(&found), vec!["PTFE Composite"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let all = sample();
        let c = criteria(FilterField::MaxTemp, "200").with_search("o");
        let once: Vec<MaterialRecord> = filter_materials(&all, &c).into_iter().cloned().collect();
        let twice: Vec<MaterialRecord> = filter_materials(&once, &c).into_iter().cloned().collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_evaluate_reports_counts() {
        let all = sample();
        let outcome = evaluate(&all, &criteria(FilterField::WearResistance, "High"));
        assert_eq!(outcome.total, 4);
        assert_eq!(outcome.matched_count(), 1);
    }
}
