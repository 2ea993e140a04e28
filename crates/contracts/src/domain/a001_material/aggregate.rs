use serde::{Deserialize, Deserializer, Serialize};

use crate::shared::filter::coerce::{normalize, to_number};

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialId(pub String);

impl MaterialId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MaterialId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Numeric value as stored in the catalog
// ============================================================================

/// Числовое поле каталога: либо JSON-число, либо исходный текст ("12,000")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericValue {
    Number(f64),
    Text(String),
}

impl NumericValue {
    /// Coerced value; `None` when the raw text is not a finite number
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            NumericValue::Number(n) if n.is_finite() => Some(*n),
            NumericValue::Number(_) => None,
            NumericValue::Text(s) => to_number(s),
        }
    }

    /// Raw text as it appeared in the catalog
    pub fn raw(&self) -> String {
        match self {
            NumericValue::Number(n) => n.to_string(),
            NumericValue::Text(s) => s.clone(),
        }
    }
}

impl From<f64> for NumericValue {
    fn from(value: f64) -> Self {
        NumericValue::Number(value)
    }
}

impl From<&str> for NumericValue {
    fn from(value: &str) -> Self {
        NumericValue::Text(value.to_string())
    }
}

// ============================================================================
// Record
// ============================================================================

/// One engineering material as listed in the catalog.
///
/// Categorical grades are kept as the loose strings found in the data; the
/// filter normalizes them before comparing. Numeric fields keep their raw form
/// and are coerced on read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialRecord {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<MaterialId>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub material: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub low_friction: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub wear_resistance: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub grease_compatibility: Option<String>,

    #[serde(default, deserialize_with = "lenient_text")]
    pub chemical_resistance: Option<String>,

    #[serde(default, deserialize_with = "lenient_bool")]
    pub self_lubricating: bool,

    #[serde(default)]
    pub tensile_strength: Option<NumericValue>,

    #[serde(default)]
    pub limiting_pv: Option<NumericValue>,

    #[serde(default)]
    pub water_absorption: Option<NumericValue>,

    #[serde(default)]
    pub low_temperature: Option<NumericValue>,

    #[serde(default)]
    pub high_temperature: Option<NumericValue>,
}

impl MaterialRecord {
    /// Display name, empty when the catalog has none
    pub fn name(&self) -> &str {
        self.material.as_deref().unwrap_or("")
    }

    pub fn tensile_strength(&self) -> Option<f64> {
        self.tensile_strength.as_ref().and_then(NumericValue::as_f64)
    }

    pub fn limiting_pv(&self) -> Option<f64> {
        self.limiting_pv.as_ref().and_then(NumericValue::as_f64)
    }

    pub fn water_absorption(&self) -> Option<f64> {
        self.water_absorption.as_ref().and_then(NumericValue::as_f64)
    }

    pub fn low_temperature(&self) -> Option<f64> {
        self.low_temperature.as_ref().and_then(NumericValue::as_f64)
    }

    pub fn high_temperature(&self) -> Option<f64> {
        self.high_temperature.as_ref().and_then(NumericValue::as_f64)
    }

    /// Identifier fallback: explicit id, then material name, then position.
    pub fn resolve_id(&self, position: usize) -> MaterialId {
        let explicit = self
            .id
            .as_ref()
            .map(|id| id.as_str().trim())
            .filter(|s| !s.is_empty());
        if let Some(id) = explicit {
            return MaterialId::new(id);
        }
        let name = self.name().trim();
        if !name.is_empty() {
            return MaterialId::new(name);
        }
        MaterialId::new(position.to_string())
    }
}

// ============================================================================
// Lenient deserializers
// ============================================================================

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Bool(bool),
    Number(f64),
    Text(String),
}

fn lenient_id<'de, D>(deserializer: D) -> Result<Option<MaterialId>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_text(deserializer)?.map(MaterialId))
}

/// String, number or bool rendered as text; null stays `None`
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Scalar>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        Scalar::Bool(b) => b.to_string(),
        Scalar::Number(n) => n.to_string(),
        Scalar::Text(s) => s,
    }))
}

/// Булево поле: null → false, "yes"/"true"/"y"/"1" → true, число ≠ 0 → true
fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Scalar>::deserialize(deserializer)?;
    Ok(match value {
        None => false,
        Some(Scalar::Bool(b)) => b,
        Some(Scalar::Number(n)) => n != 0.0,
        Some(Scalar::Text(s)) => matches!(normalize(&s).as_str(), "yes" | "true" | "y" | "1"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> MaterialRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_deserialize_full_record() {
        let r = record(json!({
            "id": "peek-1",
            "material": "PEEK",
            "low_friction": "Good",
            "wear_resistance": "Excellent",
            "grease_compatibility": "Best",
            "chemical_resistance": "Excellent",
            "self_lubricating": false,
            "tensile_strength": 14000,
            "limiting_pv": "20,000",
            "water_absorption": 0.1,
            "low_temperature": -50,
            "high_temperature": 480
        }));
        assert_eq!(r.id, Some(MaterialId::new("peek-1")));
        assert_eq!(r.name(), "PEEK");
        assert_eq!(r.tensile_strength(), Some(14000.0));
        assert_eq!(r.limiting_pv(), Some(20000.0));
        assert_eq!(r.water_absorption(), Some(0.1));
        assert_eq!(r.low_temperature(), Some(-50.0));
        assert_eq!(r.high_temperature(), Some(480.0));
        assert!(!r.self_lubricating);
    }

    #[test]
    fn test_missing_fields_default_to_none() {
        let r = record(json!({ "material": "Bronze" }));
        assert_eq!(r.id, None);
        assert_eq!(r.low_friction, None);
        assert_eq!(r.tensile_strength(), None);
        assert!(!r.self_lubricating);
    }

    #[test]
    fn test_non_numeric_text_coerces_to_none() {
        let r = record(json!({ "material": "X", "tensile_strength": "n/a", "limiting_pv": null }));
        assert_eq!(
            r.tensile_strength,
            Some(NumericValue::Text("n/a".to_string()))
        );
        assert_eq!(r.tensile_strength(), None);
        assert_eq!(r.limiting_pv(), None);
    }

    #[test]
    fn test_lenient_bool() {
        assert!(record(json!({ "self_lubricating": true })).self_lubricating);
        assert!(record(json!({ "self_lubricating": "Yes" })).self_lubricating);
        assert!(record(json!({ "self_lubricating": 1 })).self_lubricating);
        assert!(!record(json!({ "self_lubricating": "No" })).self_lubricating);
        assert!(!record(json!({ "self_lubricating": null })).self_lubricating);
        assert!(!record(json!({ "self_lubricating": 0 })).self_lubricating);
    }

    #[test]
    fn test_numeric_id_is_accepted() {
        let r = record(json!({ "id": 7, "material": "Nylon" }));
        assert_eq!(r.id, Some(MaterialId::new("7")));
    }

    #[test]
    fn test_resolve_id_fallback_chain() {
        let with_id = record(json!({ "id": " a1 ", "material": "Acetal" }));
        assert_eq!(with_id.resolve_id(3), MaterialId::new("a1"));

        let blank_id = record(json!({ "id": "  ", "material": "Acetal" }));
        assert_eq!(blank_id.resolve_id(3), MaterialId::new("Acetal"));

        let anonymous = record(json!({}));
        assert_eq!(anonymous.resolve_id(3), MaterialId::new("3"));
    }
}
