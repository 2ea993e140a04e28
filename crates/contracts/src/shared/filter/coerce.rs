//! Normalization and numeric coercion shared by the filter engine and the report.

/// Trim + case-fold, applied before any string comparison
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Same as [`normalize`] for optional values; `None` becomes the empty string
pub fn normalize_opt(value: Option<&str>) -> String {
    value.map(normalize).unwrap_or_default()
}

/// Coerce text to a finite number.
///
/// Grouping commas are stripped and surrounding whitespace trimmed before
/// parsing. Empty input, unparseable text, `NaN` and infinities are all absent.
pub fn to_number(value: &str) -> Option<f64> {
    let cleaned = value.replace(',', "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}
