//! Filter criteria mirrored into the page query string

use contracts::shared::filter::FilterCriteria;
use std::collections::BTreeMap;
use web_sys::window;

/// Query string (without `?`) for the criteria; empty when unconstrained
pub fn criteria_to_query(criteria: &FilterCriteria) -> String {
    let params: BTreeMap<&str, String> = criteria.to_pairs().into_iter().collect();
    if params.is_empty() {
        return String::new();
    }
    serde_qs::to_string(&params).unwrap_or_default()
}

/// Criteria from a query string; unknown keys and invalid values are dropped
pub fn criteria_from_query(query: &str) -> FilterCriteria {
    let params: BTreeMap<String, String> =
        match serde_qs::from_str(query.trim_start_matches('?')) {
            Ok(p) => p,
            Err(e) => {
                log::warn!("Ignoring malformed query string '{}': {}", query, e);
                return FilterCriteria::default();
            }
        };

    let (criteria, errors) =
        FilterCriteria::from_pairs(params.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    for e in errors {
        log::warn!("Ignoring filter from URL: {}", e);
    }
    criteria
}

/// Criteria restored from the current page URL
pub fn read_criteria() -> FilterCriteria {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    criteria_from_query(&search)
}

/// Replace the current history entry so the URL reflects `criteria`
pub fn write_criteria(criteria: &FilterCriteria) {
    let Some(w) = window() else { return };

    let query = criteria_to_query(criteria);
    let new_search = if query.is_empty() {
        String::new()
    } else {
        format!("?{}", query)
    };

    let current_search = w.location().search().unwrap_or_default();
    if current_search == new_search {
        return;
    }

    let path = w.location().pathname().unwrap_or_else(|_| "/".to_string());
    if let Ok(history) = w.history() {
        let _ = history.replace_state_with_url(
            &wasm_bindgen::JsValue::NULL,
            "",
            Some(&format!("{}{}", path, new_search)),
        );
    }
}
