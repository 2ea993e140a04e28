//! Startup health check of the static catalog.
//!
//! The file is only served, never rewritten; a broken catalog is logged and the
//! server still starts (the page shows its load error).

use contracts::domain::a001_material::parse_catalog;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSummary {
    pub materials: usize,
    pub skipped: usize,
    pub without_name: usize,
    /// Records whose low bound is above the high bound
    pub inverted_ranges: usize,
}

pub fn summarize(json: &str) -> Result<CatalogSummary, contracts::domain::a001_material::CatalogError> {
    let catalog = parse_catalog(json)?;
    let records = catalog.records();
    Ok(CatalogSummary {
        materials: catalog.len(),
        skipped: catalog.skipped(),
        without_name: records.iter().filter(|r| r.name().trim().is_empty()).count(),
        inverted_ranges: records
            .iter()
            .filter(|r| match (r.low_temperature(), r.high_temperature()) {
                (Some(lo), Some(hi)) => lo > hi,
                _ => false,
            })
            .count(),
    })
}

/// Read, parse and log; never fails the startup
pub fn check_catalog(path: &Path) -> Option<CatalogSummary> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("Catalog not readable at {}: {}", path.display(), e);
            return None;
        }
    };

    match summarize(&text) {
        Ok(summary) => {
            tracing::info!(
                "Catalog {}: {} materials, {} skipped entries",
                path.display(),
                summary.materials,
                summary.skipped
            );
            if summary.without_name > 0 {
                tracing::warn!("{} materials have no name", summary.without_name);
            }
            if summary.inverted_ranges > 0 {
                tracing::warn!(
                    "{} materials have low_temperature above high_temperature",
                    summary.inverted_ranges
                );
            }
            Some(summary)
        }
        Err(e) => {
            tracing::error!("Catalog {} is invalid: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_counts_problems() {
        let summary = summarize(
            r#"[
                {"material": "PEEK", "low_temperature": -50, "high_temperature": 480},
                {"material": "", "low_temperature": 300, "high_temperature": 100},
                "oops"
            ]"#,
        )
        .unwrap();
        assert_eq!(
            summary,
            CatalogSummary {
                materials: 2,
                skipped: 1,
                without_name: 1,
                inverted_ranges: 1,
            }
        );
    }

    #[test]
    fn test_summarize_rejects_non_array() {
        assert!(summarize("{}").is_err());
    }

    #[test]
    fn test_check_missing_file_is_none() {
        assert_eq!(check_catalog(Path::new("surely/not/here.json")), None);
    }
}
