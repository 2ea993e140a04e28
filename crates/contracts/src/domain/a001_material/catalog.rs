use std::collections::HashSet;

use thiserror::Error;

use super::{MaterialId, MaterialRecord};

/// Ошибки загрузки каталога материалов
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("catalog must be a JSON array of materials")]
    NotAnArray,
}

/// The material list loaded once per session.
///
/// Every record carries a unique resolved id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    records: Vec<MaterialRecord>,
    skipped: usize,
}

impl Catalog {
    /// Builds a catalog from already deserialized records, resolving ids.
    pub fn from_records(records: Vec<MaterialRecord>) -> Self {
        let mut seen: HashSet<MaterialId> = HashSet::with_capacity(records.len());
        let records = records
            .into_iter()
            .enumerate()
            .map(|(position, mut record)| {
                let base = record.resolve_id(position);
                let mut id = base.clone();
                let mut attempt = 1;
                while seen.contains(&id) {
                    id = if attempt == 1 {
                        MaterialId::new(format!("{}#{}", base, position))
                    } else {
                        MaterialId::new(format!("{}#{}-{}", base, position, attempt))
                    };
                    attempt += 1;
                }
                seen.insert(id.clone());
                record.id = Some(id);
                record
            })
            .collect();

        Self {
            records,
            skipped: 0,
        }
    }

    pub fn records(&self) -> &[MaterialRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of array entries that could not be read as a material
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn find(&self, id: &MaterialId) -> Option<&MaterialRecord> {
        self.records.iter().find(|r| r.id.as_ref() == Some(id))
    }
}

/// Parse the catalog document.
///
/// The top level must be an array; entries that are not objects or do not
/// deserialize are skipped and counted.
pub fn parse_catalog(json: &str) -> Result<Catalog, CatalogError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let items = match value {
        serde_json::Value::Array(items) => items,
        _ => return Err(CatalogError::NotAnArray),
    };

    let mut skipped = 0;
    let mut records = Vec::with_capacity(items.len());
    for (idx, item) in items.into_iter().enumerate() {
        if !item.is_object() {
            log::warn!("catalog entry {} is not an object, skipped", idx);
            skipped += 1;
            continue;
        }
        match serde_json::from_value::<MaterialRecord>(item) {
            Ok(record) => records.push(record),
            Err(e) => {
                log::warn!("catalog entry {} skipped: {}", idx, e);
                skipped += 1;
            }
        }
    }

    let mut catalog = Catalog::from_records(records);
    catalog.skipped = skipped;
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resolves_ids_in_catalog_order() {
        let catalog = parse_catalog(
            r#"[
                {"id": "n1", "material": "Nylon"},
                {"material": "PEEK"},
                {}
            ]"#,
        )
        .unwrap();

        let ids: Vec<&str> = catalog
            .records()
            .iter()
            .map(|r| r.id.as_ref().unwrap().as_str())
            .collect();
        assert_eq!(ids, vec!["n1", "PEEK", "2"]);
        assert_eq!(catalog.skipped(), 0);
    }

    #[test]
    fn test_duplicate_ids_are_suffixed() {
        let catalog = parse_catalog(r#"[{"material": "Bronze"}, {"material": "Bronze"}]"#).unwrap();
        assert_eq!(
            catalog.records()[1].id,
            Some(MaterialId::new("Bronze#1"))
        );
        assert!(catalog.find(&MaterialId::new("Bronze")).is_some());
        assert!(catalog.find(&MaterialId::new("Bronze#1")).is_some());
    }

    #[test]
    fn test_suffixed_id_does_not_collide_with_explicit_id() {
        let catalog = parse_catalog(
            r#"[{"material": "A"}, {"id": "A#2", "material": "X"}, {"material": "A"}]"#,
        )
        .unwrap();

        let ids: Vec<&str> = catalog
            .records()
            .iter()
            .map(|r| r.id.as_ref().unwrap().as_str())
            .collect();
        assert_eq!(ids, vec!["A", "A#2", "A#2-2"]);

        let unique: HashSet<&str> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn test_bad_entries_are_skipped() {
        let catalog = parse_catalog(
            r#"[
                {"material": "PTFE"},
                42,
                {"material": "Acetal", "tensile_strength": true}
            ]"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.skipped(), 2);
    }

    #[test]
    fn test_top_level_must_be_array() {
        assert!(matches!(
            parse_catalog(r#"{"material": "PTFE"}"#),
            Err(CatalogError::NotAnArray)
        ));
        assert!(matches!(parse_catalog("not json"), Err(CatalogError::Json(_))));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = parse_catalog("[]").unwrap();
        assert!(catalog.is_empty());
    }
}
