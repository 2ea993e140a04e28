use serde::{Deserialize, Serialize};

use crate::domain::a001_material::{Catalog, MaterialId, MaterialRecord};

/// Records picked for comparison, kept in the order they were picked.
///
/// Independent of filtering: a selected record stays selected while hidden.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSet {
    ids: Vec<MaterialId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the id if absent, removes it otherwise
    pub fn toggled(&self, id: &MaterialId) -> Self {
        let mut ids = self.ids.clone();
        if let Some(pos) = ids.iter().position(|x| x == id) {
            ids.remove(pos);
        } else {
            ids.push(id.clone());
        }
        Self { ids }
    }

    /// Explicit on/off, as a table checkbox reports it
    pub fn with_checked(&self, id: &MaterialId, checked: bool) -> Self {
        if self.contains(id) == checked {
            self.clone()
        } else {
            self.toggled(id)
        }
    }

    pub fn cleared(&self) -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &MaterialId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[MaterialId] {
        &self.ids
    }

    /// Selected records in the order of `records`
    pub fn pick<'a>(&self, records: &'a [MaterialRecord]) -> Vec<&'a MaterialRecord> {
        records
            .iter()
            .filter(|r| r.id.as_ref().map_or(false, |id| self.contains(id)))
            .collect()
    }

    /// Drop ids that no longer exist in the catalog (after a reload)
    pub fn retain_known(&self, catalog: &Catalog) -> Self {
        Self {
            ids: self
                .ids
                .iter()
                .filter(|id| catalog.find(id).is_some())
                .cloned()
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_material::parse_catalog;

    fn id(s: &str) -> MaterialId {
        MaterialId::new(s)
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let empty = SelectionSet::new();
        let one = empty.toggled(&id("PEEK"));
        assert!(one.contains(&id("PEEK")));
        assert!(empty.is_empty());

        let none = one.toggled(&id("PEEK"));
        assert!(none.is_empty());
    }

    #[test]
    fn test_keeps_pick_order() {
        let s = SelectionSet::new().toggled(&id("b")).toggled(&id("a"));
        assert_eq!(s.ids(), &[id("b"), id("a")]);
    }

    #[test]
    fn test_with_checked_is_idempotent() {
        let s = SelectionSet::new().with_checked(&id("a"), true);
        assert_eq!(s.with_checked(&id("a"), true), s);
        assert!(s.with_checked(&id("a"), false).is_empty());
        assert!(SelectionSet::new().with_checked(&id("a"), false).is_empty());
    }

    #[test]
    fn test_pick_uses_catalog_order_and_ignores_filtering() {
        let catalog =
            parse_catalog(r#"[{"material": "A"}, {"material": "B"}, {"material": "C"}]"#).unwrap();
        let s = SelectionSet::new().toggled(&id("C")).toggled(&id("A"));
        let picked: Vec<&str> = s.pick(catalog.records()).iter().map(|r| r.name()).collect();
        assert_eq!(picked, vec!["A", "C"]);
    }

    #[test]
    fn test_cleared_and_retain_known() {
        let catalog = parse_catalog(r#"[{"material": "A"}]"#).unwrap();
        let s = SelectionSet::new().toggled(&id("A")).toggled(&id("gone"));
        assert_eq!(s.retain_known(&catalog).ids(), &[id("A")]);
        assert_eq!(s.cleared().len(), 0);
    }
}
