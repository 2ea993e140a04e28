use contracts::domain::a001_material::{Catalog, MaterialRecord};
use contracts::shared::filter::{evaluate, FilterCriteria};
use contracts::shared::selection::SelectionSet;
use leptos::prelude::*;

use crate::shared::url_state;

/// Состояние загрузки каталога
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState {
    Loading,
    Ready,
    /// Could not load data; the working set is empty
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn error(&self) -> Option<String> {
        match self {
            LoadState::Failed(e) => Some(e.clone()),
            _ => None,
        }
    }
}

/// Счётчик запросов каталога: применяется только ответ на последний запрос
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadSeq(u64);

impl LoadSeq {
    /// Starts a new request and returns its ticket
    pub fn begin(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0 == ticket
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MaterialView {
    List,
    Comparison,
}

/// Page state. Every value is replaced wholesale on a user action.
#[derive(Clone, Copy)]
pub struct MaterialListState {
    pub catalog: RwSignal<Catalog>,
    pub load: RwSignal<LoadState>,
    pub criteria: RwSignal<FilterCriteria>,
    pub selection: RwSignal<SelectionSet>,
    pub view: RwSignal<MaterialView>,
    pub filters_expanded: RwSignal<bool>,
    pub load_seq: StoredValue<LoadSeq>,
}

impl MaterialListState {
    /// Records passing the current criteria, catalog order
    pub fn filtered(&self) -> Memo<Vec<MaterialRecord>> {
        let catalog = self.catalog;
        let criteria = self.criteria;
        Memo::new(move |_| {
            catalog.with(|c| {
                criteria.with(|crit| {
                    let outcome = evaluate(c.records(), crit);
                    outcome.matched.into_iter().cloned().collect()
                })
            })
        })
    }

    /// Selected records in catalog order
    pub fn selected(&self) -> Memo<Vec<MaterialRecord>> {
        let catalog = self.catalog;
        let selection = self.selection;
        Memo::new(move |_| {
            catalog.with(|c| selection.with(|s| s.pick(c.records()).into_iter().cloned().collect()))
        })
    }

    pub fn total(&self) -> Signal<usize> {
        let catalog = self.catalog;
        Signal::derive(move || catalog.with(|c| c.len()))
    }

    /// Marks the catalog as loading and returns the ticket of this request
    pub fn begin_load(&self) -> u64 {
        self.load.set(LoadState::Loading);
        let mut ticket = 0;
        self.load_seq.update_value(|seq| ticket = seq.begin());
        ticket
    }

    pub fn is_current_load(&self, ticket: u64) -> bool {
        self.load_seq.with_value(|seq| seq.is_current(ticket))
    }

    /// Replace the catalog, dropping selected ids that disappeared
    pub fn set_catalog(&self, catalog: Catalog) {
        let selection = self.selection.get_untracked().retain_known(&catalog);
        self.selection.set(selection);
        self.catalog.set(catalog);
        self.load.set(LoadState::Ready);
    }

    pub fn set_failed(&self, error: String) {
        self.catalog.set(Catalog::default());
        self.load.set(LoadState::Failed(error));
    }

    pub fn clear_all_filters(&self) {
        self.criteria.set(FilterCriteria::cleared());
    }

    pub fn clear_selection(&self) {
        let cleared = self.selection.get_untracked().cleared();
        self.selection.set(cleared);
        self.view.set(MaterialView::List);
    }
}

/// Initial state; filters are restored from the page URL
pub fn create_state() -> MaterialListState {
    MaterialListState {
        catalog: RwSignal::new(Catalog::default()),
        load: RwSignal::new(LoadState::Loading),
        criteria: RwSignal::new(url_state::read_criteria()),
        selection: RwSignal::new(SelectionSet::new()),
        view: RwSignal::new(MaterialView::List),
        filters_expanded: RwSignal::new(true),
        load_seq: StoredValue::new(LoadSeq::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_state_error() {
        let failed = LoadState::Failed("HTTP error: 404".into());
        assert_eq!(failed.error().as_deref(), Some("HTTP error: 404"));
        assert!(LoadState::Loading.is_loading());
        assert_eq!(LoadState::Ready.error(), None);
    }

    #[test]
    fn test_only_latest_load_is_current() {
        let mut seq = LoadSeq::default();
        let first = seq.begin();
        let retry = seq.begin();
        assert_ne!(first, retry);
        // Первый ответ пришёл позже повторного запроса: игнорируется
        assert!(!seq.is_current(first));
        assert!(seq.is_current(retry));
    }
}
