use leptos::prelude::*;

use super::comparison::ComparisonView;
use super::list::state::{create_state, MaterialView};
use super::list::MaterialList;
use crate::domain::a001_material::api::fetch_catalog;
use crate::shared::config::use_app_config;
use crate::shared::url_state;

/// Подбор материала гайки: список с фильтрами или сравнение выбранных
#[component]
#[allow(non_snake_case)]
pub fn MaterialPage() -> impl IntoView {
    let config = use_app_config();
    let state = create_state();
    let filtered = state.filtered();
    let selected = state.selected();

    let catalog_url = StoredValue::new(config.catalog_url);
    let fetch = move || {
        let ticket = state.begin_load();
        let url = catalog_url.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            let result = fetch_catalog(&url).await;
            if !state.is_current_load(ticket) {
                log::debug!("Dropping stale catalog response #{}", ticket);
                return;
            }
            match result {
                Ok(catalog) => state.set_catalog(catalog),
                Err(e) => {
                    log::error!("Failed to load materials from {}: {}", url, e);
                    state.set_failed(e);
                }
            }
        });
    };

    // Фильтры отражаются в адресной строке
    Effect::new(move |_| {
        state.criteria.with(url_state::write_criteria);
    });

    // Пустой выбор: сравнивать нечего
    Effect::new(move |_| {
        if state.view.get() == MaterialView::Comparison && state.selection.with(|s| s.is_empty()) {
            state.view.set(MaterialView::List);
        }
    });

    fetch();

    view! {
        {move || match state.view.get() {
            MaterialView::List => view! {
                <MaterialList
                    state=state
                    filtered=filtered
                    on_reload=Callback::new(move |_| fetch())
                />
            }
            .into_any(),
            MaterialView::Comparison => view! {
                <ComparisonView state=state selected=selected />
            }
            .into_any(),
        }}
    }
}
