use contracts::shared::filter::{FieldKind, FilterField};
use leptos::prelude::*;

use super::list::state::MaterialListState;
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::ui::{Button, Input, Select};

/// Options of a select field, "Any" first
fn select_options(field: FilterField) -> Vec<(String, String)> {
    std::iter::once((String::new(), "Any".to_string()))
        .chain(
            field
                .choices()
                .into_iter()
                .map(|label| (label.to_string(), label.to_string())),
        )
        .collect()
}

/// One form field of the panel
#[component]
#[allow(non_snake_case)]
fn FilterFieldInput(field: FilterField, state: MaterialListState) -> impl IntoView {
    let value = Signal::derive(move || state.criteria.with(|c| c.value_of(field)));
    let on_value = Callback::new(move |raw: String| {
        let current = state.criteria.get_untracked();
        match current.with_value(field, &raw) {
            Ok(next) => state.criteria.set(next),
            Err(e) => log::warn!("Rejected filter value: {}", e),
        }
    });

    match field.kind() {
        FieldKind::Select => view! {
            <Select
                id=field.key()
                label=field.display_name()
                value=value
                options=select_options(field)
                on_change=on_value
            />
        }
        .into_any(),
        FieldKind::Number => view! {
            <Input
                id=field.key()
                label=field.display_name()
                input_type="number"
                placeholder=field.placeholder()
                value=value
                active=Signal::derive(move || state.criteria.with(|c| c.is_active(field)))
                on_input=on_value
            />
        }
        .into_any(),
    }
}

/// Панель фильтров материалов
#[component]
#[allow(non_snake_case)]
pub fn MaterialFilters(state: MaterialListState) -> impl IntoView {
    let active_count = Signal::derive(move || state.criteria.with(|c| c.active_count()));

    view! {
        <FilterPanel
            is_expanded=state.filters_expanded
            active_filters_count=active_count
            header_actions=move || view! {
                <Button
                    variant="ghost"
                    size="sm"
                    disabled=Signal::derive(move || state.criteria.with(|c| c.is_unconstrained()))
                    on_click=Callback::new(move |_| state.clear_all_filters())
                >
                    "Clear All"
                </Button>
            }
            filter_content=move || view! {
                <div class="filter-grid">
                    {FilterField::all()
                        .iter()
                        .map(|field| view! { <FilterFieldInput field=*field state=state /> })
                        .collect_view()}
                </div>
            }
            filter_tags=move || view! {
                {move || {
                    state
                        .criteria
                        .with(|c| c.active_tags())
                        .into_iter()
                        .map(|(field, label)| view! {
                            <FilterTag
                                label=label
                                on_remove=Callback::new(move |_| {
                                    let next = state.criteria.get_untracked().without(field);
                                    state.criteria.set(next);
                                })
                            />
                        })
                        .collect_view()
                }}
            }
        />
    }
}
