use contracts::domain::a001_material::{MaterialId, MaterialRecord};
use contracts::shared::report::ReportColumn;
use leptos::prelude::*;

use super::grade_badge::GradeBadge;
use super::list::state::MaterialListState;
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::list_utils::highlight_matches;

/// "(3 of 10 materials)", or "(1 material)" when nothing is filtered out
pub fn results_summary(matched: usize, total: usize) -> String {
    let noun = |n: usize| if n == 1 { "material" } else { "materials" };
    if matched == total {
        format!("({} {})", matched, noun(matched))
    } else {
        format!("({} of {} {})", matched, total, noun(total))
    }
}

fn row_cell(column: ReportColumn, record: &MaterialRecord, query: &str) -> AnyView {
    let text = column.cell(record);
    if column == ReportColumn::Material {
        view! {
            <td class="table__cell table__cell--name">{highlight_matches(&text, query)}</td>
        }
        .into_any()
    } else if column.is_grade() {
        view! { <td class="table__cell"><GradeBadge value=text /></td> }.into_any()
    } else if column.is_numeric() {
        view! { <td class="table__cell table__cell--number">{text}</td> }.into_any()
    } else {
        view! { <td class="table__cell table__cell--nowrap">{text}</td> }.into_any()
    }
}

/// Таблица результатов фильтрации с выбором строк
#[component]
#[allow(non_snake_case)]
pub fn MaterialsTable(
    state: MaterialListState,
    /// Filtered records
    #[prop(into)]
    records: Signal<Vec<MaterialRecord>>,
) -> impl IntoView {
    let total = state.total();
    let query = Signal::derive(move || state.criteria.with(|c| c.search_query.clone()));

    let toggle_select = move |id: MaterialId, checked: bool| {
        let next = state.selection.get_untracked().with_checked(&id, checked);
        state.selection.set(next);
    };

    // Шапка: выбрать/снять все видимые строки
    let all_visible_selected = Signal::derive(move || {
        let rows = records.get();
        !rows.is_empty()
            && state.selection.with(|s| {
                rows.iter()
                    .all(|r| r.id.as_ref().is_some_and(|id| s.contains(id)))
            })
    });
    let toggle_all_visible = move |checked: bool| {
        let mut next = state.selection.get_untracked();
        for record in records.get_untracked() {
            if let Some(id) = record.id.as_ref() {
                next = next.with_checked(id, checked);
            }
        }
        state.selection.set(next);
    };

    view! {
        <div class="table-card">
            <div class="table-card__header">
                <span class="table-card__title">"Results"</span>
                <span class="table-card__count">
                    {move || results_summary(records.with(|r| r.len()), total.get())}
                </span>
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell table__header-cell--checkbox">
                                <input
                                    type="checkbox"
                                    class="table__checkbox"
                                    title="Select all visible"
                                    prop:checked=move || all_visible_selected.get()
                                    on:change=move |ev| toggle_all_visible(event_target_checked(&ev))
                                />
                            </th>
                            {ReportColumn::all()
                                .iter()
                                .map(|c| view! { <th class="table__header-cell">{c.header()}</th> })
                                .collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = records.get();
                            if rows.is_empty() {
                                let message = if state.load.with(|l| l.is_loading()) {
                                    "Loading materials…"
                                } else {
                                    "No materials match filters."
                                };
                                return view! {
                                    <tr>
                                        <td class="table__cell table__cell--empty" colspan={(ReportColumn::all().len() + 1).to_string()}>
                                            {message}
                                        </td>
                                    </tr>
                                }
                                .into_any();
                            }

                            let q = query.get();
                            rows.into_iter()
                                .filter_map(|record| {
                                    let id = record.id.clone()?;
                                    let id_for_checkbox = id.clone();
                                    let id_for_row = id.clone();
                                    let is_selected = Signal::derive(move || {
                                        state.selection.with(|s| s.contains(&id_for_checkbox))
                                    });
                                    let cells = ReportColumn::all()
                                        .iter()
                                        .map(|c| row_cell(*c, &record, &q))
                                        .collect_view();
                                    Some(view! {
                                        <tr
                                            class="table__row"
                                            class:table__row--selected=move || is_selected.get()
                                        >
                                            <TableCheckbox
                                                checked=is_selected
                                                label=record.name().to_string()
                                                on_change=Callback::new(move |checked| {
                                                    toggle_select(id_for_row.clone(), checked)
                                                })
                                            />
                                            {cells}
                                        </tr>
                                    })
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
