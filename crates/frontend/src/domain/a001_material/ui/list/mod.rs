pub mod state;

use contracts::domain::a001_material::MaterialRecord;
use contracts::shared::report::ExportScope;
use leptos::prelude::*;

use self::state::{MaterialListState, MaterialView};
use super::export_actions::{export_csv, export_pdf};
use super::filters::MaterialFilters;
use super::table::MaterialsTable;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Button;
use crate::shared::config::use_app_config;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;

/// Список материалов: поиск, фильтры, таблица результатов
#[component]
#[allow(non_snake_case)]
pub fn MaterialList(
    state: MaterialListState,
    #[prop(into)] filtered: Signal<Vec<MaterialRecord>>,
    on_reload: Callback<()>,
) -> impl IntoView {
    let config = StoredValue::new(use_app_config());
    let (export_error, set_export_error) = signal(None::<String>);

    let selected_count = Signal::derive(move || state.selection.with(|s| s.len()));

    let run_export = move |pdf: bool| {
        let records = filtered.get_untracked();
        let result = config.with_value(|c| {
            if pdf {
                export_pdf(&records, ExportScope::Filtered, c)
            } else {
                export_csv(&records, ExportScope::Filtered, c)
            }
        });
        if let Err(e) = &result {
            log::error!("Export failed: {}", e);
        }
        set_export_error.set(result.err());
    };

    let search_value = Signal::derive(move || state.criteria.with(|c| c.search_query.clone()));
    let on_search = Callback::new(move |q: String| {
        let next = state.criteria.get_untracked().with_search(&q);
        state.criteria.set(next);
    });

    view! {
        <div class="page">
            <PageHeader
                title="Materials"
                subtitle=Signal::derive(move || {
                    match selected_count.get() {
                        0 => String::new(),
                        n => format!("{} selected", n),
                    }
                })
            >
                <Button
                    variant="primary"
                    disabled=Signal::derive(move || selected_count.get() == 0)
                    on_click=Callback::new(move |_| {
                        leptos::logging::log!("Comparing {} materials", selected_count.get_untracked());
                        state.view.set(MaterialView::Comparison);
                    })
                >
                    {icon("compare")}
                    {move || format!("Compare ({})", selected_count.get())}
                </Button>
                <Button
                    variant="secondary"
                    disabled=Signal::derive(move || selected_count.get() == 0)
                    on_click=Callback::new(move |_| state.clear_selection())
                >
                    {icon("x")}
                    "Clear selection"
                </Button>
                <Button
                    variant="secondary"
                    title="Download the filtered list as CSV"
                    disabled=Signal::derive(move || filtered.with(|f| f.is_empty()))
                    on_click=Callback::new(move |_| run_export(false))
                >
                    {icon("download")}
                    "Export CSV"
                </Button>
                <Button
                    variant="secondary"
                    title="Print the filtered list or save it as PDF"
                    disabled=Signal::derive(move || filtered.with(|f| f.is_empty()))
                    on_click=Callback::new(move |_| run_export(true))
                >
                    {icon("printer")}
                    "Export PDF"
                </Button>
            </PageHeader>

            {move || state.load.with(|l| l.error()).map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{format!("Could not load materials: {}", e)}</span>
                    <Button variant="ghost" size="sm" on_click=Callback::new(move |_| on_reload.run(()))>
                        {icon("refresh")}
                        "Retry"
                    </Button>
                </div>
            })}

            {move || export_error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="material-layout">
                <aside class="material-layout__filters">
                    <SearchInput value=search_value on_change=on_search />
                    <MaterialFilters state=state />
                </aside>
                <section class="material-layout__results">
                    <MaterialsTable state=state records=filtered />
                </section>
            </div>
        </div>
    }
}
