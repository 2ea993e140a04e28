use contracts::domain::a001_material::MaterialRecord;
use contracts::shared::report::{ExportScope, ReportColumn};
use leptos::prelude::*;

use super::export_actions::{export_csv, export_pdf};
use super::grade_badge::GradeBadge;
use super::list::state::{MaterialListState, MaterialView};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Button;
use crate::shared::config::use_app_config;
use crate::shared::icons::icon;

/// "3 materials selected"
pub fn selection_subtitle(count: usize) -> String {
    format!(
        "{} material{} selected",
        count,
        if count == 1 { "" } else { "s" }
    )
}

/// Attribute rows of the side-by-side table: the name is the column header
fn attribute_rows() -> impl Iterator<Item = ReportColumn> {
    ReportColumn::all()
        .iter()
        .copied()
        .filter(|c| *c != ReportColumn::Material)
}

/// Сравнение выбранных материалов: колонка на материал, строка на свойство
#[component]
#[allow(non_snake_case)]
pub fn ComparisonView(
    state: MaterialListState,
    /// Selected records, catalog order
    #[prop(into)]
    selected: Signal<Vec<MaterialRecord>>,
) -> impl IntoView {
    let config = StoredValue::new(use_app_config());
    let (export_error, set_export_error) = signal(None::<String>);

    let run_export = move |pdf: bool| {
        let records = selected.get_untracked();
        let result = config.with_value(|c| {
            if pdf {
                export_pdf(&records, ExportScope::Selected, c)
            } else {
                export_csv(&records, ExportScope::Selected, c)
            }
        });
        if let Err(e) = &result {
            log::error!("Export failed: {}", e);
        }
        set_export_error.set(result.err());
    };

    let back = Callback::new(move |_: ()| state.view.set(MaterialView::List));

    view! {
        <div class="page">
            <PageHeader
                title="Comparison"
                subtitle=Signal::derive(move || selection_subtitle(selected.with(|s| s.len())))
                on_back=back
            >
                <Button variant="secondary" on_click=Callback::new(move |_| back.run(()))>
                    {icon("arrow-left")}
                    "Back"
                </Button>
                <Button variant="secondary" on_click=Callback::new(move |_| state.clear_selection())>
                    {icon("x")}
                    "Clear"
                </Button>
                <Button
                    variant="secondary"
                    disabled=Signal::derive(move || selected.with(|s| s.is_empty()))
                    on_click=Callback::new(move |_| run_export(false))
                >
                    {icon("download")}
                    "Export CSV"
                </Button>
                <Button
                    variant="primary"
                    disabled=Signal::derive(move || selected.with(|s| s.is_empty()))
                    on_click=Callback::new(move |_| run_export(true))
                >
                    {icon("printer")}
                    "Export PDF"
                </Button>
            </PageHeader>

            {move || export_error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="table comparison">
                {move || {
                    let records = selected.get();
                    if records.is_empty() {
                        return view! {
                            <div class="comparison__empty">"No materials selected."</div>
                        }
                        .into_any();
                    }

                    view! {
                        <table class="table__data comparison__table">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell comparison__attribute">"Property"</th>
                                    {records
                                        .iter()
                                        .map(|r| view! {
                                            <th class="table__header-cell">
                                                {ReportColumn::Material.cell(r)}
                                            </th>
                                        })
                                        .collect_view()}
                                </tr>
                            </thead>
                            <tbody>
                                {attribute_rows()
                                    .map(|column| view! {
                                        <tr class="table__row">
                                            <th class="table__cell comparison__attribute">{column.header()}</th>
                                            {records
                                                .iter()
                                                .map(|r| {
                                                    let text = column.cell(r);
                                                    if column.is_grade() {
                                                        view! { <td class="table__cell"><GradeBadge value=text /></td> }.into_any()
                                                    } else {
                                                        view! { <td class="table__cell">{text}</td> }.into_any()
                                                    }
                                                })
                                                .collect_view()}
                                        </tr>
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                    .into_any()
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_subtitle() {
        assert_eq!(selection_subtitle(1), "1 material selected");
        assert_eq!(selection_subtitle(3), "3 materials selected");
    }

    #[test]
    fn test_attribute_rows_skip_name() {
        let rows: Vec<ReportColumn> = attribute_rows().collect();
        assert_eq!(rows.len(), ReportColumn::all().len() - 1);
        assert_eq!(rows[0], ReportColumn::LowFriction);
        assert_eq!(rows.last(), Some(&ReportColumn::TempRange));
    }
}
