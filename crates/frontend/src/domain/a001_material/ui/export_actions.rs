//! Export of the filtered list or the selection: CSV download or printable report

use chrono::Utc;
use contracts::domain::a001_material::MaterialRecord;
use contracts::shared::report::html::render_html;
use contracts::shared::report::{ExportScope, MaterialReport};

use crate::shared::config::AppConfig;
use crate::shared::{export, print};

fn build_report(records: &[MaterialRecord], scope: ExportScope, config: &AppConfig) -> MaterialReport {
    MaterialReport::build(
        config.title.clone(),
        scope,
        records,
        Utc::now(),
        config.report_rows_per_page,
    )
}

/// Download `records` as `<basename>_<scope>_<timestamp>.csv`
pub fn export_csv(
    records: &[MaterialRecord],
    scope: ExportScope,
    config: &AppConfig,
) -> Result<(), String> {
    let report = build_report(records, scope, config);
    let filename = format!("{}.csv", report.file_stem(&config.export_basename));
    let refs: Vec<&MaterialRecord> = records.iter().collect();
    export::export_materials_csv(&refs, &filename)
}

/// Open the paginated report and show the print dialog (Save as PDF)
pub fn export_pdf(
    records: &[MaterialRecord],
    scope: ExportScope,
    config: &AppConfig,
) -> Result<(), String> {
    if records.is_empty() {
        return Err("No materials to export".to_string());
    }
    let report = build_report(records, scope, config);
    log::info!(
        "Printing report: {} materials, {} pages",
        report.record_count,
        report.total_pages()
    );
    print::print_html(&render_html(&report), &report.file_stem(&config.export_basename))
}
