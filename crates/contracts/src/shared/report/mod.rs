//! Paginated material report: the export collaborator's model.
//!
//! The frontend renders it to printable HTML ([`html::render_html`]) and lets
//! the browser print it to PDF.

pub mod column;
pub mod format;
pub mod html;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::a001_material::MaterialRecord;
pub use column::ReportColumn;

/// Which records go into an export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportScope {
    Filtered,
    Selected,
}

impl ExportScope {
    pub fn display_name(&self) -> &'static str {
        match self {
            ExportScope::Filtered => "Filtered results",
            ExportScope::Selected => "Selected materials",
        }
    }

    /// Suffix used in export file names
    pub fn code(&self) -> &'static str {
        match self {
            ExportScope::Filtered => "filtered",
            ExportScope::Selected => "selected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportPage {
    /// 1-based
    pub number: usize,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialReport {
    pub title: String,
    pub scope: ExportScope,
    pub generated_at: DateTime<Utc>,
    pub columns: Vec<ReportColumn>,
    pub record_count: usize,
    pub pages: Vec<ReportPage>,
}

impl MaterialReport {
    /// Lay records out in pages of at most `rows_per_page` rows.
    ///
    /// Record order is kept. An empty input still produces one (empty) page.
    pub fn build<'a, I>(
        title: impl Into<String>,
        scope: ExportScope,
        records: I,
        generated_at: DateTime<Utc>,
        rows_per_page: usize,
    ) -> Self
    where
        I: IntoIterator<Item = &'a MaterialRecord>,
    {
        let rows_per_page = rows_per_page.max(1);
        let rows: Vec<Vec<String>> = records.into_iter().map(ReportColumn::row).collect();
        let record_count = rows.len();

        let mut pages: Vec<ReportPage> = rows
            .chunks(rows_per_page)
            .enumerate()
            .map(|(idx, chunk)| ReportPage {
                number: idx + 1,
                rows: chunk.to_vec(),
            })
            .collect();
        if pages.is_empty() {
            pages.push(ReportPage {
                number: 1,
                rows: Vec::new(),
            });
        }

        Self {
            title: title.into(),
            scope,
            generated_at,
            columns: ReportColumn::all().to_vec(),
            record_count,
            pages,
        }
    }

    pub fn total_pages(&self) -> usize {
        self.pages.len()
    }

    /// "3 materials · Selected materials · 2026-01-31 12:00 UTC"
    pub fn subtitle(&self) -> String {
        format!(
            "{} material{} · {} · {}",
            self.record_count,
            if self.record_count == 1 { "" } else { "s" },
            self.scope.display_name(),
            self.generated_at.format("%Y-%m-%d %H:%M UTC")
        )
    }

    /// File name without extension: `<base>_<scope>_<YYYYmmdd_HHMMSS>`
    pub fn file_stem(&self, base: &str) -> String {
        format!(
            "{}_{}_{}",
            base,
            self.scope.code(),
            self.generated_at.format("%Y%m%d_%H%M%S")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 15, 14, 2, 26).unwrap()
    }

    fn named(n: usize) -> Vec<MaterialRecord> {
        (0..n)
            .map(|i| MaterialRecord {
                material: Some(format!("M{}", i)),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn test_pagination_keeps_order() {
        let records = named(5);
        let report = MaterialReport::build("Nut Materials", ExportScope::Filtered, &records, at(), 2);
        assert_eq!(report.total_pages(), 3);
        assert_eq!(report.record_count, 5);
        assert_eq!(report.pages[0].number, 1);
        assert_eq!(report.pages[2].rows.len(), 1);
        assert_eq!(report.pages[2].rows[0][0], "M4");
        assert_eq!(report.pages[1].rows[0][0], "M2");
    }

    #[test]
    fn test_empty_input_has_one_page() {
        let report = MaterialReport::build("T", ExportScope::Selected, &Vec::new(), at(), 25);
        assert_eq!(report.total_pages(), 1);
        assert!(report.pages[0].rows.is_empty());
        assert_eq!(
            report.subtitle(),
            "0 materials · Selected materials · 2026-03-15 14:02 UTC"
        );
    }

    #[test]
    fn test_zero_rows_per_page_is_clamped() {
        let records = named(2);
        let report = MaterialReport::build("T", ExportScope::Filtered, &records, at(), 0);
        assert_eq!(report.total_pages(), 2);
    }

    #[test]
    fn test_accepts_borrowed_filter_output() {
        let records = named(3);
        let picked: Vec<&MaterialRecord> = records.iter().skip(1).collect();
        let report =
            MaterialReport::build("T", ExportScope::Selected, picked.iter().copied(), at(), 10);
        assert_eq!(report.record_count, 2);
        assert_eq!(report.subtitle().split(" · ").next(), Some("2 materials"));
        assert_eq!(report.file_stem("nut_materials"), "nut_materials_selected_20260315_140226");
    }
}
