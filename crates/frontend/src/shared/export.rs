/// Экспорт списка материалов в CSV (открывается в Excel)
use contracts::domain::a001_material::MaterialRecord;
use contracts::shared::report::ReportColumn;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Собирает CSV: UTF-8 BOM, заголовки, строки; разделитель `;`
pub fn build_csv(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut csv_content = String::new();

    // BOM, чтобы Excel распознал UTF-8 (символ °)
    csv_content.push('\u{FEFF}');

    csv_content.push_str(&headers.join(";"));
    csv_content.push('\n');

    for row in rows {
        let escaped_row: Vec<String> = row.iter().map(|cell| escape_csv_cell(cell)).collect();
        csv_content.push_str(&escaped_row.join(";"));
        csv_content.push('\n');
    }

    csv_content
}

/// CSV with the report columns, one row per material, in the given order
pub fn materials_csv(records: &[&MaterialRecord]) -> String {
    let headers: Vec<&str> = ReportColumn::all().iter().map(|c| c.header()).collect();
    let rows: Vec<Vec<String>> = records.iter().map(|r| ReportColumn::row(r)).collect();
    build_csv(&headers, &rows)
}

/// Экспортирует материалы в CSV файл и инициирует скачивание
pub fn export_materials_csv(records: &[&MaterialRecord], filename: &str) -> Result<(), String> {
    if records.is_empty() {
        return Err("No materials to export".to_string());
    }

    let blob = create_csv_blob(&materials_csv(records))?;
    download_blob(&blob, filename)?;

    log::info!("Exported {} materials to {}", records.len(), filename);
    Ok(())
}

/// Экранирует CSV ячейку если необходимо
fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(';') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        let escaped = cell.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        cell.to_string()
    }
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Инициирует скачивание Blob через временную ссылку
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_material::parse_catalog;

    #[test]
    fn test_escape_csv_cell() {
        assert_eq!(escape_csv_cell("PEEK"), "PEEK");
        assert_eq!(escape_csv_cell("a;b"), "\"a;b\"");
        assert_eq!(escape_csv_cell("6\" nut"), "\"6\"\" nut\"");
        assert_eq!(escape_csv_cell("line\nbreak"), "\"line\nbreak\"");
        // запятая не разделитель
        assert_eq!(escape_csv_cell("12,000"), "12,000");
    }

    #[test]
    fn test_build_csv_has_bom_and_header() {
        let csv = build_csv(&["A", "B"], &[vec!["1".into(), "x;y".into()]]);
        assert!(csv.starts_with('\u{FEFF}'));
        let lines: Vec<&str> = csv.trim_start_matches('\u{FEFF}').lines().collect();
        assert_eq!(lines, vec!["A;B", "1;\"x;y\""]);
    }

    #[test]
    fn test_materials_csv_uses_report_columns() {
        let catalog = parse_catalog(
            r#"[{"material": "PEEK", "tensile_strength": 14000, "self_lubricating": true,
                 "low_temperature": -50, "high_temperature": 480}]"#,
        )
        .unwrap();
        let records: Vec<&MaterialRecord> = catalog.records().iter().collect();
        let csv = materials_csv(&records);
        let mut lines = csv.trim_start_matches('\u{FEFF}').lines();
        assert_eq!(lines.next().map(|h| h.split(';').count()), Some(10));
        let row = lines.next().unwrap();
        assert!(row.starts_with("PEEK;"));
        assert!(row.contains(";Yes;14,000;"));
        assert!(row.ends_with(";-50° to 480°"));
    }
}
