//! Печать отчёта через окно браузера (Save as PDF в диалоге печати)

/// Opens `html` in a new window and shows the print dialog there
pub fn print_html(html: &str, title: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let report_window = window
        .open_with_url_and_target("", "_blank")
        .map_err(|e| format!("Failed to open window: {:?}", e))?
        .ok_or("Popup blocked: allow popups to export the report")?;

    let document = report_window
        .document()
        .ok_or("No document in report window")?;
    let root = document
        .document_element()
        .ok_or("No root element in report window")?;

    root.set_inner_html(html);
    document.set_title(title);

    report_window
        .print()
        .map_err(|e| format!("Failed to print: {:?}", e))?;

    Ok(())
}
