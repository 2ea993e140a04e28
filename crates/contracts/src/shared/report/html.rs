use std::fmt::Write;

use super::MaterialReport;

const PRINT_CSS: &str = r#"
@page { size: landscape; margin: 12mm; }
body { font-family: Arial, Helvetica, sans-serif; color: #0f172a; margin: 0; }
.report-page { page-break-after: always; }
.report-page:last-child { page-break-after: auto; }
.report-header h1 { font-size: 18px; margin: 0 0 4px 0; }
.report-header p { font-size: 11px; color: #475569; margin: 0 0 10px 0; }
table { width: 100%; border-collapse: collapse; font-size: 10px; }
th { background: #f1f5f9; text-align: left; text-transform: uppercase; letter-spacing: 0.03em; }
th, td { border: 1px solid #e2e8f0; padding: 4px 6px; white-space: nowrap; }
td.num { text-align: right; }
td.empty { color: #64748b; text-align: center; padding: 16px; }
.report-footer { font-size: 10px; color: #64748b; text-align: right; margin-top: 6px; }
"#;

/// Экранирование текста для вставки в HTML
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Self-contained printable document, one `.report-page` section per page
pub fn render_html(report: &MaterialReport) -> String {
    let title = escape_html(&report.title);
    let subtitle = escape_html(&report.subtitle());
    let total = report.total_pages();

    let mut html = String::new();
    // write! into a String cannot fail
    let _ = write!(
        html,
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>{}</title><style>{}</style></head><body>",
        title, PRINT_CSS
    );

    for page in &report.pages {
        let _ = write!(
            html,
            "<section class=\"report-page\"><div class=\"report-header\"><h1>{}</h1><p>{}</p></div><table><thead><tr>",
            title, subtitle
        );
        for column in &report.columns {
            let _ = write!(html, "<th>{}</th>", escape_html(column.header()));
        }
        html.push_str("</tr></thead><tbody>");

        if page.rows.is_empty() {
            let _ = write!(
                html,
                "<tr><td class=\"empty\" colspan=\"{}\">No materials to report.</td></tr>",
                report.columns.len()
            );
        }
        for row in &page.rows {
            html.push_str("<tr>");
            for (column, cell) in report.columns.iter().zip(row) {
                let class = if column.is_numeric() { " class=\"num\"" } else { "" };
                let _ = write!(html, "<td{}>{}</td>", class, escape_html(cell));
            }
            html.push_str("</tr>");
        }

        let _ = write!(
            html,
            "</tbody></table><div class=\"report-footer\">Page {} of {}</div></section>",
            page.number, total
        );
    }

    html.push_str("</body></html>");
    html
}
