use contracts::domain::a001_material::{parse_catalog, Catalog};
use gloo_net::http::Request;

/// Загрузить каталог материалов (статический JSON)
pub async fn fetch_catalog(url: &str) -> Result<Catalog, String> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;

    let catalog = parse_catalog(&text).map_err(|e| e.to_string())?;
    if catalog.skipped() > 0 {
        log::warn!("{} catalog entries could not be read", catalog.skipped());
    }
    log::info!("Loaded {} materials from {}", catalog.len(), url);
    Ok(catalog)
}
