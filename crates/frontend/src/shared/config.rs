use leptos::prelude::*;
use serde::Deserialize;

/// Настройки фронтенда
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Where the material catalog JSON is fetched from
    pub catalog_url: String,
    pub title: String,
    pub subtitle: String,
    /// Rows per printed report page
    pub report_rows_per_page: usize,
    /// Prefix of exported file names
    pub export_basename: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_url: "/data/nut_materials.json".to_string(),
            title: "Lead Screw Nut Material Selector".to_string(),
            subtitle: "Filter and compare engineering-grade nut materials".to_string(),
            report_rows_per_page: 25,
            export_basename: "nut_materials".to_string(),
        }
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
catalog_url = "/data/nut_materials.json"
title = "Lead Screw Nut Material Selector"
subtitle = "Filter and compare engineering-grade nut materials by friction, wear, PV, water absorption, grease compatibility, chemical resistance, and temperature range."
report_rows_per_page = 25
export_basename = "nut_materials"
"#;

impl AppConfig {
    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Embedded configuration, built-in defaults if it does not parse
    pub fn load() -> Self {
        match Self::from_toml(DEFAULT_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Invalid embedded config, using defaults: {}", e);
                Self::default()
            }
        }
    }
}

/// AppConfig from context (provided by `App`)
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_else(AppConfig::load)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = AppConfig::from_toml(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.catalog_url, "/data/nut_materials.json");
        assert_eq!(config.report_rows_per_page, 25);
        assert_eq!(config.export_basename, "nut_materials");
    }

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let config = AppConfig::from_toml("catalog_url = \"/static/m.json\"").unwrap();
        assert_eq!(config.catalog_url, "/static/m.json");
        assert_eq!(config.report_rows_per_page, 25);
        assert_eq!(config.title, AppConfig::default().title);
    }

    #[test]
    fn test_wrong_type_is_an_error() {
        assert!(AppConfig::from_toml("report_rows_per_page = \"many\"").is_err());
    }
}
