//! Application configuration
//!
//! Values are baked in at build time. `HELPDESK_CONFIG_JSON` holds a whole
//! JSON document with the field names below; without it the individual
//! `HELPDESK_*` variables are read.

use helpdesk_common::ViewportThresholds;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Backend base URL. Unset means the bundled demo data is served.
    pub api_url: Option<String>,
    pub api_key: Option<String>,
    pub workspace_id: Option<String>,
    /// `trace`, `debug`, `info`, `warn` or `error`
    pub log_level: String,
    /// Conversations requested per list fetch
    pub page_size: usize,
    /// Widths below this are mobile
    pub mobile_max_width: f64,
    /// Widths below this (and not mobile) are tablet
    pub tablet_max_width: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        let thresholds = ViewportThresholds::default();
        Self {
            api_url: None,
            api_key: None,
            workspace_id: None,
            log_level: "info".to_string(),
            page_size: 50,
            mobile_max_width: thresholds.mobile_max,
            tablet_max_width: thresholds.tablet_max,
        }
    }
}

impl AppConfig {
    /// Startup config: the embedded JSON document when one was baked in,
    /// otherwise the individual variables
    pub fn load() -> Self {
        Self::from_sources(option_env!("HELPDESK_CONFIG_JSON"), Self::from_env())
    }

    fn from_sources(json: Option<&str>, fallback: Self) -> Self {
        let Some(json) = json.filter(|s| !s.trim().is_empty()) else {
            return fallback;
        };
        match Self::from_json(json) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring malformed HELPDESK_CONFIG_JSON: {}", e);
                fallback
            }
        }
    }

    /// Config from build-time environment, defaults for anything unset
    pub fn from_env() -> Self {
        Self::from_vars(
            option_env!("HELPDESK_API_URL"),
            option_env!("HELPDESK_API_KEY"),
            option_env!("HELPDESK_WORKSPACE_ID"),
            option_env!("HELPDESK_LOG_LEVEL"),
        )
    }

    fn from_vars(
        api_url: Option<&str>,
        api_key: Option<&str>,
        workspace_id: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let non_empty = |v: Option<&str>| v.filter(|s| !s.trim().is_empty()).map(str::to_string);
        let defaults = Self::default();
        Self {
            api_url: non_empty(api_url).map(|url| url.trim_end_matches('/').to_string()),
            api_key: non_empty(api_key),
            workspace_id: non_empty(workspace_id),
            log_level: non_empty(log_level).unwrap_or(defaults.log_level),
            page_size: defaults.page_size,
            mobile_max_width: defaults.mobile_max_width,
            tablet_max_width: defaults.tablet_max_width,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut config: Self = serde_json::from_str(json)?;
        config.api_url = config
            .api_url
            .map(|url| url.trim_end_matches('/').to_string());
        Ok(config)
    }

    /// Level for the logger; unknown names fall back to `INFO`
    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }

    pub fn thresholds(&self) -> ViewportThresholds {
        ViewportThresholds {
            mobile_max: self.mobile_max_width,
            tablet_max: self.tablet_max_width,
        }
    }

    pub fn uses_demo_data(&self) -> bool {
        self.api_url.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(config.uses_demo_data());
        assert_eq!(config.tracing_level(), tracing::Level::INFO);
        assert_eq!(config.thresholds(), ViewportThresholds::default());
    }

    #[test]
    fn test_from_vars_ignores_blank_values() {
        let config = AppConfig::from_vars(
            Some("https://api.example.com/"),
            Some(""),
            None,
            Some("debug"),
        );
        assert_eq!(config.api_url.as_deref(), Some("https://api.example.com"));
        assert_eq!(config.api_key, None);
        assert_eq!(config.tracing_level(), tracing::Level::DEBUG);
        assert!(!config.uses_demo_data());
    }

    #[test]
    fn test_from_json_fills_missing_fields() {
        let config = AppConfig::from_json(
            r#"{"api_url": "https://api.example.com/v1/", "workspace_id": "acme", "mobile_max_width": 640}"#,
        )
        .unwrap();
        assert_eq!(config.api_url.as_deref(), Some("https://api.example.com/v1"));
        assert_eq!(config.workspace_id.as_deref(), Some("acme"));
        assert_eq!(config.thresholds().mobile_max, 640.0);
        assert_eq!(config.page_size, 50);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        let config = AppConfig {
            log_level: "chatty".to_string(),
            ..Default::default()
        };
        assert_eq!(config.tracing_level(), tracing::Level::INFO);
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(AppConfig::from_json(r#"{"page_size": "many"}"#).is_err());
    }

    #[test]
    fn test_embedded_json_wins_over_vars() {
        let fallback = AppConfig::from_vars(None, None, None, Some("warn"));
        let config = AppConfig::from_sources(
            Some(r#"{"api_url": "https://api.example.com/", "page_size": 25}"#),
            fallback,
        );
        assert_eq!(config.api_url.as_deref(), Some("https://api.example.com"));
        assert_eq!(config.page_size, 25);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_missing_or_malformed_json_uses_vars() {
        let fallback = AppConfig::from_vars(None, None, Some("acme"), Some("debug"));
        assert_eq!(AppConfig::from_sources(None, fallback.clone()), fallback);
        assert_eq!(AppConfig::from_sources(Some("  "), fallback.clone()), fallback);
        assert_eq!(
            AppConfig::from_sources(Some("{not json"), fallback.clone()),
            fallback
        );
    }
}
