//! Application Configuration
//!
//! Defaults, overridden by build-time env vars, overridden by an
//! `<script id="app-config" type="application/json">` block in the host page.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

pub const CONFIG_ELEMENT_ID: &str = "app-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// GraphQL endpoint URL
    pub endpoint: String,
    /// Request header carrying the organization slug
    pub tenant_header: String,
    /// Slug used when neither a hint nor a persisted choice exists
    pub fallback_organization: String,
    /// localStorage key of the persisted slug
    pub storage_key: String,
    /// Placeholder author for new comments
    pub comment_author: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8000/graphql/".to_string(),
            tenant_header: scoped_graphql::DEFAULT_TENANT_HEADER.to_string(),
            fallback_organization: "default-organization".to_string(),
            storage_key: "orgSlug".to_string(),
            comment_author: "user@example.com".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Defaults plus `PM_GRAPHQL_ENDPOINT` / `PM_LOG_LEVEL` captured at build time
    pub fn from_build_env() -> Self {
        let mut config = Self::default();
        if let Some(endpoint) = option_env!("PM_GRAPHQL_ENDPOINT") {
            config.endpoint = endpoint.to_string();
        }
        if let Some(level) = option_env!("PM_LOG_LEVEL") {
            config.log_level = level.to_string();
        }
        config
    }

    /// Overlay the keys present in `json` onto `self`
    pub fn merge_json(&self, json: &str) -> Result<Self, serde_json::Error> {
        let overrides: serde_json::Value = serde_json::from_str(json)?;
        let mut merged = serde_json::to_value(self)?;
        if let (Some(base), Some(overrides)) = (merged.as_object_mut(), overrides.as_object()) {
            for (key, value) in overrides {
                base.insert(key.clone(), value.clone());
            }
        }
        serde_json::from_value(merged)
    }

    /// Build-time config, then the host page's config block if any
    pub fn load() -> Self {
        let config = Self::from_build_env();
        let Some(json) = page_config_block() else {
            return config;
        };
        match config.merge_json(&json) {
            Ok(merged) => merged,
            Err(e) => {
                log::warn!("ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
                config
            }
        }
    }

    pub fn log_level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

fn page_config_block() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
    element.text_content().filter(|text| !text.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.endpoint, "http://127.0.0.1:8000/graphql/");
        assert_eq!(config.tenant_header, "X-Organization-Slug");
        assert_eq!(config.fallback_organization, "default-organization");
        assert_eq!(config.storage_key, "orgSlug");
        assert_eq!(config.comment_author, "user@example.com");
    }

    #[test]
    fn test_merge_overrides_only_given_keys() {
        let merged = AppConfig::default()
            .merge_json(r#"{ "endpoint": "https://pm.example.com/graphql/", "logLevel": "debug" }"#)
            .unwrap();
        assert_eq!(merged.endpoint, "https://pm.example.com/graphql/");
        assert_eq!(merged.log_level_filter(), LevelFilter::Debug);
        assert_eq!(merged.storage_key, "orgSlug");
    }

    #[test]
    fn test_merge_rejects_wrong_types() {
        assert!(AppConfig::default().merge_json(r#"{ "endpoint": 5 }"#).is_err());
        assert!(AppConfig::default().merge_json("not json").is_err());
    }

    #[test]
    fn test_unknown_log_level_falls_back_to_info() {
        let config = AppConfig {
            log_level: "chatty".into(),
            ..AppConfig::default()
        };
        assert_eq!(config.log_level_filter(), LevelFilter::Info);
    }
}
