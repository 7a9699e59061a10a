use crate::shared::dom;
use serde::Deserialize;

/// Id of the optional `<script type="application/json">` block carrying the config
pub const CONFIG_ELEMENT_ID: &str = "dashboard-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Server origin; empty means same origin
    pub api_base: String,
    /// Query parameter asking the server for fragment-only markup
    pub fragment_marker: String,
    /// Lifetime of a notification
    pub notice_ttl_ms: u32,
    /// How long inserted rows and changed stock cells stay highlighted
    pub highlight_ms: u32,
    pub log_level: String,
}

/// Default configuration used when the page carries none
const DEFAULT_CONFIG: &str = r#"{
    "api_base": "",
    "fragment_marker": "ajax",
    "notice_ttl_ms": 5000,
    "highlight_ms": 2000,
    "log_level": "debug"
}"#;

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            fragment_marker: "ajax".to_string(),
            notice_ttl_ms: 5000,
            highlight_ms: 2000,
            log_level: "debug".to_string(),
        }
    }
}

impl DashboardConfig {
    pub fn from_json(raw: &str) -> Result<Self, String> {
        serde_json::from_str(raw).map_err(|e| format!("invalid dashboard config: {}", e))
    }

    /// Load configuration from the host page.
    ///
    /// A page without the config block gets the defaults; a malformed block is an error
    /// the caller reports before falling back to the defaults.
    pub fn load() -> Result<Self, String> {
        match dom::element_text(CONFIG_ELEMENT_ID) {
            Some(raw) => Self::from_json(&raw),
            None => Self::from_json(DEFAULT_CONFIG),
        }
    }

    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Debug)
    }
}

pub fn use_config() -> DashboardConfig {
    leptos::context::use_context::<DashboardConfig>().expect("DashboardConfig not provided in context")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = DashboardConfig::from_json(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.level(), log::Level::Debug);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config =
            DashboardConfig::from_json(r#"{"api_base": "http://localhost:5000", "log_level": "WARN"}"#)
                .unwrap();
        assert_eq!(config.api_base, "http://localhost:5000");
        assert_eq!(config.notice_ttl_ms, 5000);
        assert_eq!(config.level(), log::Level::Warn);
    }

    #[test]
    fn test_malformed_config() {
        assert!(DashboardConfig::from_json("{ nope").is_err());
    }
}
