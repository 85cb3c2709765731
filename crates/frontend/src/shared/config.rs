//! Application configuration.
//!
//! Resolution order:
//! 1. Embedded default (`DEFAULT_CONFIG`)
//! 2. Inline `<script id="app-config" type="text/toml">` in `index.html`, if present
//! 3. Query string overrides: `?latency=250&seed=false&breakpoint=720`

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub page: PageConfig,
    pub layout: LayoutConfig,
    pub data: DataConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PageConfig {
    pub title: String,
    pub add_button_label: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Viewports narrower than this use the compact layout.
    pub mobile_breakpoint_px: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DataConfig {
    /// Load the bundled fixture into the in-memory data source.
    pub seed: bool,
    pub simulated_latency_ms: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Registries".to_string(),
            add_button_label: "Add Registry".to_string(),
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: 600,
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            seed: true,
            simulated_latency_ms: 0,
        }
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[page]
title = "Registries"
add_button_label = "Add Registry"

[layout]
mobile_breakpoint_px = 600

[data]
seed = true
simulated_latency_ms = 0
"#;

const INLINE_CONFIG_ID: &str = "app-config";

/// Overrides accepted from the page URL.
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct QueryOverrides {
    pub latency: Option<u32>,
    pub seed: Option<bool>,
    pub breakpoint: Option<u32>,
}

impl QueryOverrides {
    pub fn parse(search: &str) -> Result<Self, serde_qs::Error> {
        serde_qs::from_str(search.trim_start_matches('?'))
    }

    pub fn apply(&self, config: &mut Config) {
        if let Some(latency) = self.latency {
            config.data.simulated_latency_ms = latency;
        }
        if let Some(seed) = self.seed {
            config.data.seed = seed;
        }
        if let Some(breakpoint) = self.breakpoint {
            config.layout.mobile_breakpoint_px = breakpoint;
        }
    }
}

pub fn parse_config(source: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(source)
}

/// Build the effective configuration. Never fails: broken sources are
/// logged and skipped.
pub fn load_config() -> Config {
    let mut config = match parse_config(DEFAULT_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::error!("embedded config is invalid: {}", e);
            Config::default()
        }
    };

    if let Some(inline) = read_inline_config() {
        match parse_config(&inline) {
            Ok(parsed) => {
                log::info!("Using inline configuration from #{}", INLINE_CONFIG_ID);
                config = parsed;
            }
            Err(e) => log::warn!("Ignoring inline configuration: {}", e),
        }
    }

    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    match QueryOverrides::parse(&search) {
        Ok(overrides) => overrides.apply(&mut config),
        Err(e) => log::warn!("Ignoring query overrides '{}': {}", search, e),
    }

    config
}

fn read_inline_config() -> Option<String> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(INLINE_CONFIG_ID))
        .and_then(|el| el.text_content())
        .filter(|text| !text.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.layout.mobile_breakpoint_px, 600);
        assert_eq!(config.page.title, "Registries");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = parse_config("[data]\nsimulated_latency_ms = 300\n").unwrap();
        assert_eq!(config.data.simulated_latency_ms, 300);
        assert!(config.data.seed);
        assert_eq!(config.page, PageConfig::default());
    }

    #[test]
    fn test_query_overrides() {
        let mut config = Config::default();
        let overrides = QueryOverrides::parse("?latency=250&seed=false&breakpoint=720").unwrap();
        overrides.apply(&mut config);
        assert_eq!(config.data.simulated_latency_ms, 250);
        assert!(!config.data.seed);
        assert_eq!(config.layout.mobile_breakpoint_px, 720);
    }

    #[test]
    fn test_unrelated_query_params_are_ignored() {
        let overrides = QueryOverrides::parse("?active=registries").unwrap();
        assert_eq!(overrides, QueryOverrides::default());
        assert_eq!(QueryOverrides::parse("").unwrap(), QueryOverrides::default());
    }
}
