use serde::{Deserialize, Serialize};

use crate::search::RequestDefaults;

/// Feature flags controlling optional parts of the search page.
///
/// Every field defaults to `false` so that a missing or incomplete config file
/// disables all optional features.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    /// Show the "Also try searching for" wildcard suggestions.
    #[serde(default)]
    pub suggestions: bool,
    /// Offer the grid layout next to the list layout.
    #[serde(default)]
    pub grid_view: bool,
}

/// Endpoint, defaults and timing for the search engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchSettings {
    pub endpoint: String,
    pub default_query: String,
    pub default_country: String,
    pub page: u32,
    pub rows: u32,
    pub sort_by: String,
    pub sort_order: String,
    /// Maximum number of cached responses before least-recently-used eviction.
    pub cache_capacity: usize,
    pub fetch_debounce_ms: u64,
    pub selector_debounce_ms: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://vit-tm-task.api.trademarkia.app/api/v3/us".to_string(),
            default_query: "nike".to_string(),
            default_country: "us".to_string(),
            page: 1,
            rows: 10,
            sort_by: "default".to_string(),
            sort_order: "desc".to_string(),
            cache_capacity: 64,
            fetch_debounce_ms: 300,
            selector_debounce_ms: 250,
        }
    }
}

impl SearchSettings {
    pub fn request_defaults(&self) -> RequestDefaults {
        RequestDefaults {
            page: self.page,
            rows: self.rows,
            sort_by: self.sort_by.clone(),
            sort_order: self.sort_order.clone(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub features: FeatureFlags,
}
