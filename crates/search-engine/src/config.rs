use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// `config.toml` from the workspace root, compiled in so browser builds need no
/// filesystem.
const EMBEDDED_CONFIG: &str = include_str!("../../../config.toml");

/// Parse config file contents. An unparseable file yields the defaults.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to parse config.toml, using defaults");
        AppConfig::default()
    })
}

/// Parse the embedded `config.toml` once and return it. Safe to call from
/// anywhere; only the first call parses.
pub fn config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let config = parse_config(EMBEDDED_CONFIG);
        tracing::info!(
            endpoint = %config.search.endpoint,
            features = ?config.features,
            "Search configuration loaded"
        );
        config
    })
}
