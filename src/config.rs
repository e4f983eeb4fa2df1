use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Local backend port used when development mode has no explicit base.
pub const DEV_FALLBACK_BASE: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiMode {
    Production,
    Development,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub base_url: String,
    pub mode: ApiMode,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    pub refresh_rate_ms: u64,
    pub default_ticker: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl ApiConfig {
    /// Resolve the base URL calls should go against.
    ///
    /// An explicit base always wins (trailing slash stripped).
    /// Development mode falls back to the local backend port; in
    /// production an empty base means the client is unconfigured.
    pub fn effective_base_url(&self) -> Option<String> {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        if !trimmed.is_empty() {
            return Some(trimmed.to_string());
        }
        match self.mode {
            ApiMode::Development => Some(DEV_FALLBACK_BASE.to_string()),
            ApiMode::Production => None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config_path = Path::new("config/default.toml");
        let config_str = std::fs::read_to_string(config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;

        let mut config: Config =
            toml::from_str(&config_str).context("failed to parse config/default.toml")?;

        if let Ok(base) = std::env::var("STOCK_AGENT_API_BASE") {
            config.api.base_url = base;
        }

        Ok(config)
    }
}
