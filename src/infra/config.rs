use std::path::Path;

use serde::Deserialize;

use crate::domain::links::DEFAULT_SITE_BASE;

pub const DEFAULT_API_BASE: &str = "https://api.vocus.cc";

pub struct Config {
    pub mode: String, // "server" or "stdio"
    pub port: u16,
    pub config_path: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        let mode = std::env::var("MODE").unwrap_or_else(|_| "server".into());
        let port = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(8080);
        let config_path = std::env::var("VOCUS_CONFIG")
            .ok()
            .filter(|p| !p.trim().is_empty());

        Self {
            mode,
            port,
            config_path,
        }
    }

    /// Load the upstream settings from `VOCUS_CONFIG` if set, defaults otherwise.
    pub fn app_config(&self) -> anyhow::Result<AppConfig> {
        match &self.config_path {
            Some(path) => AppConfig::from_toml_file(path),
            None => Ok(AppConfig::default()),
        }
    }
}

/// Top-level TOML document.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub vocus: VocusConfig,
}

/// Upstream client settings (`[vocus]` table).
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct VocusConfig {
    pub api_base: String,
    pub site_base: String,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub retries: u32,
    pub retry_wait_ms: u64,
}

impl Default for VocusConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.into(),
            site_base: DEFAULT_SITE_BASE.into(),
            timeout_secs: 30,
            connect_timeout_secs: 10,
            retries: 2,
            retry_wait_ms: 1_000,
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(raw: &str) -> anyhow::Result<Self> {
        toml::from_str(raw).map_err(|e| anyhow::anyhow!("invalid config: {e}"))
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("cannot read config {}: {e}", path.display()))?;
        Self::from_toml_str(&raw)
    }
}
