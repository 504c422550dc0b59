//! Configuration management for medialib using the prefer crate.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::collection::parse_collection_url;

/// Default backend collection endpoint.
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:3000/api/urlhtml";

/// Default address the web server binds to.
pub const DEFAULT_BIND: &str = "127.0.0.1:3030";

/// Application settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Backend collection endpoint (`GET` list, `DELETE` one).
    pub backend_url: String,
    /// Bind address for `serve`.
    pub bind: String,
    /// Request timeout in seconds.
    pub request_timeout: u64,
    /// User agent for backend requests.
    pub user_agent: String,
    /// Heading shown on every page.
    pub site_title: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            bind: DEFAULT_BIND.to_string(),
            request_timeout: 30,
            user_agent: format!("medialib/{}", env!("CARGO_PKG_VERSION")),
            site_title: "Media Library".to_string(),
        }
    }
}

impl Settings {
    /// Check that the settings can be used to reach the backend.
    pub fn validate(&self) -> anyhow::Result<()> {
        parse_collection_url(&self.backend_url)?;
        if self.request_timeout == 0 {
            anyhow::bail!("request_timeout must be at least 1 second");
        }
        Ok(())
    }
}

/// Configuration file structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Backend collection endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "backend")]
    pub backend_url: Option<String>,
    /// Bind address for the web server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bind: Option<String>,
    /// Request timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<u64>,
    /// User agent string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// Page heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_title: Option<String>,
    /// Path to the config file this was loaded from (not serialized).
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration using prefer crate for discovery.
    /// Falls back to defaults when no medialib config file is found.
    pub async fn load() -> Self {
        match prefer::load("medialib").await {
            Ok(pref_config) => {
                if let Some(path) = pref_config.source_path() {
                    match Self::load_from_path(path).await {
                        Ok(config) => config,
                        Err(e) => {
                            tracing::warn!("Ignoring config file: {}", e);
                            Self::default()
                        }
                    }
                } else {
                    Self::default()
                }
            }
            Err(_) => Self::default(),
        }
    }

    /// Load configuration from a specific file path.
    /// Supports TOML, YAML, and JSON based on file extension.
    pub async fn load_from_path(path: &Path) -> Result<Self, String> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| format!("Failed to read config file {}: {}", path.display(), e))?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

        let mut config: Config = match ext {
            "json" => serde_json::from_str(&contents)
                .map_err(|e| format!("Failed to parse JSON config: {}", e))?,
            "yaml" | "yml" => serde_yaml::from_str(&contents)
                .map_err(|e| format!("Failed to parse YAML config: {}", e))?,
            _ => toml::from_str(&contents)
                .map_err(|e| format!("Failed to parse TOML config: {}", e))?,
        };

        config.source_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Apply configuration to settings.
    pub fn apply_to_settings(&self, settings: &mut Settings) {
        if let Some(ref url) = self.backend_url {
            settings.backend_url = expand_env(url);
        }
        if let Some(ref bind) = self.bind {
            settings.bind = bind.clone();
        }
        if let Some(timeout) = self.request_timeout {
            settings.request_timeout = timeout;
        }
        if let Some(ref user_agent) = self.user_agent {
            settings.user_agent = user_agent.clone();
        }
        if let Some(ref title) = self.site_title {
            settings.site_title = title.clone();
        }
    }
}

/// Expand `$VAR` references in a config value, leaving it as-is on failure.
fn expand_env(value: &str) -> String {
    shellexpand::env(value)
        .map(|v| v.into_owned())
        .unwrap_or_else(|_| value.to_string())
}

/// Options for loading settings.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Explicit config file (skips discovery).
    pub config_path: Option<PathBuf>,
    /// Backend URL override (CLI flag or environment).
    pub backend_url: Option<String>,
}

/// Load settings from defaults, the config file, then overrides.
pub async fn load_settings(options: &LoadOptions) -> anyhow::Result<(Settings, Config)> {
    let config = match options.config_path {
        Some(ref path) => Config::load_from_path(path)
            .await
            .map_err(|e| anyhow::anyhow!(e))?,
        None => Config::load().await,
    };

    let mut settings = Settings::default();
    config.apply_to_settings(&mut settings);

    if let Some(ref url) = options.backend_url {
        settings.backend_url = url.clone();
    }

    settings.validate()?;

    if let Some(ref path) = config.source_path {
        tracing::info!("Loaded config from {}", path.display());
    }
    tracing::debug!("Using backend {}", settings.backend_url);

    Ok((settings, config))
}
