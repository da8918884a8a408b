//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Address used when nothing else is configured
pub const DEFAULT_SERVER: &str = "http://localhost:5000";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT_MS: u64 = 30000;

/// Configuration for the translation client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslatorConfig {
    /// Base URL of the translation service
    pub server: String,
    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            server: DEFAULT_SERVER.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl TranslatorConfig {
    /// Config pointing at `server` with the default timeout
    pub fn with_server(server: impl Into<String>) -> Self {
        Self {
            server: server.into(),
            ..Default::default()
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_env_with(None, None)
    }

    /// Load configuration from environment variables, preferring the given
    /// values; an overridden variable is never read
    pub fn from_env_with(server: Option<String>, timeout_ms: Option<u64>) -> anyhow::Result<Self> {
        let server = match server {
            Some(server) => server,
            None => std::env::var("TRANSLATION_SERVER")
                .unwrap_or_else(|_| DEFAULT_SERVER.to_string()),
        };

        let timeout_ms = match timeout_ms {
            Some(timeout_ms) => timeout_ms,
            None => std::env::var("REQUEST_TIMEOUT_MS")
                .unwrap_or_else(|_| DEFAULT_TIMEOUT_MS.to_string())
                .parse::<u64>()?,
        };

        let config = Self { server, timeout_ms };
        info!("Using translation server {}", config.server);
        Ok(config)
    }

    /// Load from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.server.is_empty() {
            return Err(anyhow::anyhow!("Server address is required"));
        }

        let url = reqwest::Url::parse(&self.server)
            .map_err(|e| anyhow::anyhow!("Invalid server address '{}': {}", self.server, e))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(anyhow::anyhow!(
                "Server address must use http or https, got '{}'",
                url.scheme()
            ));
        }

        if self.timeout_ms == 0 {
            return Err(anyhow::anyhow!("timeout_ms must be greater than 0"));
        }

        Ok(())
    }

    /// Server address without a trailing slash
    pub fn base_url(&self) -> &str {
        self.server.trim_end_matches('/')
    }
}
