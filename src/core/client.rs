//! HTTP client for the detect/translate service

use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::core::config::TranslatorConfig;
use crate::core::errors::{Result, TranslationError};
use crate::core::models::{DetectRequest, TranslationRequest};

/// Client for a LibreTranslate-style `/detect` + `/translate` service
///
/// Holds nothing but the validated configuration and a reqwest client, so a
/// single instance can be shared and reused for any number of calls.
#[derive(Debug, Clone)]
pub struct TranslationClient {
    client: reqwest::Client,
    config: Arc<TranslatorConfig>,
}

impl TranslationClient {
    /// Create a new client
    pub fn new(config: TranslatorConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| TranslationError::ConfigError {
                message: e.to_string(),
            })?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .pool_idle_timeout(Some(Duration::from_secs(30)))
            .build()?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    /// Create a client for `server` with default settings
    pub fn with_server(server: impl Into<String>) -> Result<Self> {
        Self::new(TranslatorConfig::with_server(server))
    }

    /// Create from environment
    pub fn from_env() -> Result<Self> {
        let config = TranslatorConfig::from_env().map_err(|e| TranslationError::ConfigError {
            message: e.to_string(),
        })?;
        Self::new(config)
    }

    /// Base server address
    pub fn server(&self) -> &str {
        self.config.base_url()
    }

    /// Detect the language of `text`
    ///
    /// Returns the `language` field of the first element of the service's
    /// answer.
    pub async fn auto_detect(&self, text: &str) -> Result<String> {
        let json = self.post_json("detect", &DetectRequest::new(text)).await?;

        json.get(0)
            .and_then(|d| d["language"].as_str())
            .map(|s| s.to_string())
            .ok_or_else(|| TranslationError::MissingField {
                field: "[0].language".to_string(),
            })
    }

    /// Translate `text` into `target`
    ///
    /// When `source` is `None` the language is detected first; the detected
    /// code is used for this call only.
    pub async fn translate(&self, text: &str, target: &str, source: Option<&str>) -> Result<String> {
        if target.is_empty() {
            return Err(TranslationError::EmptyTargetLanguage);
        }

        let source = match source {
            Some(lang) => lang.to_string(),
            None => self.auto_detect(text).await?,
        };

        let request = TranslationRequest::new(text, target).with_source_lang(source);
        self.send_translation(&request).await
    }

    /// Send a fully specified translation request
    pub async fn send_translation(&self, request: &TranslationRequest) -> Result<String> {
        if request.target_lang.is_empty() {
            return Err(TranslationError::EmptyTargetLanguage);
        }

        let json = self.post_json("translate", request).await?;

        json["translatedText"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| TranslationError::MissingField {
                field: "translatedText".to_string(),
            })
    }

    /// POST `body` to `<server>/<endpoint>` and parse the JSON answer
    async fn post_json<B: serde::Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<serde_json::Value> {
        let url = format!("{}/{}", self.config.base_url(), endpoint);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TranslationError::TimeoutError
                } else {
                    TranslationError::NetworkError {
                        message: e.to_string(),
                    }
                }
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(TranslationError::ApiError {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let text = response.text().await.map_err(|e| {
            if e.is_timeout() {
                TranslationError::TimeoutError
            } else {
                TranslationError::NetworkError {
                    message: e.to_string(),
                }
            }
        })?;

        serde_json::from_str(&text).map_err(|e| TranslationError::InvalidResponseError {
            message: e.to_string(),
        })
    }
}
