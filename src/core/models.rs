//! Wire types and per-operation options

use serde::{Deserialize, Serialize};

/// Body of `POST /detect`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectRequest {
    /// Text to inspect
    pub q: String,
}

impl DetectRequest {
    /// Detection request for `text`
    pub fn new(text: impl Into<String>) -> Self {
        Self { q: text.into() }
    }
}

/// Body of `POST /translate`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    /// Text to translate
    #[serde(rename = "q")]
    pub text: String,
    /// Source language, `null` on the wire when unset
    #[serde(rename = "source")]
    pub source_lang: Option<String>,
    /// Target language
    #[serde(rename = "target")]
    pub target_lang: String,
}

impl TranslationRequest {
    /// Request without a source language
    pub fn new(text: impl Into<String>, target_lang: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source_lang: None,
            target_lang: target_lang.into(),
        }
    }

    /// Set the source language
    pub fn with_source_lang(mut self, source_lang: impl Into<String>) -> Self {
        self.source_lang = Some(source_lang.into());
        self
    }
}

/// Options shared by the header and entry translations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslateOptions {
    /// Fixed source language; detected per string when `None`
    pub source: Option<String>,
    /// Work on a duplicate and leave the caller's frame untouched
    pub copy: bool,
}

impl TranslateOptions {
    /// Detect per string, work in place
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `source` for every string instead of detecting
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Translate a duplicate of the frame
    pub fn copied(mut self) -> Self {
        self.copy = true;
        self
    }
}
