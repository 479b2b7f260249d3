//! Google Translate API provider
//!
//! Integrates with Google Translate API v2. Used only as the fallback for
//! input the dictionary cannot match at all.
//!
//! # Authentication
//!
//! The provider loads the API key from the `GOOGLE_TRANSLATE_API_KEY`
//! environment variable.
//!
//! # Example
//!
//! ```ignore
//! use banjara_translate::mt::{GoogleTranslateProvider, MachineTranslator};
//!
//! let provider = GoogleTranslateProvider::from_env()?;
//! let english = provider.translate("aaj kaam koni", "hi", "en").await?;
//! ```

use crate::error::{TranslateError, TranslateResult};
use crate::mt::translator::{MachineTranslator, normalize_locale, validate_locale};
use async_trait::async_trait;
use serde_json::json;
use std::time::Duration;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "GOOGLE_TRANSLATE_API_KEY";

/// Google Translate API v2 provider
#[derive(Clone)]
pub struct GoogleTranslateProvider {
    api_key: String,
    client: reqwest::Client,
    base_url: String,
}

impl GoogleTranslateProvider {
    /// Maximum characters per string (30KB per Google Translate API limits)
    const MAX_CHARS_PER_STRING: usize = 30_000;

    /// HTTP request timeout when none is given
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Create a provider with an explicit API key
    ///
    /// # Errors
    ///
    /// `ConfigError` if the key is blank, `NetworkError` if the HTTP client
    /// cannot be built.
    pub fn new(api_key: String) -> TranslateResult<Self> {
        Self::with_timeout(api_key, Self::DEFAULT_TIMEOUT)
    }

    /// Create a provider whose HTTP requests give up after `timeout`
    pub fn with_timeout(api_key: String, timeout: Duration) -> TranslateResult<Self> {
        if api_key.trim().is_empty() {
            return Err(TranslateError::ConfigError(
                "API key cannot be empty".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                TranslateError::NetworkError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            api_key,
            client,
            base_url: "https://translation.googleapis.com/language/translate/v2".to_string(),
        })
    }

    /// Create a provider from the `GOOGLE_TRANSLATE_API_KEY` environment variable
    pub fn from_env() -> TranslateResult<Self> {
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| {
            TranslateError::ConfigError(format!("{} environment variable not set", API_KEY_ENV))
        })?;

        Self::new(api_key)
    }

    /// Point the provider at a different endpoint (proxies, test servers)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// The API limit counts characters, not bytes
    fn check_length(text: &str) -> TranslateResult<()> {
        if text.chars().count() > Self::MAX_CHARS_PER_STRING {
            return Err(TranslateError::TranslationError(format!(
                "Text exceeds maximum length of {} characters",
                Self::MAX_CHARS_PER_STRING
            )));
        }
        Ok(())
    }

    /// Pull `data.translations[0].translatedText` out of an API response
    fn extract_translation(json: &serde_json::Value) -> TranslateResult<String> {
        let translations = json["data"]["translations"].as_array().ok_or_else(|| {
            TranslateError::TranslationError(
                "Invalid API response: missing 'data.translations' array".to_string(),
            )
        })?;

        translations
            .first()
            .and_then(|t| t["translatedText"].as_str())
            .map(|s| s.to_string())
            .ok_or_else(|| {
                TranslateError::TranslationError(
                    "Invalid API response: missing 'translatedText' field".to_string(),
                )
            })
    }
}

impl std::fmt::Debug for GoogleTranslateProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleTranslateProvider")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl MachineTranslator for GoogleTranslateProvider {
    async fn translate(
        &self,
        text: &str,
        source_locale: &str,
        target_locale: &str,
    ) -> TranslateResult<String> {
        validate_locale(source_locale)?;
        validate_locale(target_locale)?;

        if text.is_empty() {
            return Ok(String::new());
        }

        Self::check_length(text)?;

        let url = format!("{}?key={}", self.base_url, self.api_key);
        let body = json!({
            "q": [text],
            "source": normalize_locale(source_locale),
            "target": normalize_locale(target_locale),
            "format": "text"
        });

        let response = self.client.post(&url).json(&body).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(if status.is_client_error() {
                TranslateError::ConfigError(format!(
                    "API client error ({}): {}",
                    status, error_text
                ))
            } else {
                TranslateError::TranslationError(format!(
                    "API server error ({}): {}",
                    status, error_text
                ))
            });
        }

        let json: serde_json::Value = response.json().await.map_err(|e| {
            TranslateError::TranslationError(format!("Failed to parse API response: {}", e))
        })?;

        Self::extract_translation(&json)
    }

    fn provider_name(&self) -> &str {
        "Google Translate"
    }
}
