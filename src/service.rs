//! Translation service: dictionary first, external provider as fallback
//!
//! The dictionary produces both Telugu and English. When not a single token
//! of the input matches, the whole input goes to the external provider, but
//! only for English: the provider has no Banjara source code and its Telugu
//! output from a related source language is not trustworthy, so Telugu gets a
//! marked placeholder. That asymmetry is a limitation of the domain and is
//! kept on purpose.
//!
//! `translate` never fails. Provider errors, timeouts and empty answers all
//! degrade to placeholder text.

use crate::matcher::{LexicalMatcher, MatchOutcome};
use crate::mt::MachineTranslator;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Target language names used in placeholders
const TELUGU: &str = "Telugu";
const ENGLISH: &str = "English";

/// Tunables for the fallback path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Source language hint sent to the external provider
    pub source_hint: String,
    /// Target requested from the external provider
    pub fallback_target: String,
    /// Upper bound on a single external call
    pub fallback_timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            source_hint: "hi".to_string(),
            fallback_target: "en".to_string(),
            fallback_timeout: Duration::from_secs(4),
        }
    }
}

/// How a result was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TranslationMethod {
    /// At least one token matched the dictionary
    Dictionary,
    /// Nothing matched; English came from the external provider
    ExternalFallback,
    /// Nothing matched and the provider could not help
    Unavailable,
}

/// Composed translation of one input
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranslationResult {
    pub source_text: String,
    pub telugu: String,
    pub english: String,
    pub method: TranslationMethod,
    pub matches: MatchOutcome,
}

/// Placeholder for a target the pipeline could not produce
pub fn unavailable(text: &str, language: &str) -> String {
    let text = text.trim();
    if text.is_empty() {
        format!("({} translation unavailable)", language)
    } else {
        format!("{} ({} translation unavailable)", text, language)
    }
}

/// Matcher plus optional external fallback
#[derive(Clone)]
pub struct TranslationService {
    matcher: Arc<LexicalMatcher>,
    translator: Option<Arc<dyn MachineTranslator>>,
    config: ServiceConfig,
}

impl TranslationService {
    /// Create a service; `translator` is `None` when no provider is configured
    pub fn new(
        matcher: Arc<LexicalMatcher>,
        translator: Option<Arc<dyn MachineTranslator>>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            matcher,
            translator,
            config,
        }
    }

    pub fn matcher(&self) -> &LexicalMatcher {
        &self.matcher
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Name of the external provider, if any
    pub fn provider_name(&self) -> Option<&str> {
        self.translator.as_deref().map(|t| t.provider_name())
    }

    /// Translate recognized Banjara text into Telugu and English
    ///
    /// Callers should reject empty input up front; blank text still yields
    /// placeholders rather than an error.
    pub async fn translate(&self, text: &str) -> TranslationResult {
        let matches = self.matcher.match_text(text);

        if let Some(composed) = matches.compose() {
            debug!(
                matched = matches.matched_count(),
                tokens = matches.tokens.len(),
                "dictionary translation"
            );
            return TranslationResult {
                source_text: text.to_string(),
                telugu: composed.telugu,
                english: composed.english,
                method: TranslationMethod::Dictionary,
                matches,
            };
        }

        // Punctuation or whitespace alone is not worth a network call
        let has_words = matches.tokens.iter().any(|t| !t.cleaned.is_empty());
        let external = if has_words {
            self.external_fallback(text).await
        } else {
            None
        };

        let (english, method) = match external {
            Some(english) => (english, TranslationMethod::ExternalFallback),
            None => (unavailable(text, ENGLISH), TranslationMethod::Unavailable),
        };

        TranslationResult {
            source_text: text.to_string(),
            telugu: unavailable(text, TELUGU),
            english,
            method,
            matches,
        }
    }

    /// Ask the external provider for English, bounded by the configured timeout
    async fn external_fallback(&self, text: &str) -> Option<String> {
        let Some(translator) = self.translator.as_deref() else {
            debug!("no external translator configured, using placeholders");
            return None;
        };

        let call = translator.translate(
            text,
            &self.config.source_hint,
            &self.config.fallback_target,
        );

        match tokio::time::timeout(self.config.fallback_timeout, call).await {
            Ok(Ok(translated)) if !translated.trim().is_empty() => Some(translated),
            Ok(Ok(_)) => {
                warn!(
                    provider = translator.provider_name(),
                    "external translator returned an empty translation"
                );
                None
            }
            Ok(Err(e)) => {
                warn!(
                    provider = translator.provider_name(),
                    error = %e,
                    "external translation failed"
                );
                None
            }
            Err(_) => {
                warn!(
                    provider = translator.provider_name(),
                    timeout_ms = self.config.fallback_timeout.as_millis() as u64,
                    "external translation timed out"
                );
                None
            }
        }
    }
}

impl std::fmt::Debug for TranslationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationService")
            .field("dictionary_entries", &self.matcher.dictionary().len())
            .field("translator", &self.provider_name())
            .field("config", &self.config)
            .finish()
    }
}
