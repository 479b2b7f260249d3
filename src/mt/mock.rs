//! Mock machine translator for testing
//!
//! Deterministic, network-free stand-in for an external provider. Also backs
//! the CLI's `--mock` flag.
//!
//! # Example
//!
//! ```ignore
//! use banjara_translate::mt::{MachineTranslator, MockMode, MockTranslator};
//!
//! let mock = MockTranslator::new(MockMode::Suffix);
//! let result = mock.translate("xyzabc", "hi", "en").await.unwrap();
//! assert_eq!(result, "xyzabc_en");
//! ```

use crate::error::{TranslateError, TranslateResult};
use crate::mt::translator::MachineTranslator;
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

/// Mock translation modes for testing different scenarios
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Append target suffix: "hello" → "hello_en"
    Suffix,

    /// Predefined (text, target_locale) → translation, suffix otherwise
    Mappings(HashMap<(String, String), String>),

    /// Simulate API errors
    Error(String),

    /// Answer successfully with an empty string
    Empty,

    /// Return input unchanged
    NoOp,
}

/// Mock translator that simulates various provider behaviors
#[derive(Debug, Clone)]
pub struct MockTranslator {
    mode: MockMode,
    /// Simulated network delay (in milliseconds)
    delay_ms: u64,
}

impl MockTranslator {
    pub fn new(mode: MockMode) -> Self {
        Self { mode, delay_ms: 0 }
    }

    /// Create a MockTranslator that sleeps `delay_ms` before answering
    ///
    /// Useful for exercising caller timeouts.
    pub fn with_delay(mode: MockMode, delay_ms: u64) -> Self {
        Self { mode, delay_ms }
    }

    async fn apply_delay(&self) {
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
    }

    fn apply_translation(&self, text: &str, target: &str) -> TranslateResult<String> {
        match &self.mode {
            MockMode::Suffix => Ok(format!("{}_{}", text, target)),
            MockMode::Mappings(map) => {
                let key = (text.to_string(), target.to_string());
                Ok(map
                    .get(&key)
                    .cloned()
                    .unwrap_or_else(|| format!("{}_{}", text, target)))
            }
            MockMode::Error(msg) => Err(TranslateError::TranslationError(msg.clone())),
            MockMode::Empty => Ok(String::new()),
            MockMode::NoOp => Ok(text.to_string()),
        }
    }
}

#[async_trait]
impl MachineTranslator for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        _source_locale: &str,
        target_locale: &str,
    ) -> TranslateResult<String> {
        self.apply_delay().await;
        self.apply_translation(text, target_locale)
    }

    fn provider_name(&self) -> &str {
        "Mock Translator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_suffix_translation() {
        let mock = MockTranslator::new(MockMode::Suffix);
        assert_eq!(mock.translate("xyzabc", "hi", "en").await.unwrap(), "xyzabc_en");
        assert_eq!(mock.translate("xyzabc", "hi", "te").await.unwrap(), "xyzabc_te");
    }

    #[tokio::test]
    async fn test_mapping_translation() {
        let mut map = HashMap::new();
        map.insert(
            ("aaj kaam koni".to_string(), "en".to_string()),
            "no work today".to_string(),
        );
        let mock = MockTranslator::new(MockMode::Mappings(map));
        assert_eq!(
            mock.translate("aaj kaam koni", "hi", "en").await.unwrap(),
            "no work today"
        );
        // Unknown text falls back to suffix
        assert_eq!(mock.translate("other", "hi", "en").await.unwrap(), "other_en");
    }

    #[tokio::test]
    async fn test_error_mode_returns_error() {
        let mock = MockTranslator::new(MockMode::Error("API unavailable".to_string()));
        match mock.translate("hello", "hi", "en").await {
            Err(TranslateError::TranslationError(msg)) => assert_eq!(msg, "API unavailable"),
            _ => panic!("Expected TranslationError"),
        }
    }

    #[tokio::test]
    async fn test_empty_mode() {
        let mock = MockTranslator::new(MockMode::Empty);
        assert_eq!(mock.translate("hello", "hi", "en").await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_noop_returns_unchanged() {
        let mock = MockTranslator::new(MockMode::NoOp);
        assert_eq!(mock.translate("Kasan cho", "hi", "en").await.unwrap(), "Kasan cho");
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_adds_latency() {
        let mock = MockTranslator::with_delay(MockMode::Suffix, 50);
        let start = tokio::time::Instant::now();
        let _ = mock.translate("hello", "hi", "en").await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(50));
    }

    #[test]
    fn test_provider_name() {
        let mock = MockTranslator::new(MockMode::Suffix);
        assert_eq!(mock.provider_name(), "Mock Translator");
    }
}
