//! External machine translation trait
//!
//! Banjara has no language code in public translation APIs, so an external
//! provider is only ever asked for the language it can cover, using a related
//! language as the source hint. Implementations must be cheap to share across
//! requests.

use crate::error::{TranslateError, TranslateResult};
use async_trait::async_trait;

/// Generic trait for external machine translation providers
///
/// All methods are async to support network-bound providers. Callers are
/// expected to bound calls with their own timeout.
#[async_trait]
pub trait MachineTranslator: Send + Sync {
    /// Translate `text` from `source_locale` to `target_locale`
    ///
    /// # Arguments
    ///
    /// * `text` - The text to translate
    /// * `source_locale` - Source language hint (e.g., "hi")
    /// * `target_locale` - Target language code (e.g., "en")
    async fn translate(
        &self,
        text: &str,
        source_locale: &str,
        target_locale: &str,
    ) -> TranslateResult<String>;

    /// Name of this provider, for logging
    fn provider_name(&self) -> &str;
}

/// Normalize a locale code by stripping region information
///
/// - `en-US` → `en`
/// - `te-IN` → `te`
/// - `hi` → `hi` (unchanged)
pub fn normalize_locale(locale: &str) -> String {
    locale.split('-').next().unwrap_or(locale).to_lowercase()
}

/// Validate that a locale code only contains alphanumerics, `-` and `_`
pub fn validate_locale(locale: &str) -> TranslateResult<()> {
    if locale.is_empty() {
        return Err(TranslateError::InvalidLocale(
            "Locale code is empty".to_string(),
        ));
    }

    if !locale
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(TranslateError::InvalidLocale(format!(
            "Invalid characters in locale code: {}",
            locale
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_locale_with_region() {
        assert_eq!(normalize_locale("en-US"), "en");
        assert_eq!(normalize_locale("te-IN"), "te");
    }

    #[test]
    fn test_normalize_locale_case_insensitive() {
        assert_eq!(normalize_locale("HI"), "hi");
        assert_eq!(normalize_locale("EN-GB"), "en");
    }

    #[test]
    fn test_validate_locale_valid_codes() {
        assert!(validate_locale("hi").is_ok());
        assert!(validate_locale("en-US").is_ok());
        assert!(validate_locale("te_IN").is_ok());
    }

    #[test]
    fn test_validate_locale_invalid_codes() {
        assert!(validate_locale("").is_err());
        assert!(validate_locale("en@invalid").is_err());
        match validate_locale("te#IN") {
            Err(TranslateError::InvalidLocale(msg)) => {
                assert!(msg.contains("Invalid characters"));
            }
            _ => panic!("Expected InvalidLocale error"),
        }
    }
}
