//! Server configuration from environment variables
//!
//! | Variable                        | Default          |
//! |---------------------------------|------------------|
//! | `BANJARA_BIND_ADDR`             | `127.0.0.1:3000` |
//! | `BANJARA_DICTIONARY_PATH`       | built-in         |
//! | `BANJARA_SOURCE_HINT`           | `hi`             |
//! | `BANJARA_FALLBACK_TIMEOUT_SECS` | `4`              |
//! | `BANJARA_HISTORY_LIMIT`         | `10`             |
//! | `GOOGLE_TRANSLATE_API_KEY`      | unset            |

use banjara_translate::mt::google_translate::API_KEY_ENV;
use banjara_translate::mt::validate_locale;
use banjara_translate::{DEFAULT_HISTORY_LIMIT, ServiceConfig, TranslateError, TranslateResult};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Largest history page a client may request
pub const MAX_HISTORY_LIMIT: usize = 100;

#[derive(Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub dictionary_path: Option<PathBuf>,
    pub source_hint: String,
    pub fallback_timeout: Duration,
    pub history_limit: usize,
    pub google_api_key: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        let service = ServiceConfig::default();
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            dictionary_path: None,
            source_hint: service.source_hint,
            fallback_timeout: service.fallback_timeout,
            history_limit: DEFAULT_HISTORY_LIMIT,
            google_api_key: None,
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> TranslateResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> TranslateResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(addr) = get("BANJARA_BIND_ADDR") {
            config.bind_addr = addr.trim().parse().map_err(|e| {
                TranslateError::ConfigError(format!("BANJARA_BIND_ADDR '{}': {}", addr, e))
            })?;
        }

        config.dictionary_path = get("BANJARA_DICTIONARY_PATH").map(PathBuf::from);

        if let Some(hint) = get("BANJARA_SOURCE_HINT") {
            validate_locale(hint.trim())?;
            config.source_hint = hint.trim().to_string();
        }

        if let Some(secs) = get("BANJARA_FALLBACK_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|e| {
                TranslateError::ConfigError(format!(
                    "BANJARA_FALLBACK_TIMEOUT_SECS '{}': {}",
                    secs, e
                ))
            })?;
            if secs == 0 {
                return Err(TranslateError::ConfigError(
                    "BANJARA_FALLBACK_TIMEOUT_SECS must be at least 1".to_string(),
                ));
            }
            config.fallback_timeout = Duration::from_secs(secs);
        }

        if let Some(limit) = get("BANJARA_HISTORY_LIMIT") {
            let limit: usize = limit.trim().parse().map_err(|e| {
                TranslateError::ConfigError(format!("BANJARA_HISTORY_LIMIT '{}': {}", limit, e))
            })?;
            if limit == 0 || limit > MAX_HISTORY_LIMIT {
                return Err(TranslateError::ConfigError(format!(
                    "BANJARA_HISTORY_LIMIT must be between 1 and {}",
                    MAX_HISTORY_LIMIT
                )));
            }
            config.history_limit = limit;
        }

        config.google_api_key = get(API_KEY_ENV);

        Ok(config)
    }

    /// Fallback settings for the translation service
    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            source_hint: self.source_hint.clone(),
            fallback_timeout: self.fallback_timeout,
            ..ServiceConfig::default()
        }
    }
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("bind_addr", &self.bind_addr)
            .field("dictionary_path", &self.dictionary_path)
            .field("source_hint", &self.source_hint)
            .field("fallback_timeout", &self.fallback_timeout)
            .field("history_limit", &self.history_limit)
            .field("google_api_key", &self.google_api_key.as_ref().map(|_| "***"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:3000");
        assert_eq!(config.source_hint, "hi");
        assert_eq!(config.fallback_timeout, Duration::from_secs(4));
        assert_eq!(config.history_limit, 10);
        assert!(config.dictionary_path.is_none());
        assert!(config.google_api_key.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("BANJARA_BIND_ADDR", "0.0.0.0:8080"),
            ("BANJARA_DICTIONARY_PATH", "/etc/banjara/dictionary.json"),
            ("BANJARA_SOURCE_HINT", "mr"),
            ("BANJARA_FALLBACK_TIMEOUT_SECS", "3"),
            ("BANJARA_HISTORY_LIMIT", "25"),
            ("GOOGLE_TRANSLATE_API_KEY", "secret"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(
            config.dictionary_path,
            Some(PathBuf::from("/etc/banjara/dictionary.json"))
        );
        assert_eq!(config.service_config().source_hint, "mr");
        assert_eq!(config.service_config().fallback_timeout, Duration::from_secs(3));
        assert_eq!(config.service_config().fallback_target, "en");
        assert_eq!(config.history_limit, 25);
        assert_eq!(config.google_api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("GOOGLE_TRANSLATE_API_KEY", "  "),
            ("BANJARA_DICTIONARY_PATH", ""),
        ]))
        .unwrap();
        assert!(config.google_api_key.is_none());
        assert!(config.dictionary_path.is_none());
    }

    #[test]
    fn test_invalid_values_rejected() {
        for (key, value) in [
            ("BANJARA_BIND_ADDR", "not-an-address"),
            ("BANJARA_SOURCE_HINT", "h!"),
            ("BANJARA_FALLBACK_TIMEOUT_SECS", "soon"),
            ("BANJARA_FALLBACK_TIMEOUT_SECS", "0"),
            ("BANJARA_HISTORY_LIMIT", "0"),
            ("BANJARA_HISTORY_LIMIT", "1000"),
        ] {
            assert!(
                ServerConfig::from_lookup(lookup(&[(key, value)])).is_err(),
                "{}={} should be rejected",
                key,
                value
            );
        }
    }

    #[test]
    fn test_debug_masks_api_key() {
        let config =
            ServerConfig::from_lookup(lookup(&[("GOOGLE_TRANSLATE_API_KEY", "secret")])).unwrap();
        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("***"));
        assert!(!debug_str.contains("secret"));
    }
}
