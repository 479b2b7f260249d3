/// Error types for dictionary loading, machine translation and storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// Invalid or missing configuration (API keys, environment values)
    ConfigError(String),
    /// Dictionary is empty, inconsistent or could not be loaded
    DictionaryError(String),
    /// Locale code failed validation
    InvalidLocale(String),
    /// Transport-level failure talking to an external service
    NetworkError(String),
    /// External service answered but the translation failed
    TranslationError(String),
    /// External service did not answer in time
    Timeout(String),
    /// Translation history could not be read or written
    StorageError(String),
}

impl std::fmt::Display for TranslateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranslateError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            TranslateError::DictionaryError(msg) => write!(f, "Dictionary error: {}", msg),
            TranslateError::InvalidLocale(msg) => write!(f, "Invalid locale: {}", msg),
            TranslateError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            TranslateError::TranslationError(msg) => write!(f, "Translation error: {}", msg),
            TranslateError::Timeout(msg) => write!(f, "Timed out: {}", msg),
            TranslateError::StorageError(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for TranslateError {}

impl From<reqwest::Error> for TranslateError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TranslateError::Timeout(err.to_string())
        } else {
            TranslateError::NetworkError(err.to_string())
        }
    }
}

/// Result type for translation operations
pub type TranslateResult<T> = Result<T, TranslateError>;
