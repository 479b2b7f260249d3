//! Banjara to Telugu and English translation
//!
//! Recognized Banjara speech is matched token by token against a curated
//! dictionary. Inputs the dictionary cannot touch at all fall back to an
//! external machine translation provider for English.
//!
//! # Workflow Example
//!
//! ```ignore
//! use banjara_translate::{
//!     Dictionary, LexicalMatcher, ServiceConfig, TranslationService,
//!     mt::GoogleTranslateProvider,
//! };
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Load and validate the dictionary once
//!     let dictionary = Arc::new(Dictionary::builtin()?);
//!
//!     // 2. Build the matcher and the service around it
//!     let matcher = Arc::new(LexicalMatcher::new(dictionary));
//!     let provider = GoogleTranslateProvider::from_env()?;
//!     let service =
//!         TranslationService::new(matcher, Some(Arc::new(provider)), ServiceConfig::default());
//!
//!     // 3. Translate
//!     let result = service.translate("namaskar dhanyavad").await;
//!     println!("{} / {}", result.telugu, result.english);
//!     Ok(())
//! }
//! ```

pub mod dictionary;
pub mod error;
pub mod matcher;
pub mod mt;
pub mod phonetic;
pub mod service;
pub mod store;
pub mod text;

// Re-export main types for convenient access
pub use dictionary::{Dictionary, DictionaryEntry};
pub use error::{TranslateError, TranslateResult};
pub use matcher::{ComposedText, LexicalMatcher, MatchOutcome, MatchTier, MatchedEntry, TokenMatch};
pub use service::{ServiceConfig, TranslationMethod, TranslationResult, TranslationService};
pub use store::{
    DEFAULT_HISTORY_LIMIT, MemoryStore, NewTranslation, TranslationRecord, TranslationStore,
};
