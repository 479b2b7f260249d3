/// External machine translation
///
/// The dictionary covers what it can; anything it cannot match at all is sent
/// to an external provider behind the [`MachineTranslator`] trait. Providers:
///
/// 1. [`GoogleTranslateProvider`] - Google Translate API v2
/// 2. [`MockTranslator`] - deterministic stand-in for tests and offline use
pub mod google_translate;
pub mod mock;
pub mod translator;

pub use google_translate::GoogleTranslateProvider;
pub use mock::{MockMode, MockTranslator};
pub use translator::{MachineTranslator, normalize_locale, validate_locale};
