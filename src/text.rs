//! Token cleaning shared by the dictionary and the matcher
//!
//! Recognized speech arrives with stray punctuation and inconsistent casing.
//! Every token gets two forms:
//!
//! - the **display form**: punctuation stripped, casing kept. Used when an
//!   unmatched token is copied into the output.
//! - the **matching key**: display form lowercased, with `-`/`_` joiners
//!   turned into single spaces. Dictionary phrases are keyed the same way, so
//!   `Ram-Ram` and `ram ram` compare equal.

use regex::Regex;
use std::sync::LazyLock;

static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{M}\p{N}\s_\-]").unwrap());

static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s_\-]+").unwrap());

/// Strip punctuation from a token, keeping letters, marks, digits and joiners
pub fn display_form(token: &str) -> String {
    PUNCTUATION.replace_all(token, "").into_owned()
}

/// Lowercased comparison key for a token or a dictionary phrase
///
/// # Example
///
/// ```ignore
/// assert_eq!(matching_key("Ram-Ram!"), "ram ram");
/// ```
pub fn matching_key(text: &str) -> String {
    let stripped = display_form(text).to_lowercase();
    SEPARATORS.replace_all(&stripped, " ").trim().to_string()
}

/// Split recognized text into whitespace-separated tokens
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_form_keeps_case() {
        assert_eq!(display_form("Khaldo!"), "Khaldo");
        assert_eq!(display_form("\"Namaskar,\""), "Namaskar");
    }

    #[test]
    fn test_display_form_keeps_joiners() {
        assert_eq!(display_form("ram-ram"), "ram-ram");
        assert_eq!(display_form("mar_nav?"), "mar_nav");
    }

    #[test]
    fn test_display_form_punctuation_only() {
        assert_eq!(display_form("?!"), "");
    }

    #[test]
    fn test_display_form_keeps_telugu_marks() {
        // Vowel signs are combining marks and must survive
        assert_eq!(display_form("నమస్కారం."), "నమస్కారం");
    }

    #[test]
    fn test_matching_key_lowercases_and_splits_joiners() {
        assert_eq!(matching_key("Ram-Ram"), "ram ram");
        assert_eq!(matching_key("KASAN__cho"), "kasan cho");
        assert_eq!(matching_key("  Bhai.  "), "bhai");
    }

    #[test]
    fn test_matching_key_collapses_whitespace() {
        assert_eq!(matching_key("tharo   nav"), "tharo nav");
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("  namaskar \t dhanyavad\n"), vec!["namaskar", "dhanyavad"]);
        assert!(tokenize("   ").is_empty());
    }
}
