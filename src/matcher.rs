//! Lexical matcher: fuzzy token-to-dictionary matching
//!
//! Each whitespace token of the input is compared against every dictionary
//! phrase. A phrase qualifies for at most one [`MatchTier`], the highest one
//! whose rule it satisfies. Candidates are then ranked by tier, then by score,
//! then by dictionary order, and the first one wins.
//!
//! | Tier           | Score              | Rule                                          |
//! |----------------|--------------------|-----------------------------------------------|
//! | `Exact`        | 1.0                | key equals the phrase                         |
//! | `Alias`        | 0.95               | alias table maps key to the phrase            |
//! | `Phonetic`     | 0.9 × similarity   | consonant similarity above 0.7                |
//! | `WordBoundary` | 0.85               | key starts with `phrase ` or ends with ` phrase` |
//! | `Prefix`       | 0.7                | key is a prefix of the phrase                 |
//! | `Substring`    | 0.5                | both ≥ 4 chars and one contains the other     |
//!
//! # Example
//!
//! ```ignore
//! use banjara_translate::{Dictionary, LexicalMatcher};
//! use std::sync::Arc;
//!
//! let matcher = LexicalMatcher::new(Arc::new(Dictionary::builtin()?));
//! let outcome = matcher.match_text("namaskar dhanyavad");
//! let composed = outcome.compose().unwrap();
//! assert_eq!(composed.english, "hello thank you");
//! ```

use crate::dictionary::{Dictionary, DictionaryEntry};
use crate::phonetic;
use crate::text::{display_form, matching_key, tokenize};
use serde::Serialize;
use std::sync::Arc;

/// Similarity a phonetic candidate must exceed
pub const PHONETIC_THRESHOLD: f64 = 0.7;

/// Minimum character length of both sides for substring matching
pub const SUBSTRING_MIN_CHARS: usize = 4;

/// Matching rules, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Exact,
    Alias,
    Phonetic,
    WordBoundary,
    Prefix,
    Substring,
}

impl MatchTier {
    /// All tiers, highest priority first
    pub const ALL: [MatchTier; 6] = [
        MatchTier::Exact,
        MatchTier::Alias,
        MatchTier::Phonetic,
        MatchTier::WordBoundary,
        MatchTier::Prefix,
        MatchTier::Substring,
    ];

    /// Score before any per-candidate weighting
    pub fn base_score(self) -> f64 {
        match self {
            MatchTier::Exact => 1.0,
            MatchTier::Alias => 0.95,
            MatchTier::Phonetic => 0.9,
            MatchTier::WordBoundary => 0.85,
            MatchTier::Prefix => 0.7,
            MatchTier::Substring => 0.5,
        }
    }

    /// Score for `key` against the phrase at `entry`, if this tier's rule holds
    fn evaluate(
        self,
        key: &str,
        phrase: &str,
        entry: usize,
        dictionary: &Dictionary,
    ) -> Option<f64> {
        let qualifies = match self {
            MatchTier::Exact => key == phrase,
            MatchTier::Alias => dictionary.alias_target(key) == Some(entry),
            MatchTier::Phonetic => {
                let similarity = phonetic::similarity(key, phrase);
                return (similarity > PHONETIC_THRESHOLD).then(|| self.base_score() * similarity);
            }
            MatchTier::WordBoundary => {
                key.starts_with(&format!("{} ", phrase)) || key.ends_with(&format!(" {}", phrase))
            }
            MatchTier::Prefix => phrase.starts_with(key),
            MatchTier::Substring => {
                key.chars().count() >= SUBSTRING_MIN_CHARS
                    && phrase.chars().count() >= SUBSTRING_MIN_CHARS
                    && (key.contains(phrase) || phrase.contains(key))
            }
        };
        qualifies.then(|| self.base_score())
    }
}

impl std::fmt::Display for MatchTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MatchTier::Exact => "exact",
            MatchTier::Alias => "alias",
            MatchTier::Phonetic => "phonetic",
            MatchTier::WordBoundary => "word-boundary",
            MatchTier::Prefix => "prefix",
            MatchTier::Substring => "substring",
        };
        f.pad(name)
    }
}

/// Winning dictionary entry for a token
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchedEntry {
    /// Position of the entry in dictionary order
    pub index: usize,
    pub entry: DictionaryEntry,
    pub tier: MatchTier,
    pub score: f64,
}

/// Match result for one input token
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenMatch {
    /// Token as written, punctuation stripped
    pub original: String,
    /// Lowercased key used for matching
    pub cleaned: String,
    pub matched: Option<MatchedEntry>,
}

impl TokenMatch {
    pub fn is_matched(&self) -> bool {
        self.matched.is_some()
    }
}

/// Telugu and English text composed from token matches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedText {
    pub telugu: String,
    pub english: String,
}

/// Per-token matches for a whole input
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchOutcome {
    pub tokens: Vec<TokenMatch>,
}

impl MatchOutcome {
    pub fn has_matches(&self) -> bool {
        self.tokens.iter().any(TokenMatch::is_matched)
    }

    pub fn matched_count(&self) -> usize {
        self.tokens.iter().filter(|t| t.is_matched()).count()
    }

    /// Join translations in token order, copying unmatched tokens through
    ///
    /// Returns `None` when no token matched, which is the caller's cue to use
    /// the external fallback.
    pub fn compose(&self) -> Option<ComposedText> {
        if !self.has_matches() {
            return None;
        }

        let mut telugu = Vec::with_capacity(self.tokens.len());
        let mut english = Vec::with_capacity(self.tokens.len());
        for token in &self.tokens {
            match &token.matched {
                Some(m) => {
                    telugu.push(m.entry.telugu.as_str());
                    english.push(m.entry.english.as_str());
                }
                None => {
                    telugu.push(token.original.as_str());
                    english.push(token.original.as_str());
                }
            }
        }

        Some(ComposedText {
            telugu: telugu.join(" "),
            english: english.join(" "),
        })
    }
}

/// Dictionary-backed matcher
///
/// Holds no mutable state; share it freely across requests. An empty
/// dictionary cannot be constructed, so every matcher has something to match
/// against.
#[derive(Debug, Clone)]
pub struct LexicalMatcher {
    dictionary: Arc<Dictionary>,
}

impl LexicalMatcher {
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        Self { dictionary }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Tokenize `text` and match every token
    pub fn match_text(&self, text: &str) -> MatchOutcome {
        MatchOutcome {
            tokens: tokenize(text)
                .into_iter()
                .map(|token| self.match_token(token))
                .collect(),
        }
    }

    /// Match a single whitespace-free token
    pub fn match_token(&self, token: &str) -> TokenMatch {
        let display = display_form(token);
        let cleaned = matching_key(&display);
        let matched = self.best_candidate(&cleaned);

        TokenMatch {
            original: if display.is_empty() {
                token.to_string()
            } else {
                display
            },
            cleaned,
            matched,
        }
    }

    fn best_candidate(&self, key: &str) -> Option<MatchedEntry> {
        if key.is_empty() {
            return None;
        }

        let mut candidates = self.candidates(key);
        // Stable: equal (tier, score) keeps dictionary order
        candidates.sort_by(|a, b| a.1.cmp(&b.1).then(b.2.total_cmp(&a.2)));

        candidates.into_iter().next().and_then(|(index, tier, score)| {
            self.dictionary.entry(index).map(|entry| MatchedEntry {
                index,
                entry: entry.clone(),
                tier,
                score,
            })
        })
    }

    /// Highest qualifying tier per entry, in dictionary order
    fn candidates(&self, key: &str) -> Vec<(usize, MatchTier, f64)> {
        self.dictionary
            .keys()
            .filter_map(|(index, phrase)| {
                MatchTier::ALL.iter().find_map(|&tier| {
                    tier.evaluate(key, phrase, index, &self.dictionary)
                        .map(|score| (index, tier, score))
                })
            })
            .collect()
    }
}
