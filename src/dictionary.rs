//! Curated Banjara phrase dictionary
//!
//! The dictionary is the primary source of truth for translation quality.
//! It is built once at startup, validated, and then shared read-only between
//! requests. Entry order is significant: when two entries score the same for a
//! token, the one inserted first wins.
//!
//! # Example
//!
//! ```ignore
//! use banjara_translate::Dictionary;
//!
//! let dictionary = Dictionary::builtin()?;
//! let entry = dictionary.find("Khaldo").unwrap();
//! assert_eq!(entry.english, "eat");
//! ```

use crate::error::{TranslateError, TranslateResult};
use crate::text::matching_key;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

/// A Banjara phrase with its Telugu and English translations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    /// Source phrase, may contain several words
    pub banjara: String,
    pub telugu: String,
    pub english: String,
}

impl DictionaryEntry {
    pub fn new(banjara: &str, telugu: &str, english: &str) -> Self {
        Self {
            banjara: banjara.to_string(),
            telugu: telugu.to_string(),
            english: english.to_string(),
        }
    }
}

/// On-disk dictionary format
#[derive(Debug, Deserialize)]
struct DictionaryFile {
    entries: Vec<DictionaryEntry>,
    #[serde(default)]
    aliases: BTreeMap<String, String>,
}

/// Validated, immutable phrase dictionary
#[derive(Debug, Clone)]
pub struct Dictionary {
    entries: Vec<DictionaryEntry>,
    /// Matching key per entry, same order as `entries`
    keys: Vec<String>,
    index: HashMap<String, usize>,
    /// Alternate spelling key → entry index
    aliases: HashMap<String, usize>,
}

impl Dictionary {
    /// Build a dictionary from entries in enumeration order plus an alias table
    ///
    /// Alias keys are alternate spellings; values name the canonical source
    /// phrase they resolve to.
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError` when the entry list is empty, a phrase or
    /// translation is blank, two phrases collide case-insensitively, or an
    /// alias is blank, shadows an entry, or points at an unknown phrase.
    pub fn new<I, K, V>(entries: Vec<DictionaryEntry>, aliases: I) -> TranslateResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        if entries.is_empty() {
            return Err(TranslateError::DictionaryError(
                "dictionary has no entries".to_string(),
            ));
        }

        let mut keys = Vec::with_capacity(entries.len());
        let mut index = HashMap::with_capacity(entries.len());

        for (position, entry) in entries.iter().enumerate() {
            let key = matching_key(&entry.banjara);
            if key.is_empty() {
                return Err(TranslateError::DictionaryError(format!(
                    "entry {} has an empty source phrase",
                    position
                )));
            }
            if entry.telugu.trim().is_empty() || entry.english.trim().is_empty() {
                return Err(TranslateError::DictionaryError(format!(
                    "entry '{}' is missing a translation",
                    entry.banjara
                )));
            }
            if index.insert(key.clone(), position).is_some() {
                return Err(TranslateError::DictionaryError(format!(
                    "duplicate source phrase '{}'",
                    entry.banjara
                )));
            }
            keys.push(key);
        }

        let mut alias_index = HashMap::new();
        for (alias, canonical) in aliases {
            let alias_key = matching_key(alias.as_ref());
            if alias_key.is_empty() {
                return Err(TranslateError::DictionaryError(
                    "alias with an empty spelling".to_string(),
                ));
            }
            if index.contains_key(&alias_key) {
                return Err(TranslateError::DictionaryError(format!(
                    "alias '{}' shadows a dictionary entry",
                    alias.as_ref()
                )));
            }
            let target = index
                .get(&matching_key(canonical.as_ref()))
                .copied()
                .ok_or_else(|| {
                    TranslateError::DictionaryError(format!(
                        "alias '{}' points at unknown phrase '{}'",
                        alias.as_ref(),
                        canonical.as_ref()
                    ))
                })?;
            alias_index.insert(alias_key, target);
        }

        Ok(Self {
            entries,
            keys,
            index,
            aliases: alias_index,
        })
    }

    /// The curated dictionary shipped with the crate
    pub fn builtin() -> TranslateResult<Self> {
        let entries = BUILTIN_ENTRIES
            .iter()
            .map(|(banjara, telugu, english)| DictionaryEntry::new(banjara, telugu, english))
            .collect();
        Self::new(entries, BUILTIN_ALIASES.iter().copied())
    }

    /// Parse a dictionary from its JSON representation
    ///
    /// ```json
    /// {
    ///     "entries": [ { "banjara": "khaldo", "telugu": "తిను", "english": "eat" } ],
    ///     "aliases": { "kaldo": "khaldo" }
    /// }
    /// ```
    pub fn from_json_str(content: &str) -> TranslateResult<Self> {
        let file: DictionaryFile = serde_json::from_str(content)
            .map_err(|e| TranslateError::DictionaryError(format!("invalid JSON: {}", e)))?;
        Self::new(file.entries, file.aliases)
    }

    /// Load a dictionary from a JSON file
    pub fn load_from_file(path: &Path) -> TranslateResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            TranslateError::DictionaryError(format!(
                "failed to read '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json_str(&content).map_err(|e| match e {
            TranslateError::DictionaryError(msg) => {
                TranslateError::DictionaryError(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed dictionary
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, index: usize) -> Option<&DictionaryEntry> {
        self.entries.get(index)
    }

    /// Matching keys in enumeration order, paired with their entry index
    pub(crate) fn keys(&self) -> impl Iterator<Item = (usize, &str)> {
        self.keys.iter().map(String::as_str).enumerate()
    }

    /// Entry index an alternate spelling resolves to
    pub(crate) fn alias_target(&self, key: &str) -> Option<usize> {
        self.aliases.get(key).copied()
    }

    /// Case-insensitive lookup by source phrase
    pub fn find(&self, phrase: &str) -> Option<&DictionaryEntry> {
        self.index
            .get(&matching_key(phrase))
            .and_then(|&i| self.entries.get(i))
    }
}

/// Built-in entries as (banjara, telugu, english), in enumeration order
const BUILTIN_ENTRIES: &[(&str, &str, &str)] = &[
    ("namaskar", "నమస్కారం", "hello"),
    ("ram ram", "రామ్ రామ్", "greetings"),
    ("dhanyavad", "ధన్యవాదాలు", "thank you"),
    ("kasan cho", "ఎలా ఉన్నారు", "how are you"),
    ("mar nav", "నా పేరు", "my name"),
    ("tharo nav", "మీ పేరు", "your name"),
    ("haa", "అవును", "yes"),
    ("koni", "కాదు", "no"),
    ("khaldo", "తిను", "eat"),
    ("pani", "నీళ్ళు", "water"),
    ("roti", "రొట్టె", "bread"),
    ("ghar", "ఇల్లు", "house"),
    ("tanda", "తండా", "hamlet"),
    ("yaadi", "అమ్మ", "mother"),
    ("baapu", "నాన్న", "father"),
    ("bhai", "అన్న", "brother"),
    ("bai", "అక్క", "sister"),
    ("chhoro", "అబ్బాయి", "boy"),
    ("chhori", "అమ్మాయి", "girl"),
    ("aavo", "రండి", "come"),
    ("jaavo", "వెళ్ళండి", "go"),
    ("kaam", "పని", "work"),
    ("aaj", "ఈరోజు", "today"),
    ("kal", "రేపు", "tomorrow"),
    ("accho", "బాగుంది", "good"),
    ("sukh", "సంతోషం", "happiness"),
];

/// Irregular spellings that consonant overlap does not catch
const BUILTIN_ALIASES: &[(&str, &str)] = &[
    ("kaldo", "khaldo"),
    ("khaldu", "khaldo"),
    ("namaste", "namaskar"),
    ("dhanyawaad", "dhanyavad"),
    ("paani", "pani"),
    ("rotti", "roti"),
    ("yadi", "yaadi"),
    ("bapu", "baapu"),
    ("acho", "accho"),
];
