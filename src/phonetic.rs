//! Consonant-overlap similarity
//!
//! A deliberately small approximation of pronunciation closeness. Speech
//! recognizers tend to get consonants in roughly the right positions while
//! drifting on vowels, so two words are compared position by position on
//! consonants only.

/// Consonants considered by the similarity measure
const CONSONANTS: &str = "bcdfghjklmnpqrstvwxyz";

/// Similarity returned for words whose lengths differ by more than
/// [`MAX_LENGTH_DIFFERENCE`]
pub const DISSIMILAR: f64 = 0.2;

/// Largest length difference, in characters, that is still compared
pub const MAX_LENGTH_DIFFERENCE: usize = 2;

fn is_consonant(c: char) -> bool {
    CONSONANTS.contains(c)
}

/// Fraction of consonant positions at which both words carry the same consonant
///
/// A consonant position is an index, up to the longer word's length, where at
/// least one of the words has a consonant. Inputs are expected to be
/// lowercased matching keys.
///
/// # Example
///
/// ```ignore
/// assert_eq!(similarity("dhanyavad", "dhanyawad"), 5.0 / 6.0);
/// assert_eq!(similarity("pani", "panipuri"), DISSIMILAR);
/// ```
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.len().abs_diff(b.len()) > MAX_LENGTH_DIFFERENCE {
        return DISSIMILAR;
    }

    let mut positions = 0usize;
    let mut matches = 0usize;
    for i in 0..a.len().max(b.len()) {
        let left = a.get(i).copied().filter(|&c| is_consonant(c));
        let right = b.get(i).copied().filter(|&c| is_consonant(c));
        match (left, right) {
            (None, None) => {}
            (Some(l), Some(r)) if l == r => {
                positions += 1;
                matches += 1;
            }
            _ => positions += 1,
        }
    }

    if positions == 0 {
        // Vowel-only words: nothing to compare but the words themselves
        return if a == b { 1.0 } else { 0.0 };
    }

    matches as f64 / positions as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_words() {
        assert_eq!(similarity("khaldo", "khaldo"), 1.0);
    }

    #[test]
    fn test_vowel_drift_ignored() {
        // Only vowels differ, every consonant lines up
        assert_eq!(similarity("ghar", "ghor"), 1.0);
    }

    #[test]
    fn test_single_consonant_swap() {
        // d h n y [w|v] d: five of six consonant positions agree
        let score = similarity("dhanyawad", "dhanyavad");
        assert!((score - 5.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_shifted_consonants_do_not_count() {
        // Dropping the 'h' shifts every later consonant by one position
        let score = similarity("kaldo", "khaldo");
        assert!((score - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_trailing_extra_consonant_counts_as_mismatch() {
        // g h r agree, the extra 'u' is a vowel and is ignored
        assert_eq!(similarity("gharu", "ghar"), 1.0);
        // the extra 'k' is a consonant position with no partner
        assert!((similarity("ghark", "ghar") - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_large_length_difference_is_dissimilar() {
        assert_eq!(similarity("pani", "panipuri"), DISSIMILAR);
        assert_eq!(similarity("bai", "baapuji"), DISSIMILAR);
    }

    #[test]
    fn test_length_difference_of_two_still_compared() {
        // b h agree, the trailing 'y' has no partner
        assert!((similarity("bhai", "bhaiya") - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_vowel_only_words() {
        assert_eq!(similarity("aa", "aa"), 1.0);
        assert_eq!(similarity("aa", "ai"), 0.0);
    }

    #[test]
    fn test_symmetric() {
        assert_eq!(similarity("chhoro", "chhori"), similarity("chhori", "chhoro"));
    }

    #[test]
    fn test_non_ascii_compared_by_char() {
        // No Latin consonants at all, so only equality matters
        assert_eq!(similarity("తిను", "తిను"), 1.0);
        assert_eq!(similarity("తిను", "పని"), 0.0);
    }
}
