use crate::core::constants::{NATO_ALPHABET, RADIX};
use crate::util::error::NatoGridError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Ordered set of 26 spoken words, one per base-26 digit.
///
/// Lookups are case-insensitive and ignore hyphens, so `"xray"`, `"X-RAY"` and `"X-ray"`
/// all resolve to the same index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct PhoneticAlphabet {
    words: Vec<String>,
    lookup: HashMap<String, usize>,
    initials: Option<HashMap<char, usize>>,
}

fn normalize_word(word: &str) -> String {
    word.chars()
        .filter(|c| *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

fn initial_of(word: &str) -> Option<char> {
    word.chars()
        .find(|c| *c != '-')
        .and_then(|c| c.to_uppercase().next())
}

impl PhoneticAlphabet {
    /// The standard NATO/ICAO alphabet, `Alpha` through `Zulu`.
    pub fn nato() -> Self {
        let words = NATO_ALPHABET.iter().map(|w| w.to_string()).collect();
        Self::from_words_unchecked(words)
    }

    /// Creates an alphabet from exactly 26 distinct words.
    ///
    /// Words must be non-empty and free of whitespace. Two words that differ only in case
    /// or hyphenation count as duplicates.
    pub fn new(words: Vec<String>) -> Result<Self, NatoGridError> {
        if words.len() != RADIX {
            return Err(NatoGridError::InvalidConfiguration(format!(
                "Alphabet must have exactly {} words, got {}",
                RADIX,
                words.len()
            )));
        }

        for word in &words {
            if normalize_word(word).is_empty() {
                return Err(NatoGridError::InvalidConfiguration(
                    "Alphabet words must not be empty".to_string(),
                ));
            }
            if word.chars().any(char::is_whitespace) {
                return Err(NatoGridError::InvalidConfiguration(format!(
                    "Alphabet word '{}' contains whitespace",
                    word
                )));
            }
        }

        let alphabet = Self::from_words_unchecked(words);
        if alphabet.lookup.len() != RADIX {
            return Err(NatoGridError::InvalidConfiguration(
                "Alphabet words must be distinct".to_string(),
            ));
        }

        Ok(alphabet)
    }

    fn from_words_unchecked(words: Vec<String>) -> Self {
        let lookup: HashMap<String, usize> = words
            .iter()
            .enumerate()
            .map(|(i, w)| (normalize_word(w), i))
            .collect();

        let initials: HashMap<char, usize> = words
            .iter()
            .enumerate()
            .filter_map(|(i, w)| initial_of(w).map(|c| (c, i)))
            .collect();
        let initials = (initials.len() == words.len()).then_some(initials);

        Self {
            words,
            lookup,
            initials,
        }
    }

    /// Word for a digit. Digits above 25 are clamped to the last word.
    pub fn word(&self, digit: usize) -> &str {
        &self.words[digit.min(RADIX - 1)]
    }

    /// Digit for a word, or `None` if the word is not in the alphabet.
    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.lookup.get(&normalize_word(word)).copied()
    }

    /// Uppercase first letter of the word for a digit.
    pub fn initial(&self, digit: usize) -> char {
        initial_of(self.word(digit)).unwrap_or('?')
    }

    /// Returns true if every word starts with a different letter, which short codes require.
    pub fn has_unique_initials(&self) -> bool {
        self.initials.is_some()
    }

    /// Digit for a short-code letter.
    ///
    /// Returns `None` if no word starts with the letter, or if the alphabet's initials are
    /// ambiguous.
    pub fn index_of_initial(&self, letter: char) -> Option<usize> {
        let upper = letter.to_uppercase().next()?;
        self.initials.as_ref()?.get(&upper).copied()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl Default for PhoneticAlphabet {
    fn default() -> Self {
        Self::nato()
    }
}

impl TryFrom<Vec<String>> for PhoneticAlphabet {
    type Error = NatoGridError;

    fn try_from(words: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(words)
    }
}

impl From<PhoneticAlphabet> for Vec<String> {
    fn from(alphabet: PhoneticAlphabet) -> Self {
        alphabet.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered_words(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("Word{}", i)).collect()
    }

    #[test]
    fn test_nato_alphabet_order() {
        let alphabet = PhoneticAlphabet::nato();
        assert_eq!(alphabet.words().len(), 26);
        assert_eq!(alphabet.word(0), "Alpha");
        assert_eq!(alphabet.word(23), "X-ray");
        assert_eq!(alphabet.word(25), "Zulu");
    }

    #[test]
    fn test_word_clamps_high_digit() {
        let alphabet = PhoneticAlphabet::nato();
        assert_eq!(alphabet.word(26), "Zulu");
        assert_eq!(alphabet.word(usize::MAX), "Zulu");
    }

    #[test]
    fn test_index_of_case_and_hyphen_insensitive() {
        let alphabet = PhoneticAlphabet::nato();
        assert_eq!(alphabet.index_of("november"), Some(13));
        assert_eq!(alphabet.index_of("NOVEMBER"), Some(13));
        assert_eq!(alphabet.index_of("X-ray"), Some(23));
        assert_eq!(alphabet.index_of("xray"), Some(23));
        assert_eq!(alphabet.index_of("Bogus"), None);
    }

    #[test]
    fn test_initials() {
        let alphabet = PhoneticAlphabet::nato();
        assert!(alphabet.has_unique_initials());
        assert_eq!(alphabet.initial(23), 'X');
        assert_eq!(alphabet.index_of_initial('n'), Some(13));
        assert_eq!(alphabet.index_of_initial('Z'), Some(25));
        assert_eq!(alphabet.index_of_initial('1'), None);
    }

    #[test]
    fn test_initial_ignores_leading_hyphen() -> Result<(), NatoGridError> {
        let mut words: Vec<String> = NATO_ALPHABET.iter().map(|w| w.to_string()).collect();
        words[1] = "-bravo".to_string();
        let alphabet = PhoneticAlphabet::new(words)?;
        assert_eq!(alphabet.initial(1), 'B');
        assert_eq!(alphabet.index_of_initial('b'), Some(1));
        Ok(())
    }

    #[test]
    fn test_custom_alphabet() -> Result<(), NatoGridError> {
        let alphabet = PhoneticAlphabet::new(numbered_words(26))?;
        assert_eq!(alphabet.word(5), "Word5");
        assert_eq!(alphabet.index_of("word25"), Some(25));
        // Every word starts with 'W'
        assert!(!alphabet.has_unique_initials());
        assert_eq!(alphabet.index_of_initial('W'), None);
        Ok(())
    }

    #[test]
    fn test_wrong_word_count() {
        let result = PhoneticAlphabet::new(numbered_words(25));
        assert!(matches!(result, Err(NatoGridError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_duplicate_words() {
        let mut words = numbered_words(26);
        words[25] = "WORD0".to_string();
        assert!(PhoneticAlphabet::new(words).is_err());

        let mut words = numbered_words(26);
        words[1] = "Wo-rd0".to_string();
        assert!(PhoneticAlphabet::new(words).is_err());
    }

    #[test]
    fn test_rejects_empty_and_whitespace_words() {
        let mut words = numbered_words(26);
        words[3] = String::new();
        assert!(PhoneticAlphabet::new(words).is_err());

        let mut words = numbered_words(26);
        words[3] = "Two Words".to_string();
        assert!(PhoneticAlphabet::new(words).is_err());
    }
}
