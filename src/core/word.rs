//! Puzzle word representation
//!
//! A Word is the single normalization boundary for letters: everything that
//! enters the engine as text is lowercased here, and everything displayed
//! back is uppercased from here.

use rustc_hash::FxHashMap;
use std::fmt;

/// A lowercase ASCII word of any non-zero length
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

/// Normalize a single input letter to its stored (lowercase) form
///
/// Returns `None` for anything that is not an ASCII letter.
#[inline]
#[must_use]
pub fn normalize_letter(ch: char) -> Option<u8> {
    ch.is_ascii_alphabetic().then(|| ch.to_ascii_lowercase() as u8)
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and the text is lowercased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The trimmed text is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_reveal::core::Word;
    ///
    /// let word = Word::new("Salah").unwrap();
    /// assert_eq!(word.text(), "salah");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("de bruyne").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self {
            text: text.to_ascii_lowercase(),
        })
    }

    /// Build a word from already-normalized letters
    ///
    /// Returns `None` if any byte is not a lowercase ASCII letter or the slice is empty.
    #[must_use]
    pub fn from_letters(letters: &[u8]) -> Option<Self> {
        if letters.is_empty() || !letters.iter().all(u8::is_ascii_lowercase) {
            return None;
        }
        let text = String::from_utf8(letters.to_vec()).ok()?;
        Some(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as lowercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// True if the word has no letters
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Uppercase form for display
    #[must_use]
    pub fn display_text(&self) -> String {
        self.text.to_ascii_uppercase()
    }

    /// Get the count of each letter in the word
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, usize> {
        let mut counts = FxHashMap::default();
        for &ch in self.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("haaland").unwrap();
        assert_eq!(word.text(), "haaland");
        assert_eq!(word.chars(), b"haaland");
        assert_eq!(word.len(), 7);
        assert!(!word.is_empty());
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "crane");

        let word2 = Word::new("  CrAnE\n").unwrap();
        assert_eq!(word2.text(), "crane");
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("   "), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("van dijk"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cran!"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("müller"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_from_letters() {
        assert_eq!(Word::from_letters(b"kane"), Some(Word::new("kane").unwrap()));
        assert_eq!(Word::from_letters(b"Kane"), None);
        assert_eq!(Word::from_letters(b""), None);
    }

    #[test]
    fn normalize_letter_accepts_only_ascii_letters() {
        assert_eq!(normalize_letter('A'), Some(b'a'));
        assert_eq!(normalize_letter('z'), Some(b'z'));
        assert_eq!(normalize_letter('1'), None);
        assert_eq!(normalize_letter(' '), None);
        assert_eq!(normalize_letter('é'), None);
    }

    #[test]
    fn word_char_counts() {
        let word = Word::new("speed").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.get(&b's'), Some(&1));
        assert_eq!(counts.get(&b'e'), Some(&2));
        assert_eq!(counts.get(&b'x'), None);
    }

    #[test]
    fn char_counts_past_u8_range() {
        let word = Word::new("a".repeat(300) + "b").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.get(&b'a'), Some(&300));
        assert_eq!(counts.get(&b'b'), Some(&1));
    }

    #[test]
    fn word_display() {
        let word = Word::new("pedri").unwrap();
        assert_eq!(format!("{word}"), "pedri");
        assert_eq!(word.display_text(), "PEDRI");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("crane").unwrap();
        let word2 = Word::new("CRANE").unwrap();
        let word3 = Word::new("slate").unwrap();

        assert_eq!(word1, word2); // Case insensitive
        assert_ne!(word1, word3);
    }
}
