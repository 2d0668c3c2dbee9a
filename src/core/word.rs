//! Puzzle word representation
//!
//! A Word is a fixed-length run of lowercase ASCII letters. The length is a
//! property of the corpus, so words are validated against an expected length.

use std::fmt;
use thiserror::Error;

/// Word length used when nothing else is configured
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// A fixed-length puzzle word
///
/// Stored as lowercase ASCII text, so byte positions are letter positions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("word must contain only ASCII letters")]
    NonAscii,
    #[error("word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word of the default length (5)
    ///
    /// # Errors
    /// Returns `WordError` if the length is not 5 or the text contains
    /// anything other than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_positional::core::Word;
    ///
    /// let word = Word::new("Solve").unwrap();
    /// assert_eq!(word.text(), "solve");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("s0lve").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        Self::with_length(text, DEFAULT_WORD_LENGTH)
    }

    /// Create a new Word that must have exactly `length` letters
    ///
    /// # Errors
    /// Returns `WordError` on a length mismatch or non-letter characters.
    pub fn with_length(text: impl Into<String>, length: usize) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if text.len() != length {
            return Err(WordError::InvalidLength {
                expected: length,
                actual: text.len(),
            });
        }

        if !text.bytes().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters as bytes
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        self.text.len()
    }

    /// Get the character at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.length()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.chars()[position]
    }

    /// Check if the word contains a specific letter anywhere
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.chars().contains(&letter)
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
        let word = Word::new("agave").unwrap();
        assert_eq!(word.text(), "agave");
        assert_eq!(word.chars(), b"agave");
        assert_eq!(word.length(), 5);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("BIKER").unwrap();
        assert_eq!(word.text(), "biker");

        let word2 = Word::new("BiKeR").unwrap();
        assert_eq!(word2, word);
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(
            Word::new("too long"),
            Err(WordError::InvalidLength {
                expected: 5,
                actual: 8
            })
        );
        assert!(matches!(
            Word::new(""),
            Err(WordError::InvalidLength { actual: 0, .. })
        ));
    }

    #[test]
    fn word_creation_custom_length() {
        let word = Word::with_length("puzzle", 6).unwrap();
        assert_eq!(word.length(), 6);
        assert!(Word::with_length("puzzle", 5).is_err());
        assert!(Word::with_length("cat", 3).is_ok());
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cap3r"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cap r"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("capér"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("czars").unwrap();
        assert_eq!(word.char_at(0), b'c');
        assert_eq!(word.char_at(2), b'a');
        assert_eq!(word.char_at(4), b's');
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("tests").unwrap();
        assert!(word.has_letter(b't'));
        assert!(word.has_letter(b's'));
        assert!(!word.has_letter(b'a'));
    }

    #[test]
    fn word_display() {
        let word = Word::new("solve").unwrap();
        assert_eq!(format!("{word}"), "solve");
    }
}
