//! Hangman word representation
//!
//! A Word stores its text along with a bitmask of the letters it contains.

use super::letters::{bit, is_letter};
use std::fmt;

/// A word over the 26-letter lowercase alphabet
///
/// Words are validated on construction and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: u32,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::InvalidCharacters => {
                write!(f, "Word must contain only unaccented lowercase letters")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty
    /// - Any character is outside `a..=z` (uppercase, accents, digits, spaces)
    ///
    /// # Examples
    /// ```
    /// use pendu::core::Word;
    ///
    /// let word = Word::new("bonjour").unwrap();
    /// assert_eq!(word.text(), "bonjour");
    ///
    /// assert!(Word::new("Bonjour").is_err());
    /// assert!(Word::new("été").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.bytes().all(is_letter) {
            return Err(WordError::InvalidCharacters);
        }

        let letters = text.bytes().fold(0, |mask, b| mask | bit(b));

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if position >= `len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.bytes()[position]
    }

    /// Bitmask of the distinct letters in the word
    #[inline]
    #[must_use]
    pub const fn letter_mask(&self) -> u32 {
        self.letters
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        is_letter(letter) && self.letters & bit(letter) != 0
    }

    /// Get all positions (0-based) where a letter appears
    ///
    /// Returns an empty vector if the letter doesn't appear.
    #[must_use]
    pub fn positions_of(&self, letter: u8) -> Vec<usize> {
        if !self.has_letter(letter) {
            return Vec::new();
        }
        self.bytes()
            .iter()
            .enumerate()
            .filter_map(|(i, &b)| (b == letter).then_some(i))
            .collect()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
