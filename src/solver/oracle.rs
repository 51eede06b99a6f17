//! The engine's view of the player holding the hidden word
//!
//! Defines the Oracle trait and an implementation backed by a known word.

use crate::core::{Pattern, Word};
use std::convert::Infallible;

/// Answers the engine's questions about the hidden word
pub trait Oracle {
    /// Error raised when an answer cannot be obtained
    type Error;

    /// Positions (0-based) of `letter` in the hidden word
    ///
    /// An empty vector means the letter is absent. `pattern` is the engine's
    /// current knowledge, passed along for display.
    ///
    /// # Errors
    ///
    /// Returns the oracle's error if no answer can be obtained.
    fn positions_of(&mut self, letter: u8, pattern: &Pattern) -> Result<Vec<usize>, Self::Error>;

    /// The hidden word, asked for once the round is lost
    ///
    /// # Errors
    ///
    /// Returns the oracle's error if no answer can be obtained.
    fn reveal_word(&mut self) -> Result<Word, Self::Error>;
}

/// Oracle that answers truthfully from a word it knows
///
/// Used by the `solve` and `benchmark` commands and throughout the tests.
#[derive(Debug, Clone)]
pub struct KnownWord {
    word: Word,
    questions: usize,
}

impl KnownWord {
    #[must_use]
    pub const fn new(word: Word) -> Self {
        Self { word, questions: 0 }
    }

    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// Number of letters asked about so far
    #[must_use]
    pub const fn questions(&self) -> usize {
        self.questions
    }
}

impl Oracle for KnownWord {
    type Error = Infallible;

    fn positions_of(&mut self, letter: u8, _pattern: &Pattern) -> Result<Vec<usize>, Infallible> {
        self.questions += 1;
        Ok(self.word.positions_of(letter))
    }

    fn reveal_word(&mut self) -> Result<Word, Infallible> {
        Ok(self.word.clone())
    }
}
