//! Partially revealed word
//!
//! A pattern has one slot per letter of the hidden word. Each slot is either
//! a known letter or still hidden. Slots only ever go from hidden to known.

use super::letters::bit;
use super::reveal::HIDDEN;
use super::Word;
use std::fmt;

/// Partially revealed target word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    slots: Vec<Option<u8>>,
}

/// Error raised when positions cannot be applied to a pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    OutOfRange { position: usize, len: usize },
    Conflict { position: usize, known: u8, letter: u8 },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { position, len } => {
                write!(f, "Position {} is outside a word of {len} letters", position + 1)
            }
            Self::Conflict {
                position,
                known,
                letter,
            } => write!(
                f,
                "Position {} already holds '{}', cannot set '{}'",
                position + 1,
                *known as char,
                *letter as char
            ),
        }
    }
}

impl std::error::Error for PatternError {}

impl Pattern {
    /// Create a fully hidden pattern of the given length
    #[must_use]
    pub fn hidden(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Letter at a position, if revealed
    #[inline]
    #[must_use]
    pub fn slot(&self, position: usize) -> Option<u8> {
        self.slots.get(position).copied().flatten()
    }

    pub fn slots(&self) -> impl Iterator<Item = Option<u8>> + '_ {
        self.slots.iter().copied()
    }

    /// True once at least one slot is known
    #[must_use]
    pub fn has_revealed(&self) -> bool {
        self.slots.iter().any(Option::is_some)
    }

    /// True when every slot is known
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_none()).count()
    }

    /// Bitmask of the letters in revealed slots
    #[must_use]
    pub fn revealed_mask(&self) -> u32 {
        self.slots.iter().flatten().fold(0, |mask, &l| mask | bit(l))
    }

    /// Set every listed position to `letter`
    ///
    /// Positions are 0-based. Either all positions are applied or none is.
    ///
    /// # Errors
    /// Returns `PatternError` if a position is out of range or already holds
    /// a different letter.
    pub fn reveal(&mut self, letter: u8, positions: &[usize]) -> Result<(), PatternError> {
        for &position in positions {
            match self.slots.get(position) {
                None => {
                    return Err(PatternError::OutOfRange {
                        position,
                        len: self.len(),
                    });
                }
                Some(Some(known)) if *known != letter => {
                    return Err(PatternError::Conflict {
                        position,
                        known: *known,
                        letter,
                    });
                }
                Some(_) => {}
            }
        }

        for &position in positions {
            self.slots[position] = Some(letter);
        }
        Ok(())
    }

    /// Check that a word agrees with every revealed slot
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        word.len() == self.len()
            && self
                .slots
                .iter()
                .zip(word.bytes())
                .all(|(slot, &b)| slot.is_none_or(|l| l == b))
    }

    /// The fully revealed word, once complete
    #[must_use]
    pub fn to_word(&self) -> Option<Word> {
        let text: Option<String> = self.slots.iter().map(|s| s.map(char::from)).collect();
        text.and_then(|t| Word::new(t).ok())
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            write!(f, "{}", slot.map_or(HIDDEN, char::from))?;
        }
        Ok(())
    }
}
