//! The fixed 26-letter alphabet and per-round letter bookkeeping
//!
//! Letters are plain `u8` values in `b'a'..=b'z'`. Sets of letters are
//! packed into a `u32` bitmask, one bit per letter.

use std::fmt;

/// Number of symbols in the alphabet
pub const ALPHABET_SIZE: usize = 26;

/// The alphabet in natural order
pub const ALPHABET: [u8; ALPHABET_SIZE] = *b"abcdefghijklmnopqrstuvwxyz";

/// Letter order used before any letter of the word is known
///
/// Frequency order of letters in written French.
pub const FALLBACK_ORDER: [u8; ALPHABET_SIZE] = *b"eaisnrtoludcmpgbvhfqyxjkwz";

/// Check that a byte belongs to the alphabet
#[inline]
#[must_use]
pub const fn is_letter(byte: u8) -> bool {
    byte.is_ascii_lowercase()
}

/// Index of a letter in the alphabet (0-25)
///
/// # Panics
/// Panics in debug mode if `letter` is outside the alphabet
#[inline]
#[must_use]
pub const fn index(letter: u8) -> usize {
    debug_assert!(is_letter(letter), "letter must be in a..=z");
    (letter - b'a') as usize
}

/// Bitmask with only `letter`'s bit set
#[inline]
#[must_use]
pub const fn bit(letter: u8) -> u32 {
    1 << index(letter)
}

/// Letters proposed during a round
///
/// Lookup goes through the bitmask; insertion order is kept for reporting.
/// A letter is recorded at most once and never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriedLetters {
    mask: u32,
    order: Vec<u8>,
}

impl TriedLetters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a letter
    ///
    /// Returns `false` if the letter had already been tried.
    pub fn insert(&mut self, letter: u8) -> bool {
        if self.contains(letter) {
            return false;
        }
        self.mask |= bit(letter);
        self.order.push(letter);
        true
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, letter: u8) -> bool {
        is_letter(letter) && self.mask & bit(letter) != 0
    }

    /// Bitmask of every tried letter
    #[inline]
    #[must_use]
    pub const fn mask(&self) -> u32 {
        self.mask
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Letters in the order they were tried
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.order.iter().copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.order
    }
}

impl fmt::Display for TriedLetters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &letter) in self.order.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}
