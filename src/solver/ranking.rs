//! Letter ranking by frequency
//!
//! Orders the whole alphabet from most to least frequent among the current
//! candidates. Ties are broken alphabetically so the order is reproducible.

use crate::core::letters::{ALPHABET, ALPHABET_SIZE, FALLBACK_ORDER, index};
use crate::core::{Pattern, Word};
use std::cmp::Reverse;

/// Count every occurrence of every letter across `words`
///
/// A letter appearing twice in a word counts twice.
pub fn letter_counts<'a, I>(words: I) -> [usize; ALPHABET_SIZE]
where
    I: IntoIterator<Item = &'a Word>,
{
    let mut counts = [0; ALPHABET_SIZE];
    for word in words {
        for &b in word.bytes() {
            counts[index(b)] += 1;
        }
    }
    counts
}

/// Rank the alphabet for the next guess
///
/// With no revealed slot yet the fixed [`FALLBACK_ORDER`] is returned, the
/// word list is not consulted. Otherwise letters are sorted by descending
/// count in `words`, then alphabetically. Letters missing from `words`
/// still appear, at the tail.
///
/// The ranking knows nothing about tried letters; skipping them is up to
/// the caller.
pub fn rank_letters<'a, I>(words: I, pattern: &Pattern) -> [u8; ALPHABET_SIZE]
where
    I: IntoIterator<Item = &'a Word>,
{
    if !pattern.has_revealed() {
        return FALLBACK_ORDER;
    }

    let counts = letter_counts(words);
    let mut ranked = ALPHABET;
    ranked.sort_by_key(|&l| (Reverse(counts[index(l)]), l));
    ranked
}
