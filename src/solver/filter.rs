//! Candidate filtering
//!
//! Narrows a word list to the words still consistent with what the round
//! has established so far.

use crate::core::{Pattern, TriedLetters, Word};

/// Letters that were tried but are not in any revealed slot
///
/// Such letters are known to be absent from the hidden word.
#[inline]
#[must_use]
pub fn bad_letters(pattern: &Pattern, tried: &TriedLetters) -> u32 {
    tried.mask() & !pattern.revealed_mask()
}

/// Check a single word against the pattern and the bad-letter mask
#[inline]
#[must_use]
pub fn is_candidate(word: &Word, pattern: &Pattern, bad: u32) -> bool {
    word.letter_mask() & bad == 0 && pattern.matches(word)
}

/// Keep the words consistent with `pattern` and `tried`
///
/// A word survives when it has the pattern's length, agrees with every
/// revealed slot, and contains none of the bad letters anywhere.
///
/// # Examples
/// ```
/// use pendu::core::{Pattern, TriedLetters, Word};
/// use pendu::solver::filter_candidates;
///
/// let words: Vec<Word> = ["bonjour", "cherche", "oranges"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let mut tried = TriedLetters::new();
/// tried.insert(b'e');
///
/// let candidates = filter_candidates(&words, &Pattern::hidden(7), &tried);
/// assert_eq!(candidates.len(), 1);
/// assert_eq!(candidates[0].text(), "bonjour");
/// ```
pub fn filter_candidates<'a, I>(words: I, pattern: &Pattern, tried: &TriedLetters) -> Vec<&'a Word>
where
    I: IntoIterator<Item = &'a Word>,
{
    let bad = bad_letters(pattern, tried);
    words
        .into_iter()
        .filter(|word| is_candidate(word, pattern, bad))
        .collect()
}
