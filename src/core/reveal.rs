//! Masked display of a word for the human guesser

use super::Word;
use super::letters::TriedLetters;

/// Placeholder shown for a letter that has not been found yet
pub const HIDDEN: char = '-';

/// Render `target` showing only the letters in `known`
///
/// # Examples
/// ```
/// use pendu::core::{TriedLetters, Word, reveal};
///
/// let word = Word::new("bonjour").unwrap();
/// let mut known = TriedLetters::new();
/// known.insert(b'o');
/// assert_eq!(reveal(&word, &known), "-o--o--");
/// ```
#[must_use]
pub fn reveal(target: &Word, known: &TriedLetters) -> String {
    target
        .bytes()
        .iter()
        .map(|&b| if known.contains(b) { char::from(b) } else { HIDDEN })
        .collect()
}

/// True when every letter of `target` is in `known`
#[must_use]
pub fn is_revealed(target: &Word, known: &TriedLetters) -> bool {
    target.letter_mask() & !known.mask() == 0
}
