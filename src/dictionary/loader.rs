//! Word list loading utilities
//!
//! Word sources are ISO-8859-1 text, one word per line.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Read a file as ISO-8859-1
///
/// Every byte maps to exactly one `char`, so decoding never fails. Accented
/// letters come through as non-ASCII chars and are rejected later by `Word`.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
pub fn read_latin1<P: AsRef<Path>>(path: P) -> io::Result<String> {
    Ok(fs::read(path)?.into_iter().map(char::from).collect())
}

/// Parse word-list text
///
/// Surrounding whitespace is trimmed. Lines that end up empty, hold several
/// words, or contain anything outside `a..=z` are skipped.
///
/// # Examples
/// ```
/// use pendu::core::Word;
/// use pendu::dictionary::loader::parse_words;
///
/// let words = parse_words("bonjour\n\n  maison \npomme de terre\nÉcole\n");
/// let texts: Vec<&str> = words.iter().map(Word::text).collect();
/// assert_eq!(texts, ["bonjour", "maison"]);
/// ```
#[must_use]
pub fn parse_words(text: &str) -> Vec<Word> {
    text.lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                let word = Word::new(trimmed);
                if word.is_err() {
                    log::trace!("skipping dictionary line {trimmed:?}");
                }
                word.ok()
            }
        })
        .collect()
}

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    read_latin1(path).map(|text| parse_words(&text))
}

/// Convert a string slice to a Word vector, skipping invalid entries
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
