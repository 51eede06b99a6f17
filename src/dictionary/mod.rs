//! Dictionary of candidate words
//!
//! The dictionary is loaded once at startup and learns at most one new word
//! per round. When it was loaded from a file, learned words are appended to
//! that file as well.

pub mod loader;

use crate::core::{Word, WordError};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Default minimum length of a word picked or learned
pub const DEFAULT_MIN_LENGTH: usize = 6;

/// Errors raised by the dictionary store
#[derive(Debug)]
pub enum DictionaryError {
    Io { path: PathBuf, source: io::Error },
    Empty { min_length: usize },
    TooShort { word: String, min_length: usize },
    Word(WordError),
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Cannot access dictionary '{}': {source}", path.display())
            }
            Self::Empty { min_length } => {
                write!(f, "Dictionary has no word of at least {min_length} letters")
            }
            Self::TooShort { word, min_length } => {
                write!(f, "'{word}' is shorter than {min_length} letters")
            }
            Self::Word(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Word(e) => Some(e),
            _ => None,
        }
    }
}

impl From<WordError> for DictionaryError {
    fn from(e: WordError) -> Self {
        Self::Word(e)
    }
}

/// Word list with an optional backing file
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    known: FxHashSet<Word>,
    path: Option<PathBuf>,
    min_length: usize,
}

impl Dictionary {
    /// Build an in-memory dictionary
    ///
    /// Learned words are kept in memory only.
    #[must_use]
    pub fn from_words(words: Vec<Word>) -> Self {
        let known = words.iter().cloned().collect();
        Self {
            words,
            known,
            path: None,
            min_length: DEFAULT_MIN_LENGTH,
        }
    }

    /// Build an in-memory dictionary from word-list text
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::from_words(loader::parse_words(text))
    }

    /// Load a dictionary from a word-list file
    ///
    /// Learned words will be appended to the same file.
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Io` if the file cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let words = loader::load_from_file(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("loaded {} words from {}", words.len(), path.display());

        let mut dictionary = Self::from_words(words);
        dictionary.path = Some(path.to_path_buf());
        Ok(dictionary)
    }

    /// Set the minimum length for picked and learned words
    #[must_use]
    pub const fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    #[must_use]
    pub const fn min_length(&self) -> usize {
        self.min_length
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.known.contains(word)
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Words long enough to be picked
    #[must_use]
    pub fn eligible(&self) -> Vec<&Word> {
        self.words
            .iter()
            .filter(|w| w.len() >= self.min_length)
            .collect()
    }

    /// Pick a word of at least `min_length` letters uniformly at random
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Empty` if no word is long enough.
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&Word, DictionaryError> {
        self.eligible()
            .choose(rng)
            .copied()
            .ok_or(DictionaryError::Empty {
                min_length: self.min_length,
            })
    }

    /// Add a word to the dictionary and its backing file
    ///
    /// Returns `Ok(false)` and changes nothing if the word is already known.
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::TooShort` for words under the minimum length,
    /// or `DictionaryError::Io` if the backing file cannot be rewritten.
    pub fn append(&mut self, word: Word) -> Result<bool, DictionaryError> {
        if word.len() < self.min_length {
            return Err(DictionaryError::TooShort {
                word: word.text().to_string(),
                min_length: self.min_length,
            });
        }
        if self.contains(&word) {
            log::debug!("'{word}' already in dictionary");
            return Ok(false);
        }

        if let Some(path) = &self.path {
            append_line(path, word.text()).map_err(|source| DictionaryError::Io {
                path: path.clone(),
                source,
            })?;
        }

        log::info!("learned '{word}'");
        self.known.insert(word.clone());
        self.words.push(word);
        Ok(true)
    }
}

/// Rewrite `path` with one more line at the end
fn append_line(path: &Path, line: &str) -> io::Result<()> {
    let mut content = fs::read(path)?;
    if content.last().is_some_and(|&b| b != b'\n') {
        content.push(b'\n');
    }
    content.extend_from_slice(line.as_bytes());
    content.push(b'\n');
    fs::write(path, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("pendu-{name}-{}.txt", std::process::id()))
    }

    #[test]
    fn from_text_filters_lines() {
        let dict = Dictionary::from_text("bonjour\nÉcole\n\noranges  \n");
        assert_eq!(dict.len(), 2);
        assert!(dict.path().is_none());
    }

    #[test]
    fn pick_random_respects_min_length() {
        let dict = Dictionary::from_text("chat\nchien\nbonjour\nmaisons\n");
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let word = dict.pick_random(&mut rng).unwrap();
            assert!(word.len() >= DEFAULT_MIN_LENGTH);
        }
    }

    #[test]
    fn pick_random_fails_fast_without_long_words() {
        let dict = Dictionary::from_text("chat\nchien\n");
        let mut rng = StdRng::seed_from_u64(1);

        let err = dict.pick_random(&mut rng).unwrap_err();
        assert!(matches!(err, DictionaryError::Empty { min_length: 6 }));
    }

    #[test]
    fn pick_random_on_empty_dictionary() {
        let dict = Dictionary::from_words(Vec::new());
        let mut rng = StdRng::seed_from_u64(1);
        assert!(dict.pick_random(&mut rng).is_err());
    }

    #[test]
    fn with_min_length_changes_eligibility() {
        let dict = Dictionary::from_text("chat\nchien\n").with_min_length(5);
        assert_eq!(dict.eligible().len(), 1);
        assert_eq!(dict.min_length(), 5);
    }

    #[test]
    fn append_adds_word_once() {
        let mut dict = Dictionary::from_text("bonjour\ncherche\n");
        let word = Word::new("xyzzyx").unwrap();

        assert!(dict.append(word.clone()).unwrap());
        assert_eq!(dict.len(), 3);
        assert!(dict.contains(&word));

        assert!(!dict.append(word.clone()).unwrap());
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.words().iter().filter(|w| **w == word).count(), 1);
    }

    #[test]
    fn append_rejects_short_words() {
        let mut dict = Dictionary::from_text("bonjour\n");
        let err = dict.append(Word::new("chat").unwrap()).unwrap_err();
        assert!(matches!(err, DictionaryError::TooShort { .. }));
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = Dictionary::load("/nonexistent/pendu/dictionnaire.txt").unwrap_err();
        assert!(matches!(err, DictionaryError::Io { .. }));
    }

    #[test]
    fn append_writes_backing_file() {
        let path = temp_path("append");
        fs::write(&path, "bonjour\ncherche").unwrap();

        let mut dict = Dictionary::load(&path).unwrap();
        assert_eq!(dict.len(), 2);
        assert!(dict.append(Word::new("xyzzyx").unwrap()).unwrap());
        assert!(!dict.append(Word::new("xyzzyx").unwrap()).unwrap());

        let content = fs::read_to_string(&path).unwrap();
        let reloaded = Dictionary::load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(content, "bonjour\ncherche\nxyzzyx\n");
        assert_eq!(reloaded.len(), 3);
    }
}
