//! Game settings
//!
//! Resolved from the command line in `main`, with the classic rules as
//! defaults.

use crate::dictionary::{DEFAULT_MIN_LENGTH, Dictionary, DictionaryError};
use crate::solver::DEFAULT_MAX_ERRORS;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

/// Word list used when none is given
pub const DEFAULT_DICTIONARY: &str = "dictionnaire.txt";

/// Settings shared by every round of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub dictionary_path: PathBuf,
    /// Wrong letters allowed per round
    pub max_errors: usize,
    /// Shortest word that can be picked, declared or learned
    pub min_length: usize,
    /// Fixed seed for reproducible word picks
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dictionary_path: PathBuf::from(DEFAULT_DICTIONARY),
            max_errors: DEFAULT_MAX_ERRORS,
            min_length: DEFAULT_MIN_LENGTH,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Random generator for word picks and turn order
    #[must_use]
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }

    /// Load the configured dictionary
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Io` if the word list cannot be read.
    pub fn load_dictionary(&self) -> Result<Dictionary, DictionaryError> {
        Ok(Dictionary::load(&self.dictionary_path)?.with_min_length(self.min_length))
    }
}
