//! Word solving command
//!
//! Plays the engine against a known word and returns the whole round.

use crate::core::Word;
use crate::dictionary::Dictionary;
use crate::solver::{DEFAULT_MAX_ERRORS, GuessEngine, KnownWord, RoundReport, RoundStatus};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_errors: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_errors: DEFAULT_MAX_ERRORS,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub target: String,
    /// Whether the target was in the dictionary at all
    pub in_dictionary: bool,
    pub report: RoundReport,
}

impl SolveResult {
    #[must_use]
    pub fn success(&self) -> bool {
        self.report.status == RoundStatus::Won
    }
}

/// Solve a specific word using the given dictionary
///
/// The dictionary is not modified, even when the word is unknown to it.
///
/// # Errors
///
/// Returns an error if the target word is not made of `a..=z` only.
pub fn solve_word(config: SolveConfig, dictionary: &Dictionary) -> Result<SolveResult, String> {
    let target = Word::new(config.target.as_str()).map_err(|e| format!("Invalid target word: {e}"))?;
    let in_dictionary = dictionary.contains(&target);

    let engine = GuessEngine::new(dictionary.words(), target.len(), config.max_errors)
        .map_err(|e| e.to_string())?;
    let mut oracle = KnownWord::new(target);
    let report = engine.run(&mut oracle).map_err(|e| e.to_string())?;

    Ok(SolveResult {
        target: config.target,
        in_dictionary,
        report,
    })
}
