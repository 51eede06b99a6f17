//! Main guessing engine
//!
//! Plays the guessing side of a round: filter the dictionary, rank letters,
//! propose the best untried one, and apply the answer to the pattern until
//! the word is found or the round is lost.

use super::filter::filter_candidates;
use super::oracle::Oracle;
use super::ranking::rank_letters;
use crate::core::{Pattern, PatternError, TriedLetters, Word};
use crate::dictionary::{Dictionary, DictionaryError};
use std::convert::Infallible;
use std::fmt;

/// Default number of wrong letters allowed in a round
pub const DEFAULT_MAX_ERRORS: usize = 7;

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    Active,
    Won,
    /// No dictionary word fits the answers given so far
    LostNoCandidates,
    /// Too many letters were absent from the word
    LostErrorBudget,
}

impl RoundStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Active)
    }

    #[must_use]
    pub const fn is_lost(self) -> bool {
        matches!(self, Self::LostNoCandidates | Self::LostErrorBudget)
    }
}

/// One proposed letter and the answer it got
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub letter: u8,
    pub positions: Vec<usize>,
    /// Candidates left when the letter was chosen
    pub candidates: usize,
}

impl Turn {
    #[must_use]
    pub fn is_hit(&self) -> bool {
        !self.positions.is_empty()
    }
}

/// Final state of a finished (or abandoned) round
#[derive(Debug, Clone)]
pub struct RoundReport {
    pub status: RoundStatus,
    pub pattern: Pattern,
    pub tried: TriedLetters,
    pub errors: usize,
    pub max_errors: usize,
    pub turns: Vec<Turn>,
}

impl RoundReport {
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.status == RoundStatus::Won
    }

    /// The word found by the engine, if the round was won
    #[must_use]
    pub fn word(&self) -> Option<Word> {
        self.pattern.to_word()
    }
}

/// Errors raised while playing a round
#[derive(Debug)]
pub enum EngineError<E = Infallible> {
    /// A round was started for a zero-length word
    EmptyWord,
    /// The oracle answered with positions that cannot be applied
    Pattern(PatternError),
    /// The dictionary could not learn the revealed word
    Dictionary(DictionaryError),
    /// The oracle failed to answer
    Oracle(E),
}

impl<E: fmt::Display> fmt::Display for EngineError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWord => write!(f, "Cannot guess a word of length 0"),
            Self::Pattern(e) => write!(f, "Inconsistent answer: {e}"),
            Self::Dictionary(e) => write!(f, "{e}"),
            Self::Oracle(e) => write!(f, "{e}"),
        }
    }
}

impl<E> std::error::Error for EngineError<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EmptyWord => None,
            Self::Pattern(e) => Some(e),
            Self::Dictionary(e) => Some(e),
            Self::Oracle(e) => Some(e),
        }
    }
}

impl<E> From<PatternError> for EngineError<E> {
    fn from(e: PatternError) -> Self {
        Self::Pattern(e)
    }
}

impl<E> From<DictionaryError> for EngineError<E> {
    fn from(e: DictionaryError) -> Self {
        Self::Dictionary(e)
    }
}

/// Letter-guessing engine for a single round
///
/// The engine borrows the dictionary's words for the whole round, so the
/// dictionary cannot change until the round is over.
pub struct GuessEngine<'d> {
    words: &'d [Word],
    pattern: Pattern,
    tried: TriedLetters,
    errors: usize,
    max_errors: usize,
    status: RoundStatus,
    turns: Vec<Turn>,
}

impl<'d> GuessEngine<'d> {
    /// Start a round for a hidden word of `len` letters
    ///
    /// A `max_errors` of zero starts the round already lost.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::EmptyWord` if `len` is zero.
    pub fn new(words: &'d [Word], len: usize, max_errors: usize) -> Result<Self, EngineError> {
        if len == 0 {
            return Err(EngineError::EmptyWord);
        }

        let status = if max_errors == 0 {
            RoundStatus::LostErrorBudget
        } else {
            RoundStatus::Active
        };

        Ok(Self {
            words,
            pattern: Pattern::hidden(len),
            tried: TriedLetters::new(),
            errors: 0,
            max_errors,
            status,
            turns: Vec::new(),
        })
    }

    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    #[must_use]
    pub const fn tried(&self) -> &TriedLetters {
        &self.tried
    }

    #[must_use]
    pub const fn errors(&self) -> usize {
        self.errors
    }

    #[must_use]
    pub const fn max_errors(&self) -> usize {
        self.max_errors
    }

    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Dictionary words still consistent with the round so far
    #[must_use]
    pub fn candidates(&self) -> Vec<&'d Word> {
        filter_candidates(self.words, &self.pattern, &self.tried)
    }

    /// Best untried letter for the given candidates
    fn choose_letter(&self, candidates: &[&Word]) -> Option<u8> {
        rank_letters(candidates.iter().copied(), &self.pattern)
            .into_iter()
            .find(|&l| !self.tried.contains(l))
    }

    /// Propose one letter and apply the oracle's answer
    ///
    /// Does nothing once the round is over. Returns the status after the
    /// turn.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Oracle` if the oracle fails, or
    /// `EngineError::Pattern` if its positions are out of range or clash with
    /// revealed letters. The round state is unchanged in both cases.
    pub fn step<O: Oracle>(&mut self, oracle: &mut O) -> Result<RoundStatus, EngineError<O::Error>> {
        if self.status.is_terminal() {
            return Ok(self.status);
        }

        let candidates = self.candidates();
        let letter = if candidates.is_empty() {
            None
        } else {
            self.choose_letter(&candidates)
        };
        let Some(letter) = letter else {
            log::debug!("no candidates left for {}", self.pattern);
            self.status = RoundStatus::LostNoCandidates;
            return Ok(self.status);
        };

        log::debug!(
            "proposing '{}' for {} ({} candidates)",
            letter as char,
            self.pattern,
            candidates.len()
        );

        let mut positions = oracle
            .positions_of(letter, &self.pattern)
            .map_err(EngineError::Oracle)?;
        positions.sort_unstable();
        positions.dedup();
        self.pattern.reveal(letter, &positions)?;

        self.tried.insert(letter);
        if positions.is_empty() {
            self.errors += 1;
        }
        self.turns.push(Turn {
            letter,
            positions,
            candidates: candidates.len(),
        });

        if self.pattern.is_complete() {
            self.status = RoundStatus::Won;
        } else if self.errors >= self.max_errors {
            self.status = RoundStatus::LostErrorBudget;
        }
        Ok(self.status)
    }

    /// Play until the round is over
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by [`GuessEngine::step`].
    ///
    /// # Examples
    /// ```
    /// use pendu::core::Word;
    /// use pendu::dictionary::Dictionary;
    /// use pendu::solver::{GuessEngine, KnownWord, RoundStatus};
    ///
    /// let dictionary = Dictionary::from_text("bonjour\ncherche\noranges\n");
    /// let mut oracle = KnownWord::new(Word::new("bonjour").unwrap());
    ///
    /// let engine = GuessEngine::new(dictionary.words(), 7, 7).unwrap();
    /// let report = engine.run(&mut oracle).unwrap();
    /// assert_eq!(report.status, RoundStatus::Won);
    /// assert_eq!(report.word().unwrap().text(), "bonjour");
    /// ```
    pub fn run<O: Oracle>(mut self, oracle: &mut O) -> Result<RoundReport, EngineError<O::Error>> {
        while !self.step(oracle)?.is_terminal() {}
        Ok(self.into_report())
    }

    #[must_use]
    pub fn into_report(self) -> RoundReport {
        RoundReport {
            status: self.status,
            pattern: self.pattern,
            tried: self.tried,
            errors: self.errors,
            max_errors: self.max_errors,
            turns: self.turns,
        }
    }
}

/// What the dictionary did with a word revealed after a lost round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Learned {
    Added(Word),
    AlreadyKnown(Word),
}

/// Ask for the hidden word after a loss and add it to the dictionary
///
/// Returns `None` for a won round; the oracle is not consulted then.
///
/// # Errors
///
/// Returns `EngineError::Oracle` if the word cannot be obtained, or
/// `EngineError::Dictionary` if it cannot be stored.
pub fn learn_from_loss<O: Oracle>(
    dictionary: &mut Dictionary,
    oracle: &mut O,
    report: &RoundReport,
) -> Result<Option<Learned>, EngineError<O::Error>> {
    if !report.status.is_lost() {
        return Ok(None);
    }

    let word = oracle.reveal_word().map_err(EngineError::Oracle)?;
    if word.len() != report.pattern.len() {
        log::warn!(
            "revealed word '{word}' has {} letters, round was played for {}",
            word.len(),
            report.pattern.len()
        );
    }

    let learned = if dictionary.append(word.clone())? {
        Learned::Added(word)
    } else {
        Learned::AlreadyKnown(word)
    };
    Ok(Some(learned))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::loader::words_from_slice;
    use crate::solver::KnownWord;

    fn setup_dictionary() -> Vec<Word> {
        words_from_slice(&["bonjour", "cherche", "oranges", "bonsoir", "jardins"])
    }

    fn known(word: &str) -> KnownWord {
        KnownWord::new(Word::new(word).unwrap())
    }

    /// Oracle replaying scripted answers
    struct Scripted(Vec<Vec<usize>>);

    impl Oracle for Scripted {
        type Error = Infallible;

        fn positions_of(&mut self, _letter: u8, _pattern: &Pattern) -> Result<Vec<usize>, Infallible> {
            Ok(if self.0.is_empty() { Vec::new() } else { self.0.remove(0) })
        }

        fn reveal_word(&mut self) -> Result<Word, Infallible> {
            Ok(Word::new("xyzzyx").unwrap())
        }
    }

    #[test]
    fn new_rejects_zero_length() {
        let words = setup_dictionary();
        assert!(matches!(
            GuessEngine::new(&words, 0, 7),
            Err(EngineError::EmptyWord)
        ));
    }

    #[test]
    fn zero_budget_starts_lost() {
        let words = setup_dictionary();
        let engine = GuessEngine::new(&words, 7, 0).unwrap();
        assert_eq!(engine.status(), RoundStatus::LostErrorBudget);
    }

    #[test]
    fn first_guess_uses_fallback_order() {
        let words = setup_dictionary();
        let mut engine = GuessEngine::new(&words, 7, 7).unwrap();
        let mut oracle = known("bonjour");

        engine.step(&mut oracle).unwrap();

        assert_eq!(engine.turns()[0].letter, b'e');
        assert_eq!(engine.errors(), 1);
        assert!(engine.tried().contains(b'e'));
        assert_eq!(engine.status(), RoundStatus::Active);
    }

    #[test]
    fn miss_prunes_words_with_bad_letter() {
        let words = setup_dictionary();
        let mut engine = GuessEngine::new(&words, 7, 7).unwrap();
        let mut oracle = known("bonjour");

        engine.step(&mut oracle).unwrap();

        let remaining: Vec<&str> = engine.candidates().into_iter().map(Word::text).collect();
        assert_eq!(remaining, ["bonjour", "bonsoir", "jardins"]);
    }

    #[test]
    fn solves_bonjour() {
        let words = setup_dictionary();
        let engine = GuessEngine::new(&words, 7, 7).unwrap();
        let mut oracle = known("bonjour");

        let report = engine.run(&mut oracle).unwrap();

        assert!(report.is_won());
        assert_eq!(report.word().unwrap().text(), "bonjour");
        assert!(report.errors < report.max_errors);
        assert_eq!(report.tried.len(), report.turns.len());
    }

    #[test]
    fn hit_reveals_every_position() {
        let words = setup_dictionary();
        let mut engine = GuessEngine::new(&words, 7, 7).unwrap();
        let mut oracle = known("cherche");

        engine.step(&mut oracle).unwrap();

        assert_eq!(engine.pattern().to_string(), "--e---e");
        assert_eq!(engine.errors(), 0);
        assert!(engine.turns()[0].is_hit());
    }

    #[test]
    fn unknown_word_ends_without_candidates() {
        let words = setup_dictionary();
        let engine = GuessEngine::new(&words, 7, 7).unwrap();
        let mut oracle = known("voiture");

        let report = engine.run(&mut oracle).unwrap();
        assert_eq!(report.status, RoundStatus::LostNoCandidates);
        assert!(report.pattern.hidden_count() > 0);
    }

    #[test]
    fn no_word_of_that_length_ends_immediately() {
        let words = setup_dictionary();
        let engine = GuessEngine::new(&words, 12, 7).unwrap();
        let mut oracle = Scripted(Vec::new());

        let report = engine.run(&mut oracle).unwrap();
        assert_eq!(report.status, RoundStatus::LostNoCandidates);
        assert!(report.turns.is_empty());
    }

    #[test]
    fn error_budget_ends_round() {
        let words = words_from_slice(&[
            "aaaaab", "aaaaac", "aaaaad", "aaaaaf", "aaaaag", "aaaaah",
        ]);
        let engine = GuessEngine::new(&words, 6, 2).unwrap();
        // Claim every letter is absent
        let mut oracle = Scripted(Vec::new());

        let report = engine.run(&mut oracle).unwrap();

        assert_eq!(report.status, RoundStatus::LostErrorBudget);
        assert_eq!(report.errors, 2);
        assert_eq!(report.turns.len(), 2);
    }

    #[test]
    fn out_of_range_answer_is_rejected_without_side_effects() {
        let words = setup_dictionary();
        let mut engine = GuessEngine::new(&words, 7, 7).unwrap();
        let mut oracle = Scripted(vec![vec![9]]);

        let err = engine.step(&mut oracle).unwrap_err();

        assert!(matches!(err, EngineError::Pattern(PatternError::OutOfRange { .. })));
        assert!(engine.tried().is_empty());
        assert!(engine.turns().is_empty());
    }

    #[test]
    fn conflicting_answer_is_rejected_without_side_effects() {
        let words = setup_dictionary();
        let mut engine = GuessEngine::new(&words, 7, 7).unwrap();
        // e at position 3, then the next letter claimed for the same slot
        let mut oracle = Scripted(vec![vec![2], vec![2]]);

        engine.step(&mut oracle).unwrap();
        let err = engine.step(&mut oracle).unwrap_err();

        assert!(matches!(
            err,
            EngineError::Pattern(PatternError::Conflict { position: 2, known: b'e', .. })
        ));
        assert_eq!(engine.tried().as_slice(), b"e");
        assert_eq!(engine.turns().len(), 1);
        assert_eq!(engine.pattern().to_string(), "--e----");
    }

    #[test]
    fn step_after_end_is_noop() {
        let words = setup_dictionary();
        let mut engine = GuessEngine::new(&words, 12, 7).unwrap();
        let mut oracle = Scripted(Vec::new());

        assert_eq!(engine.step(&mut oracle).unwrap(), RoundStatus::LostNoCandidates);
        assert_eq!(engine.step(&mut oracle).unwrap(), RoundStatus::LostNoCandidates);
        assert!(engine.turns().is_empty());
    }

    #[test]
    fn every_dictionary_word_terminates_within_bound() {
        let words = setup_dictionary();
        for target in &words {
            let engine = GuessEngine::new(&words, target.len(), DEFAULT_MAX_ERRORS).unwrap();
            let mut oracle = KnownWord::new(target.clone());
            let report = engine.run(&mut oracle).unwrap();

            assert!(report.turns.len() <= target.len() + DEFAULT_MAX_ERRORS);
            assert!(report.is_won(), "failed on {target}");
        }
    }

    #[test]
    fn learn_from_loss_adds_revealed_word() {
        let mut dictionary = Dictionary::from_text("bonjour\ncherche\n");
        let report = GuessEngine::new(dictionary.words(), 12, 7)
            .unwrap()
            .run(&mut Scripted(Vec::new()))
            .unwrap();

        let learned = learn_from_loss(&mut dictionary, &mut Scripted(Vec::new()), &report).unwrap();

        assert_eq!(learned, Some(Learned::Added(Word::new("xyzzyx").unwrap())));
        assert_eq!(dictionary.len(), 3);
    }

    #[test]
    fn learn_from_loss_skips_known_word() {
        let mut dictionary = Dictionary::from_text("bonjour\nxyzzyx\n");
        let report = GuessEngine::new(dictionary.words(), 12, 7)
            .unwrap()
            .run(&mut Scripted(Vec::new()))
            .unwrap();

        let learned = learn_from_loss(&mut dictionary, &mut Scripted(Vec::new()), &report).unwrap();

        assert!(matches!(learned, Some(Learned::AlreadyKnown(_))));
        assert_eq!(dictionary.len(), 2);
    }

    #[test]
    fn learn_from_loss_ignores_won_round() {
        let mut dictionary = Dictionary::from_text("bonjour\ncherche\n");
        let report = GuessEngine::new(dictionary.words(), 7, 7)
            .unwrap()
            .run(&mut known("bonjour"))
            .unwrap();

        let learned = learn_from_loss(&mut dictionary, &mut known("bonjour"), &report).unwrap();
        assert!(learned.is_none());
        assert_eq!(dictionary.len(), 2);
    }
}
