//! Line-based prompts for the human player
//!
//! Every question is re-asked until the answer is well formed; malformed
//! input never leaves this module. Only I/O failures and end of input do.

use crate::core::letters::is_letter;
use crate::core::{Pattern, TriedLetters, Word, WordError};
use crate::solver::Oracle;
use std::fmt;
use std::io::{self, BufRead, Write};

/// Failure to get an answer at all
#[derive(Debug)]
pub enum PromptError {
    Io(io::Error),
    /// The input reached end of file
    Closed,
}

impl fmt::Display for PromptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Terminal I/O failed: {e}"),
            Self::Closed => write!(f, "Input closed"),
        }
    }
}

impl std::error::Error for PromptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Closed => None,
        }
    }
}

impl From<io::Error> for PromptError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Check whether an error chain ends in closed input
#[must_use]
pub fn is_closed(error: &anyhow::Error) -> bool {
    error
        .chain()
        .any(|e| matches!(e.downcast_ref::<PromptError>(), Some(PromptError::Closed)))
}

/// A malformed answer, shown to the player before asking again
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    NotANumber(String),
    TooShort { min_length: usize },
    PositionOutOfRange { len: usize },
    AlreadyRevealed { position: usize },
    InvalidWord,
    AlreadyTried(char),
    NotALetter,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber(s) => write!(f, "'{s}' is not a positive integer"),
            Self::TooShort { min_length } => {
                write!(f, "The word must have at least {min_length} letters")
            }
            Self::PositionOutOfRange { len } => {
                write!(f, "Positions must be between 1 and {len}")
            }
            Self::AlreadyRevealed { position } => {
                write!(f, "Position {position} is already revealed")
            }
            Self::InvalidWord => {
                write!(f, "The word must be made of unaccented lowercase letters")
            }
            Self::AlreadyTried(l) => write!(f, "Letter '{l}' was already proposed"),
            Self::NotALetter => {
                write!(f, "Propose a single unaccented lowercase letter")
            }
        }
    }
}

impl std::error::Error for InputError {}

/// Parse the announced length of the player's word
///
/// # Errors
///
/// Returns `InputError` for anything but an integer of at least `min_length`.
pub fn parse_size(input: &str, min_length: usize) -> Result<usize, InputError> {
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotANumber(input.to_string()));
    }
    let size: usize = input
        .parse()
        .map_err(|_| InputError::NotANumber(input.to_string()))?;
    if size < min_length {
        return Err(InputError::TooShort { min_length });
    }
    Ok(size)
}

/// Parse 1-based, whitespace-separated positions into sorted 0-based ones
///
/// A blank answer means the letter is not in the word.
///
/// # Errors
///
/// Returns `InputError` for non-numbers or positions outside `1..=len`.
pub fn parse_positions(input: &str, len: usize) -> Result<Vec<usize>, InputError> {
    let mut positions = input
        .split_whitespace()
        .map(|token| {
            if !token.bytes().all(|b| b.is_ascii_digit()) {
                return Err(InputError::NotANumber(token.to_string()));
            }
            let position: usize = token
                .parse()
                .map_err(|_| InputError::NotANumber(token.to_string()))?;
            if position == 0 || position > len {
                return Err(InputError::PositionOutOfRange { len });
            }
            Ok(position - 1)
        })
        .collect::<Result<Vec<_>, _>>()?;
    positions.sort_unstable();
    positions.dedup();
    Ok(positions)
}

/// Parse the word revealed by the player
///
/// # Errors
///
/// Returns `InputError` for words outside the alphabet or shorter than
/// `min_length`.
pub fn parse_word(input: &str, min_length: usize) -> Result<Word, InputError> {
    let word = Word::new(input).map_err(|e| match e {
        WordError::Empty | WordError::InvalidCharacters => InputError::InvalidWord,
    })?;
    if word.len() < min_length {
        return Err(InputError::TooShort { min_length });
    }
    Ok(word)
}

/// Parse a letter proposed by the player
///
/// # Errors
///
/// Returns `InputError` for letters already tried or anything that is not a
/// single letter of the alphabet.
pub fn parse_letter(input: &str, tried: &TriedLetters) -> Result<u8, InputError> {
    match input.as_bytes() {
        [b] if tried.contains(*b) => Err(InputError::AlreadyTried(char::from(*b))),
        [b] if is_letter(*b) => Ok(*b),
        _ => Err(InputError::NotALetter),
    }
}

/// Parse a yes/no answer; anything but a yes is a no
#[must_use]
pub fn parse_yes(input: &str) -> bool {
    matches!(input, "o" | "O" | "y" | "Y" | "oui" | "yes")
}

/// Question/answer channel to the human player
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a line
    ///
    /// # Errors
    ///
    /// Returns `PromptError::Io` if the output cannot be written.
    pub fn say(&mut self, line: impl fmt::Display) -> Result<(), PromptError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Ask one question and return the trimmed answer
    fn ask(&mut self, prompt: &str) -> Result<String, PromptError> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }
        Ok(line.trim().to_string())
    }

    /// Ask until `parse` accepts the answer
    fn ask_until<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, InputError>,
    ) -> Result<T, PromptError> {
        loop {
            let answer = self.ask(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    log::debug!("rejected answer {answer:?}: {e}");
                    self.say(e)?;
                }
            }
        }
    }

    /// Ask for the length of the player's word
    ///
    /// # Errors
    ///
    /// Returns `PromptError` if no answer can be read.
    pub fn ask_size(&mut self, min_length: usize) -> Result<usize, PromptError> {
        self.ask_until("Length of your word", |s| parse_size(s, min_length))
    }

    /// Ask where `letter` appears in the player's word
    ///
    /// # Errors
    ///
    /// Returns `PromptError` if no answer can be read.
    pub fn ask_positions(&mut self, letter: u8, pattern: &Pattern) -> Result<Vec<usize>, PromptError> {
        let prompt = format!(
            "{pattern}  positions of letter '{}' (blank if absent)",
            char::from(letter)
        );
        self.ask_until(&prompt, |s| {
            let positions = parse_positions(s, pattern.len())?;
            match positions.iter().find(|&&p| pattern.slot(p).is_some()) {
                Some(&p) => Err(InputError::AlreadyRevealed { position: p + 1 }),
                None => Ok(positions),
            }
        })
    }

    /// Ask the player to reveal their word
    ///
    /// # Errors
    ///
    /// Returns `PromptError` if no answer can be read.
    pub fn ask_word(&mut self, min_length: usize) -> Result<Word, PromptError> {
        self.ask_until("Your word", |s| parse_word(s, min_length))
    }

    /// Ask the player for a letter not yet tried
    ///
    /// # Errors
    ///
    /// Returns `PromptError` if no answer can be read.
    pub fn ask_letter(&mut self, tried: &TriedLetters) -> Result<u8, PromptError> {
        self.ask_until("Letter", |s| parse_letter(s, tried))
    }

    /// Ask whether to play again
    ///
    /// # Errors
    ///
    /// Returns `PromptError` if no answer can be read.
    pub fn ask_another(&mut self) -> Result<bool, PromptError> {
        Ok(parse_yes(&self.ask("Another one? (o/n)")?))
    }

    /// Give back the output, for inspection in tests
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Oracle answered by the human through a console
pub struct ConsoleOracle<'c, R, W> {
    console: &'c mut Console<R, W>,
    min_length: usize,
}

impl<'c, R: BufRead, W: Write> ConsoleOracle<'c, R, W> {
    pub fn new(console: &'c mut Console<R, W>, min_length: usize) -> Self {
        Self {
            console,
            min_length,
        }
    }

    pub fn console(&mut self) -> &mut Console<R, W> {
        self.console
    }
}

impl<R: BufRead, W: Write> Oracle for ConsoleOracle<'_, R, W> {
    type Error = PromptError;

    fn positions_of(&mut self, letter: u8, pattern: &Pattern) -> Result<Vec<usize>, PromptError> {
        self.console.ask_positions(letter, pattern)
    }

    fn reveal_word(&mut self) -> Result<Word, PromptError> {
        self.console.ask_word(self.min_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<&str>, Vec<u8>> {
        Console::new(Cursor::new(input), Vec::new())
    }

    fn output(console: Console<Cursor<&str>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn parse_size_accepts_long_enough() {
        assert_eq!(parse_size("7", 6), Ok(7));
        assert_eq!(parse_size("6", 6), Ok(6));
    }

    #[test]
    fn parse_size_rejects_bad_input() {
        assert_eq!(parse_size("5", 6), Err(InputError::TooShort { min_length: 6 }));
        assert!(matches!(parse_size("seven", 6), Err(InputError::NotANumber(_))));
        assert!(matches!(parse_size("-7", 6), Err(InputError::NotANumber(_))));
        assert!(matches!(parse_size("", 6), Err(InputError::NotANumber(_))));
        assert!(matches!(parse_size("+7", 6), Err(InputError::NotANumber(_))));
        assert!(matches!(parse_size("7.0", 6), Err(InputError::NotANumber(_))));
    }

    #[test]
    fn parse_positions_converts_to_zero_based() {
        assert_eq!(parse_positions("2 5", 7), Ok(vec![1, 4]));
        assert_eq!(parse_positions("  5   2 ", 7), Ok(vec![1, 4]));
        assert_eq!(parse_positions("3 3", 7), Ok(vec![2]));
    }

    #[test]
    fn parse_positions_blank_means_absent() {
        assert_eq!(parse_positions("", 7), Ok(vec![]));
        assert_eq!(parse_positions("   ", 7), Ok(vec![]));
    }

    #[test]
    fn parse_positions_rejects_out_of_range() {
        assert_eq!(
            parse_positions("0", 7),
            Err(InputError::PositionOutOfRange { len: 7 })
        );
        assert_eq!(
            parse_positions("1 8", 7),
            Err(InputError::PositionOutOfRange { len: 7 })
        );
        assert!(matches!(parse_positions("1 x", 7), Err(InputError::NotANumber(_))));
        assert!(matches!(parse_positions("+2", 7), Err(InputError::NotANumber(_))));
    }

    #[test]
    fn parse_word_validates_alphabet_and_length() {
        assert_eq!(parse_word("bonjour", 6).unwrap().text(), "bonjour");
        assert_eq!(parse_word("Bonjour", 6), Err(InputError::InvalidWord));
        assert_eq!(parse_word("", 6), Err(InputError::InvalidWord));
        assert_eq!(parse_word("chat", 6), Err(InputError::TooShort { min_length: 6 }));
    }

    #[test]
    fn parse_letter_checks_tried_then_alphabet() {
        let mut tried = TriedLetters::new();
        tried.insert(b'e');

        assert_eq!(parse_letter("a", &tried), Ok(b'a'));
        assert_eq!(parse_letter("e", &tried), Err(InputError::AlreadyTried('e')));
        assert_eq!(parse_letter("E", &tried), Err(InputError::NotALetter));
        assert_eq!(parse_letter("ab", &tried), Err(InputError::NotALetter));
        assert_eq!(parse_letter("é", &tried), Err(InputError::NotALetter));
        assert_eq!(parse_letter("", &tried), Err(InputError::NotALetter));
    }

    #[test]
    fn parse_yes_accepts_both_languages() {
        assert!(parse_yes("o"));
        assert!(parse_yes("O"));
        assert!(parse_yes("y"));
        assert!(!parse_yes("n"));
        assert!(!parse_yes(""));
    }

    #[test]
    fn ask_size_reprompts_until_valid() {
        let mut c = console("abc\n3\n8\n");
        assert_eq!(c.ask_size(6).unwrap(), 8);

        let out = output(c);
        assert!(out.contains("'abc' is not a positive integer"));
        assert!(out.contains("at least 6 letters"));
    }

    #[test]
    fn ask_positions_shows_pattern() {
        let mut c = console("9\n1 2\n");
        let mut pattern = Pattern::hidden(3);
        pattern.reveal(b'x', &[2]).unwrap();

        assert_eq!(c.ask_positions(b'o', &pattern).unwrap(), vec![0, 1]);

        let out = output(c);
        assert!(out.contains("--x  positions of letter 'o'"));
        assert!(out.contains("between 1 and 3"));
    }

    #[test]
    fn ask_positions_rejects_revealed_slot() {
        let mut c = console("3\n1\n");
        let mut pattern = Pattern::hidden(3);
        pattern.reveal(b'x', &[2]).unwrap();

        assert_eq!(c.ask_positions(b'o', &pattern).unwrap(), vec![0]);
        assert!(output(c).contains("Position 3 is already revealed"));
    }

    #[test]
    fn ask_letter_reprompts_on_repeat() {
        let mut tried = TriedLetters::new();
        tried.insert(b'e');
        let mut c = console("e\nA\ns\n");

        assert_eq!(c.ask_letter(&tried).unwrap(), b's');
    }

    #[test]
    fn closed_input_is_reported() {
        let mut c = console("abc\n");
        assert!(matches!(c.ask_size(6), Err(PromptError::Closed)));
    }

    #[test]
    fn is_closed_walks_the_chain() {
        let err = anyhow::Error::new(PromptError::Closed).context("computer round");
        assert!(is_closed(&err));
        assert!(!is_closed(&anyhow::anyhow!("other")));
    }

    #[test]
    fn console_oracle_asks_positions_and_word() {
        let mut c = console("2\nmaison\n");
        let mut oracle = ConsoleOracle::new(&mut c, 6);

        assert_eq!(oracle.positions_of(b'a', &Pattern::hidden(6)).unwrap(), vec![1]);
        assert_eq!(oracle.reveal_word().unwrap().text(), "maison");
    }
}
