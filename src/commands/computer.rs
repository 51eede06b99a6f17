//! Round where the computer guesses the player's word

use super::prompt::{Console, ConsoleOracle};
use crate::config::GameConfig;
use crate::dictionary::Dictionary;
use crate::solver::{GuessEngine, Learned, RoundStatus, learn_from_loss};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Play one round with the engine guessing and the player answering
///
/// On a loss the player is asked for their word, which the dictionary
/// learns once the round is over. Returns `true` if the computer won.
///
/// # Errors
///
/// Returns an error if the console fails or closes, or if a learned word
/// cannot be saved.
pub fn play_computer_round<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    dictionary: &mut Dictionary,
    config: &GameConfig,
) -> Result<bool> {
    console.say("The computer must guess the word you are thinking of")?;
    let size = console.ask_size(config.min_length)?;

    let report = {
        let mut engine = GuessEngine::new(dictionary.words(), size, config.max_errors)?;
        let mut oracle = ConsoleOracle::new(console, config.min_length);
        loop {
            let status = engine.step(&mut oracle).context("computer round")?;
            if status.is_terminal() {
                break;
            }
            oracle.console().say(format!(
                "The computer has made {} error(s)",
                engine.errors()
            ))?;
        }
        engine.into_report()
    };

    match report.status {
        RoundStatus::Won => {
            if let Some(word) = report.word() {
                console.say(format!("The computer found the word '{word}'"))?;
            }
            return Ok(true);
        }
        RoundStatus::LostNoCandidates => {
            console.say("No dictionary word matches, the computer gives up")?;
        }
        RoundStatus::LostErrorBudget => {
            console.say(format!(
                "The computer has made {} error(s)",
                report.errors
            ))?;
        }
        RoundStatus::Active => unreachable!("engine stopped while active"),
    }
    console.say("The computer did not find your word")?;

    let mut oracle = ConsoleOracle::new(console, config.min_length);
    let learned = learn_from_loss(dictionary, &mut oracle, &report).context("learning word")?;
    match learned {
        Some(Learned::Added(word)) => {
            console.say(format!("The word '{word}' was added to the dictionary"))?;
        }
        Some(Learned::AlreadyKnown(word)) => {
            console.say(format!("The word '{word}' is already in the dictionary"))?;
        }
        None => {}
    }
    Ok(false)
}
