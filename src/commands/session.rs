//! A full game: rounds in turn, scores, and "another one?"

use super::computer::play_computer_round;
use super::player::play_player_round;
use super::prompt::{Console, PromptError, is_closed};
use crate::config::GameConfig;
use crate::dictionary::Dictionary;
use crate::output::format_scores;
use anyhow::Result;
use rand::Rng;
use std::io::{BufRead, Write};

/// Points won by each side
///
/// Passed into every round pair and handed back updated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub computer: u32,
    pub player: u32,
}

impl Scoreboard {
    /// Add a point to `side` if it won its round
    #[must_use]
    pub fn record(self, side: Side, won: bool) -> Self {
        let point = u32::from(won);
        match side {
            Side::Computer => Self {
                computer: self.computer + point,
                ..self
            },
            Side::Player => Self {
                player: self.player + point,
                ..self
            },
        }
    }
}

/// Who is guessing in a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Computer,
    Player,
}

/// Which rounds a session plays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    /// One round each, in an order drawn at the start of the session
    Alternate,
    /// Only the computer guesses
    ComputerGuesses,
    /// Only the player guesses
    PlayerGuesses,
}

impl SessionMode {
    /// Rounds played on each pass, in order
    fn sides<G: Rng + ?Sized>(self, rng: &mut G) -> Vec<Side> {
        match self {
            Self::Alternate if rng.random_bool(0.5) => vec![Side::Computer, Side::Player],
            Self::Alternate => vec![Side::Player, Side::Computer],
            Self::ComputerGuesses => vec![Side::Computer],
            Self::PlayerGuesses => vec![Side::Player],
        }
    }
}

/// Play one pass of rounds, adding each result to `scores` as it ends
///
/// A round that fails leaves the points of the rounds before it in place.
///
/// # Errors
///
/// Returns the first error raised by a round.
pub fn play_pass<R: BufRead, W: Write, G: Rng + ?Sized>(
    console: &mut Console<R, W>,
    dictionary: &mut Dictionary,
    config: &GameConfig,
    sides: &[Side],
    rng: &mut G,
    scores: &mut Scoreboard,
) -> Result<()> {
    for &side in sides {
        let won = match side {
            Side::Computer => play_computer_round(console, dictionary, config)?,
            Side::Player => play_player_round(console, dictionary, config, rng)?,
        };
        *scores = scores.record(side, won);
    }
    Ok(())
}

/// Play rounds until the player stops or the input closes
///
/// # Errors
///
/// Returns any round or console error other than closed input.
pub fn run_session<R: BufRead, W: Write, G: Rng + ?Sized>(
    console: &mut Console<R, W>,
    dictionary: &mut Dictionary,
    config: &GameConfig,
    mode: SessionMode,
    rng: &mut G,
) -> Result<Scoreboard> {
    let sides = mode.sides(rng);
    let mut scores = Scoreboard::default();

    loop {
        match play_pass(console, dictionary, config, &sides, rng, &mut scores) {
            Ok(()) => {}
            Err(e) if is_closed(&e) => {
                log::info!("input closed, ending session");
                break;
            }
            Err(e) => return Err(e),
        }

        for line in format_scores(&scores) {
            console.say(line)?;
        }
        match console.ask_another() {
            Ok(true) => {}
            Ok(false) => break,
            Err(PromptError::Closed) => {
                log::info!("input closed, ending session");
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(scores)
}
