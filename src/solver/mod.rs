//! Letter-guessing solver
//!
//! Candidate filtering, letter ranking and the round engine that plays the
//! guessing side against an [`Oracle`].

mod engine;
pub mod filter;
mod oracle;
pub mod ranking;

pub use engine::{
    DEFAULT_MAX_ERRORS, EngineError, GuessEngine, Learned, RoundReport, RoundStatus, Turn,
    learn_from_loss,
};
pub use filter::filter_candidates;
pub use oracle::{KnownWord, Oracle};
pub use ranking::rank_letters;
