//! Command implementations

pub mod benchmark;
pub mod computer;
pub mod player;
pub mod prompt;
pub mod session;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use computer::play_computer_round;
pub use player::play_player_round;
pub use prompt::{Console, ConsoleOracle, PromptError};
pub use session::{Scoreboard, SessionMode, Side, run_session};
pub use solve::{SolveConfig, SolveResult, solve_word};
