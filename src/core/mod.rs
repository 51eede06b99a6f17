//! Core domain types for hangman
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear invariants.

pub mod letters;
mod pattern;
mod reveal;
mod word;

pub use letters::TriedLetters;
pub use pattern::{Pattern, PatternError};
pub use reveal::{HIDDEN, is_revealed, reveal};
pub use word::{Word, WordError};
