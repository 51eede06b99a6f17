//! Pendu
//!
//! Two-player hangman. The player guesses a word picked by the computer, and
//! the computer guesses the player's word by ranking letters by frequency
//! among the dictionary words still consistent with its answers.
//!
//! # Quick Start
//!
//! ```rust
//! use pendu::core::Word;
//! use pendu::dictionary::Dictionary;
//! use pendu::solver::{GuessEngine, KnownWord};
//!
//! let dictionary = Dictionary::from_text("bonjour\ncherche\noranges\n");
//! let engine = GuessEngine::new(dictionary.words(), 7, 7).unwrap();
//!
//! let mut oracle = KnownWord::new(Word::new("cherche").unwrap());
//! let report = engine.run(&mut oracle).unwrap();
//! println!("Found {} with {} errors", report.pattern, report.errors);
//! ```

// Core domain types
pub mod core;

// Word list storage
pub mod dictionary;

// Guessing engine
pub mod solver;

// Game settings
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
