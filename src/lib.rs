//! Strictly Hangman - a terminal hangman game
//!
//! The game core is a small state machine: a validated phrase, two
//! disjoint sets of guessed letters, and an outcome derived from them.
//! Everything around it (phrase sources, configuration, the prompt loop)
//! feeds it validated strings and prints what it reports.
//!
//! # Architecture
//!
//! - **Games**: the hangman state machine with contracts and invariants
//! - **Phrase source**: fixed phrases and random word-list picks
//! - **Config**: TOML configuration with command-line overrides
//! - **Console**: synchronous prompt/render driver
//!
//! # Example
//!
//! ```
//! use strictly_hangman::{GameState, Outcome, Phrase};
//!
//! let mut game = GameState::new(Phrase::parse("Cat").unwrap());
//! assert_eq!(game.render_mask(), "___");
//! game.apply_guess("c").unwrap();
//! assert_eq!(game.render_mask(), "C__");
//! assert_eq!(game.apply_guess("cat"), Ok(Outcome::Won));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod console;
mod games;
mod phrase_source;

// Crate-level exports - Configuration
pub use config::{ConfigError, HangmanConfig, PlayerMode};

// Crate-level exports - Console driver
pub use console::render::{banner, board};
pub use console::{Console, SessionEnd};

// Crate-level exports - Phrase sources
pub use phrase_source::{
    DEFAULT_PHRASE, PhraseSource, PhraseSourceError, RejectedLine, WordList, capitalize,
};

// Crate-level exports - Game types (hangman)
pub use games::hangman::{
    BoundedMissesInvariant, Contract, DisjointGuessesInvariant, GameNotOver, GameState, Guess,
    GuessContract, GuessError, GuessSet, GuessesMonotonic, HangmanInvariants, Invariant,
    InvariantSet, InvariantViolation, LegalGuess, Letter, LetterUnguessed, Outcome,
    OutcomeConsistentInvariant, PLACEHOLDER, Phrase, PhraseError, visual_for,
};

/// Pure rule functions for hangman.
pub use games::hangman::rules;
