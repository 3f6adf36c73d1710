//! First-class guess types for hangman.
//!
//! A raw line of input is classified into a [`Guess`] before anything
//! touches game state, so rejection never needs a rollback.

use super::rules::is_full_phrase_match;
use super::{Letter, Phrase};
use tracing::{debug, instrument};

/// A classified guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guess {
    /// A single letter.
    Letter(Letter),
    /// The whole phrase, lowercased.
    Phrase(String),
}

impl Guess {
    /// Classifies raw input against the phrase.
    ///
    /// The input is lowercased first. A full-phrase match wins over the
    /// single-letter rule, so a one-letter phrase guessed as that letter
    /// counts as a phrase guess.
    ///
    /// # Errors
    ///
    /// Returns [`GuessError::InvalidGuess`] when the input is neither the
    /// phrase nor exactly one ASCII letter.
    #[instrument(skip_all, fields(len = raw.len()))]
    pub fn classify(phrase: &Phrase, raw: &str) -> Result<Self, GuessError> {
        let normalized = raw.to_lowercase();

        if is_full_phrase_match(phrase, &normalized) {
            debug!("Full-phrase match");
            return Ok(Guess::Phrase(normalized));
        }

        let mut chars = normalized.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Letter::parse(c)
                .map(Guess::Letter)
                .ok_or(GuessError::InvalidGuess),
            _ => Err(GuessError::InvalidGuess),
        }
    }

    /// Returns the letter for a single-letter guess.
    pub fn letter(&self) -> Option<Letter> {
        match self {
            Guess::Letter(letter) => Some(*letter),
            Guess::Phrase(_) => None,
        }
    }
}

impl std::fmt::Display for Guess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Guess::Letter(letter) => write!(f, "letter '{}'", letter),
            Guess::Phrase(_) => write!(f, "full phrase"),
        }
    }
}

/// Why a guess was rejected. State is never changed by a rejected guess.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GuessError {
    /// Not a single letter and not the phrase.
    #[display("Guess must be 1 letter")]
    InvalidGuess,

    /// The letter is already in the correct or incorrect set.
    #[display("Letter has already been guessed")]
    AlreadyGuessed(Letter),

    /// The game reached Won or Lost.
    #[display("Game is already over")]
    GameOver,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for GuessError {}
