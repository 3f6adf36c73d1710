//! The hangman game state machine.

use super::action::{Guess, GuessError};
use super::contracts::{Contract, GuessContract};
use super::phases::Outcome;
use super::rules::{self, MAX_MISSES};
use super::{GuessSet, Letter, Phrase};
use tracing::{debug, info, instrument};

/// Placeholder shown for an unrevealed letter.
pub const PLACEHOLDER: char = '_';

/// A single hangman game.
///
/// Owns its phrase and guess sets; nothing is shared between games.
/// Mutated once per accepted guess, frozen once the outcome is terminal.
#[derive(Debug, Clone)]
pub struct GameState {
    pub(super) phrase: Phrase,
    pub(super) guesses: GuessSet,
    pub(super) outcome: Outcome,
}

impl GameState {
    /// Starts a game for the given phrase.
    #[instrument(skip(phrase), fields(letters = phrase.letters().len()))]
    pub fn new(phrase: Phrase) -> Self {
        Self {
            phrase,
            guesses: GuessSet::new(),
            outcome: Outcome::InProgress,
        }
    }

    /// Applies one raw guess and returns the resulting outcome.
    ///
    /// A full-phrase match is checked first and wins outright, whatever the
    /// miss count. Otherwise the input must be one new letter, which lands
    /// in the correct or incorrect set before the outcome is re-evaluated.
    ///
    /// # Errors
    ///
    /// - [`GuessError::GameOver`] once the game is won or lost
    /// - [`GuessError::InvalidGuess`] for anything but one letter or the phrase
    /// - [`GuessError::AlreadyGuessed`] for a repeated letter
    ///
    /// A rejected guess leaves the state untouched.
    #[instrument(skip(self, raw), fields(misses = self.guesses.misses()))]
    pub fn apply_guess(&mut self, raw: &str) -> Result<Outcome, GuessError> {
        if self.outcome.is_terminal() {
            return Err(GuessError::GameOver);
        }

        let guess = Guess::classify(&self.phrase, raw)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        GuessContract::pre(self, &guess)?;

        match &guess {
            Guess::Phrase(text) => {
                for letter in text.chars().filter_map(Letter::parse) {
                    self.guesses.record_correct(letter);
                }
                self.outcome = Outcome::Won;
            }
            Guess::Letter(letter) => {
                if self.phrase.contains(*letter) {
                    self.guesses.record_correct(*letter);
                } else {
                    self.guesses.record_incorrect(*letter);
                }
                self.outcome = rules::evaluate(&self.phrase, &self.guesses);
            }
        }
        debug!(%guess, outcome = %self.outcome, misses = self.guesses.misses(), "Guess applied");

        #[cfg(debug_assertions)]
        GuessContract::post(&before, self)?;

        if self.outcome.is_terminal() {
            info!(outcome = %self.outcome, "Game finished");
        }

        Ok(self.outcome)
    }

    /// Renders the phrase with unguessed letters replaced by [`PLACEHOLDER`].
    ///
    /// Guessed letters keep their original case; spaces and punctuation are
    /// always shown.
    pub fn render_mask(&self) -> String {
        self.phrase
            .as_str()
            .chars()
            .map(|c| match Letter::parse(c) {
                Some(letter) if !self.guesses.correct().contains(&letter) => PLACEHOLDER,
                _ => c,
            })
            .collect()
    }

    /// Returns the phrase.
    pub fn phrase(&self) -> &Phrase {
        &self.phrase
    }

    /// Returns the guesses made so far.
    pub fn guesses(&self) -> &GuessSet {
        &self.guesses
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Number of wrong letter guesses.
    pub fn misses(&self) -> usize {
        self.guesses.misses()
    }

    /// Wrong guesses left before the game is lost.
    pub fn remaining_misses(&self) -> usize {
        MAX_MISSES.saturating_sub(self.misses())
    }
}
