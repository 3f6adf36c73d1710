//! Core domain types for hangman.

use super::rules::PUNCTUATION;
use derive_more::Display;
use std::collections::BTreeSet;
use tracing::instrument;

/// A single guessable letter, always stored in lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display("{_0}")]
pub struct Letter(char);

impl Letter {
    /// Parses a letter, folding it to lowercase.
    ///
    /// Returns `None` for anything that is not an ASCII letter.
    pub fn parse(c: char) -> Option<Self> {
        c.is_ascii_alphabetic().then(|| Self(c.to_ascii_lowercase()))
    }

    /// Returns the lowercase character.
    pub fn as_char(self) -> char {
        self.0
    }
}

/// Reasons a phrase is refused.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum PhraseError {
    /// Nothing left after trimming.
    #[display("Word/phrase cannot be empty")]
    Empty,

    /// Only spaces and punctuation.
    #[display("Word/phrase must contain at least one letter")]
    NoLetters,

    /// A character outside letters, spaces and the allowed punctuation.
    #[display("Word/phrase cannot contain numbers or any punctuation other than .,!?\"'&- (found {:?})", _0)]
    InvalidCharacter(char),
}

impl std::error::Error for PhraseError {}

/// The phrase being guessed.
///
/// Only constructible through [`Phrase::parse`], so a `Phrase` always
/// holds at least one letter and nothing outside `[A-Za-z.,!?"'&\- ]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display("{text}")]
pub struct Phrase {
    text: String,
}

impl Phrase {
    /// Validates and trims a raw phrase.
    #[instrument(skip(raw), fields(len = raw.len()))]
    pub fn parse(raw: &str) -> Result<Self, PhraseError> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(PhraseError::Empty);
        }
        if let Some(bad) = text.chars().find(|&c| !is_phrase_char(c)) {
            return Err(PhraseError::InvalidCharacter(bad));
        }
        if !text.chars().any(|c| c.is_ascii_alphabetic()) {
            return Err(PhraseError::NoLetters);
        }
        Ok(Self {
            text: text.to_string(),
        })
    }

    /// Returns the phrase exactly as given (trimmed).
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the distinct letters of the phrase.
    pub fn letters(&self) -> BTreeSet<Letter> {
        self.text.chars().filter_map(Letter::parse).collect()
    }

    /// Returns true if the letter occurs anywhere in the phrase, ignoring case.
    pub fn contains(&self, letter: Letter) -> bool {
        self.text
            .chars()
            .any(|c| c.eq_ignore_ascii_case(&letter.as_char()))
    }
}

fn is_phrase_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == ' ' || PUNCTUATION.contains(&c)
}

/// Letters guessed so far, split by whether they were in the phrase.
///
/// A letter lives in at most one of the two sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessSet {
    pub(super) correct: BTreeSet<Letter>,
    pub(super) incorrect: BTreeSet<Letter>,
}

impl GuessSet {
    /// Creates an empty guess set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Letters found in the phrase, alphabetical.
    pub fn correct(&self) -> &BTreeSet<Letter> {
        &self.correct
    }

    /// Letters not in the phrase, alphabetical.
    pub fn incorrect(&self) -> &BTreeSet<Letter> {
        &self.incorrect
    }

    /// Returns true if the letter was already guessed either way.
    pub fn contains(&self, letter: Letter) -> bool {
        self.correct.contains(&letter) || self.incorrect.contains(&letter)
    }

    /// Number of wrong guesses.
    pub fn misses(&self) -> usize {
        self.incorrect.len()
    }

    pub(super) fn record_correct(&mut self, letter: Letter) {
        self.correct.insert(letter);
    }

    pub(super) fn record_incorrect(&mut self, letter: Letter) {
        self.incorrect.insert(letter);
    }
}
