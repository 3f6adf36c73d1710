//! Win detection for hangman.

use super::super::{GuessSet, Phrase};
use tracing::instrument;

/// Checks if every letter of the phrase has been guessed.
///
/// Spaces and punctuation never need guessing.
#[instrument(skip_all)]
pub fn is_solved(phrase: &Phrase, guesses: &GuessSet) -> bool {
    phrase
        .letters()
        .iter()
        .all(|letter| guesses.correct().contains(letter))
}
