//! Game rules for hangman.
//!
//! Pure functions over a phrase and a guess set. The game state calls
//! these to decide outcomes; contracts and invariants call them to check
//! that the stored outcome agrees.

pub mod loss;
pub mod phrase_match;
pub mod win;

pub use loss::{is_hanged, MAX_MISSES};
pub use phrase_match::{is_full_phrase_match, strip_punctuation, PUNCTUATION};
pub use win::is_solved;

use super::{GuessSet, Outcome, Phrase};
use tracing::instrument;

/// Derives the outcome from the phrase and the guesses made so far.
///
/// The miss limit is checked before the solved check.
#[instrument(skip_all, fields(misses = guesses.misses()))]
pub fn evaluate(phrase: &Phrase, guesses: &GuessSet) -> Outcome {
    if is_hanged(guesses) {
        Outcome::Lost
    } else if is_solved(phrase, guesses) {
        Outcome::Won
    } else {
        Outcome::InProgress
    }
}
