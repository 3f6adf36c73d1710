//! Loss detection for hangman.

use super::super::GuessSet;
use tracing::instrument;

/// Wrong guesses allowed; the one that reaches this count ends the game.
pub const MAX_MISSES: usize = 6;

/// Checks if the gallows drawing is complete.
#[instrument(skip(guesses), fields(misses = guesses.misses()))]
pub fn is_hanged(guesses: &GuessSet) -> bool {
    guesses.misses() >= MAX_MISSES
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::hangman::Letter;

    #[test]
    fn test_not_hanged_at_five() {
        let mut guesses = GuessSet::new();
        for c in "abcde".chars() {
            guesses.record_incorrect(Letter::parse(c).unwrap());
        }
        assert!(!is_hanged(&guesses));
    }

    #[test]
    fn test_hanged_at_six() {
        let mut guesses = GuessSet::new();
        for c in "abcdef".chars() {
            guesses.record_incorrect(Letter::parse(c).unwrap());
        }
        assert!(is_hanged(&guesses));
    }
}
