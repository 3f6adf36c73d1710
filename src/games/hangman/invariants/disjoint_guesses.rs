//! Disjoint guesses invariant: no letter is both right and wrong.

use super::super::GameState;
use super::Invariant;

/// Invariant: the correct and incorrect sets share no letter.
pub struct DisjointGuessesInvariant;

impl Invariant<GameState> for DisjointGuessesInvariant {
    fn holds(game: &GameState) -> bool {
        let guesses = game.guesses();
        guesses.correct().is_disjoint(guesses.incorrect())
    }

    fn description() -> &'static str {
        "A letter is never in both the correct and incorrect sets"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::hangman::{Letter, Phrase};

    #[test]
    fn test_holds_after_mixed_guesses() {
        let mut game = GameState::new(Phrase::parse("Hi there!").unwrap());
        for guess in ["h", "z", "e", "q"] {
            game.apply_guess(guess).unwrap();
        }
        assert!(DisjointGuessesInvariant::holds(&game));
    }

    #[test]
    fn test_overlap_violates() {
        let mut game = GameState::new(Phrase::parse("Cat").unwrap());
        game.apply_guess("a").unwrap();
        game.guesses.incorrect.insert(Letter::parse('a').unwrap());
        assert!(!DisjointGuessesInvariant::holds(&game));
    }
}
