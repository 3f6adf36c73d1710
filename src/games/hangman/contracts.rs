//! Contract-based validation for hangman.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} guess {Q}

use super::action::{Guess, GuessError};
use super::invariants::{HangmanInvariants, InvariantSet};
use super::GameState;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), GuessError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), GuessError>;
}

// ─────────────────────────────────────────────────────────────
//  Guess Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game has not reached Won or Lost.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects any guess on a finished game.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), GuessError> {
        if game.outcome().is_terminal() {
            Err(GuessError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: a letter guess has not been made before.
pub struct LetterUnguessed;

impl LetterUnguessed {
    /// Rejects a letter already in either guess set. Phrase guesses always pass.
    #[instrument(skip(game))]
    pub fn check(guess: &Guess, game: &GameState) -> Result<(), GuessError> {
        match guess.letter() {
            Some(letter) if game.guesses().contains(letter) => {
                Err(GuessError::AlreadyGuessed(letter))
            }
            _ => Ok(()),
        }
    }
}

/// Composite precondition: a guess is legal if the game is live and the letter is new.
pub struct LegalGuess;

impl LegalGuess {
    /// Validates all preconditions for a guess.
    #[instrument(skip(game))]
    pub fn check(guess: &Guess, game: &GameState) -> Result<(), GuessError> {
        GameNotOver::check(game)?;
        LetterUnguessed::check(guess, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Guess Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for guess actions.
///
/// Preconditions:
/// - Game is not over
/// - Letter not already guessed
///
/// Postconditions:
/// - Guess sets only grow
/// - Guess sets stay disjoint
/// - Misses stay bounded
/// - Outcome agrees with the rules
pub struct GuessContract;

impl Contract<GameState, Guess> for GuessContract {
    fn pre(game: &GameState, guess: &Guess) -> Result<(), GuessError> {
        LegalGuess::check(guess, game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), GuessError> {
        if !GuessesMonotonic::holds(before, after) {
            return Err(GuessError::InvariantViolation(
                "Postcondition failed: guessed letters were forgotten".to_string(),
            ));
        }

        HangmanInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            GuessError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

/// Transition property: every letter guessed before is still recorded, on the same side.
pub struct GuessesMonotonic;

impl GuessesMonotonic {
    /// Compares the guess sets before and after a transition.
    #[instrument(skip_all)]
    pub fn holds(before: &GameState, after: &GameState) -> bool {
        let (b, a) = (before.guesses(), after.guesses());
        let valid = b.correct().is_subset(a.correct()) && b.incorrect().is_subset(a.incorrect());
        if !valid {
            warn!("Guess sets shrank across a transition");
        }
        valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::hangman::{Letter, Phrase};

    fn letter(c: char) -> Guess {
        Guess::Letter(Letter::parse(c).unwrap())
    }

    fn cat() -> GameState {
        GameState::new(Phrase::parse("Cat").unwrap())
    }

    #[test]
    fn test_precondition_fresh_letter() {
        assert!(GuessContract::pre(&cat(), &letter('c')).is_ok());
    }

    #[test]
    fn test_precondition_repeated_letter() {
        let mut game = cat();
        game.apply_guess("x").unwrap();
        assert_eq!(
            GuessContract::pre(&game, &letter('x')),
            Err(GuessError::AlreadyGuessed(Letter::parse('x').unwrap()))
        );
    }

    #[test]
    fn test_precondition_game_over() {
        let mut game = cat();
        game.apply_guess("cat").unwrap();
        assert_eq!(
            GuessContract::pre(&game, &letter('q')),
            Err(GuessError::GameOver)
        );
    }

    #[test]
    fn test_postcondition_holds_after_guess() {
        let before = cat();
        let mut after = before.clone();
        after.apply_guess("a").unwrap();
        assert!(GuessContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_forgotten_letter() {
        let mut before = cat();
        before.apply_guess("a").unwrap();
        let mut after = before.clone();
        after.guesses.correct.clear();
        assert!(matches!(
            GuessContract::post(&before, &after),
            Err(GuessError::InvariantViolation(_))
        ));
    }
}
