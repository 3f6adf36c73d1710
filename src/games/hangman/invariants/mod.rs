//! First-class invariants for hangman.
//!
//! Invariants are logical properties that must hold throughout game execution.
//! They are testable independently and serve as documentation of system guarantees.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod bounded_misses;
pub mod disjoint_guesses;
pub mod outcome_consistent;

pub use bounded_misses::BoundedMissesInvariant;
pub use disjoint_guesses::DisjointGuessesInvariant;
pub use outcome_consistent::OutcomeConsistentInvariant;

/// All hangman invariants as a composable set.
pub type HangmanInvariants = (
    DisjointGuessesInvariant,
    BoundedMissesInvariant,
    OutcomeConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::hangman::{GameState, Letter, Outcome, Phrase};

    fn game(phrase: &str) -> GameState {
        GameState::new(Phrase::parse(phrase).unwrap())
    }

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(HangmanInvariants::check_all(&game("Cat")).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_guesses() {
        let mut game = game("Cat");
        for guess in ["c", "x", "a", "y"] {
            game.apply_guess(guess).unwrap();
        }
        assert!(HangmanInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut game = game("Cat");
        game.apply_guess("c").unwrap();

        // Corrupt the state: same letter on both sides, wrong outcome
        game.guesses.incorrect.insert(Letter::parse('c').unwrap());
        game.outcome = Outcome::Won;

        let violations = HangmanInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (DisjointGuessesInvariant, BoundedMissesInvariant);
        assert!(TwoInvariants::check_all(&game("Cat")).is_ok());
    }
}
