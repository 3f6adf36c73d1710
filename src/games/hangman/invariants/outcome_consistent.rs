//! Outcome consistency invariant.

use super::super::rules;
use super::super::GameState;
use super::Invariant;

/// Invariant: the stored outcome is what the rules derive from the guesses.
///
/// A full-phrase win records every phrase letter as correct, so it is
/// covered too.
pub struct OutcomeConsistentInvariant;

impl Invariant<GameState> for OutcomeConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        game.outcome() == rules::evaluate(game.phrase(), game.guesses())
    }

    fn description() -> &'static str {
        "Outcome agrees with the phrase and the guesses"
    }
}
