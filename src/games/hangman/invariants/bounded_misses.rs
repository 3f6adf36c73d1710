//! Bounded misses invariant.

use super::super::rules::MAX_MISSES;
use super::super::{GameState, Outcome};
use super::Invariant;

/// Invariant: at most six misses, and six only once the game is lost.
pub struct BoundedMissesInvariant;

impl Invariant<GameState> for BoundedMissesInvariant {
    fn holds(game: &GameState) -> bool {
        let misses = game.misses();
        misses < MAX_MISSES || (misses == MAX_MISSES && game.outcome() == Outcome::Lost)
    }

    fn description() -> &'static str {
        "Misses never exceed the limit, and reaching it means the game is lost"
    }
}
