//! Hangman: guess a phrase one letter at a time before the gallows is drawn.

mod action;
mod contracts;
mod gallows;
mod game;
mod invariants;
mod phases;
pub mod rules;
mod types;

pub use action::{Guess, GuessError};
pub use contracts::{
    Contract, GameNotOver, GuessContract, GuessesMonotonic, LegalGuess, LetterUnguessed,
};
pub use gallows::visual_for;
pub use game::{GameState, PLACEHOLDER};
pub use invariants::{
    BoundedMissesInvariant, DisjointGuessesInvariant, HangmanInvariants, Invariant,
    InvariantSet, InvariantViolation, OutcomeConsistentInvariant,
};
pub use phases::Outcome;
pub use types::{GuessSet, Letter, Phrase, PhraseError};
