//! Game outcome.

/// Where a game stands after a guess.
///
/// `Won` and `Lost` are terminal: once reached, no further guesses are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// More guesses needed.
    InProgress,
    /// Every letter revealed, or the whole phrase guessed.
    Won,
    /// The gallows drawing is complete.
    Lost,
}

impl Outcome {
    /// Returns true for `Won` and `Lost`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won => write!(f, "Won"),
            Outcome::Lost => write!(f, "Lost"),
        }
    }
}
