//! Where phrases come from: a fixed literal or a random line of a word list.

use crate::games::hangman::{Phrase, PhraseError};
use derive_more::{Display, Error};
use rand::Rng;
use rand::seq::SliceRandom;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Phrase used when nothing else is configured.
pub const DEFAULT_PHRASE: &str = "This is hangman";

/// Failure to produce a phrase.
#[derive(Debug, Display, Error)]
pub enum PhraseSourceError {
    /// The word list could not be read.
    #[display("Failed to read word list {}: {}", path.display(), source)]
    Read {
        /// Path of the list.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The word list holds no usable line.
    #[display("Word list {} has no usable phrases", path.display())]
    EmptyList {
        /// Path of the list.
        path: PathBuf,
    },

    /// A fixed phrase failed validation.
    #[display("Invalid phrase: {}", source)]
    InvalidPhrase {
        /// Why the phrase was refused.
        source: PhraseError,
    },
}

/// A line of a word list that could not be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    /// 1-based line number.
    pub line: usize,
    /// Why it was refused.
    pub error: PhraseError,
}

/// Parsed contents of a newline-delimited word list.
///
/// Blank lines are ignored; lines that fail phrase validation are kept
/// aside in [`WordList::rejected`].
#[derive(Debug, Clone, Default)]
pub struct WordList {
    phrases: Vec<Phrase>,
    rejected: Vec<RejectedLine>,
}

impl WordList {
    /// Parses word list text. Every usable line is capitalized.
    #[instrument(skip(text), fields(bytes = text.len()))]
    pub fn parse(text: &str) -> Self {
        let mut list = Self::default();
        for (index, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match Phrase::parse(&capitalize(line.trim())) {
                Ok(phrase) => list.phrases.push(phrase),
                Err(error) => {
                    warn!(line = index + 1, %error, "Skipping word list line");
                    list.rejected.push(RejectedLine {
                        line: index + 1,
                        error,
                    });
                }
            }
        }
        debug!(
            phrases = list.phrases.len(),
            rejected = list.rejected.len(),
            "Word list parsed"
        );
        list
    }

    /// Reads and parses a word list file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PhraseSourceError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| PhraseSourceError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let list = Self::parse(&text);
        info!(phrases = list.phrases.len(), "Word list loaded");
        Ok(list)
    }

    /// Usable phrases, in file order.
    pub fn phrases(&self) -> &[Phrase] {
        &self.phrases
    }

    /// Lines that were refused.
    pub fn rejected(&self) -> &[RejectedLine] {
        &self.rejected
    }

    /// Picks one phrase uniformly at random.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Phrase> {
        self.phrases.choose(rng)
    }
}

/// Uppercases the first character and lowercases the rest.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// The origin of a solo game's phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhraseSource {
    /// A literal phrase, used as is.
    Fixed(String),
    /// One line picked at random from a word list file.
    WordList(PathBuf),
}

impl PhraseSource {
    /// Produces a validated phrase from this source.
    #[instrument(skip(self, rng))]
    pub fn resolve<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Phrase, PhraseSourceError> {
        match self {
            PhraseSource::Fixed(text) => Phrase::parse(text)
                .map_err(|source| PhraseSourceError::InvalidPhrase { source }),
            PhraseSource::WordList(path) => {
                let list = WordList::load(path)?;
                list.choose(rng)
                    .cloned()
                    .ok_or_else(|| PhraseSourceError::EmptyList { path: path.clone() })
            }
        }
    }
}

impl Default for PhraseSource {
    fn default() -> Self {
        PhraseSource::Fixed(DEFAULT_PHRASE.to_string())
    }
}
