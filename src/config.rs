//! Game configuration file.

use crate::phrase_source::{DEFAULT_PHRASE, PhraseSource};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Who supplies the phrase.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum PlayerMode {
    /// One player guesses a phrase picked by the game.
    #[serde(alias = "1")]
    #[strum(to_string = "solo", serialize = "1")]
    Solo,
    /// One player types a phrase, the other guesses it.
    #[serde(alias = "2")]
    #[strum(to_string = "duel", serialize = "2")]
    Duel,
}

/// Hangman configuration, read from TOML.
///
/// ```toml
/// default_phrase = "This is hangman"
/// word_list = "words.txt"
/// players = "solo"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HangmanConfig {
    /// Phrase for solo games when no word list is set.
    #[serde(default = "default_phrase")]
    default_phrase: String,

    /// Newline-delimited phrase list for solo games.
    #[serde(default)]
    word_list: Option<PathBuf>,

    /// Skip the players prompt.
    #[serde(default)]
    players: Option<PlayerMode>,
}

#[instrument]
fn default_phrase() -> String {
    DEFAULT_PHRASE.to_string()
}

impl Default for HangmanConfig {
    fn default() -> Self {
        Self {
            default_phrase: default_phrase(),
            word_list: None,
            players: None,
        }
    }
}

impl HangmanConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(word_list = ?config.word_list, players = ?config.players, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads the file if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of file values.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        players: Option<PlayerMode>,
        word_list: Option<PathBuf>,
    ) -> Self {
        if players.is_some() {
            self.players = players;
        }
        if word_list.is_some() {
            self.word_list = word_list;
        }
        self
    }

    /// Phrase source for a solo game: the word list if set, else the default phrase.
    pub fn solo_source(&self) -> PhraseSource {
        match &self.word_list {
            Some(path) => PhraseSource::WordList(path.clone()),
            None => PhraseSource::Fixed(self.default_phrase.clone()),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
