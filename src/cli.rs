//! Command-line interface for strictly_hangman.

use clap::{Parser, Subcommand};
use strictly_hangman::PlayerMode;

/// Strictly Hangman - guess the phrase before the gallows is drawn
#[derive(Parser, Debug)]
#[command(name = "strictly_hangman")]
#[command(about = "Terminal hangman", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal
    Play {
        /// Number of players: 1 (solo) or 2 (duel). Prompted for if omitted.
        #[arg(short, long)]
        players: Option<PlayerMode>,

        /// Phrase to guess, skipping the word list and the phrase prompt
        #[arg(long)]
        phrase: Option<String>,

        /// Word list to pick a solo phrase from (one phrase per line)
        #[arg(short, long)]
        word_list: Option<std::path::PathBuf>,

        /// Seed for the word list pick
        #[arg(long)]
        seed: Option<u64>,

        /// Path to the config file
        #[arg(short, long, default_value = "hangman.toml")]
        config: std::path::PathBuf,
    },

    /// Check a word list and report which lines are usable
    CheckList {
        /// Word list file
        path: std::path::PathBuf,
    },

    /// Print every gallows frame
    Frames,
}
