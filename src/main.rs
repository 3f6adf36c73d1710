//! Strictly Hangman - terminal game binary.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Write;
use std::path::PathBuf;
use strictly_hangman::{
    Console, GameState, HangmanConfig, Phrase, PlayerMode, SessionEnd, WordList, rules,
    visual_for,
};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    match cli.command {
        Command::Play {
            players,
            phrase,
            word_list,
            seed,
            config,
        } => run_play(players, phrase, word_list, seed, config),
        Command::CheckList { path } => run_check_list(path),
        Command::Frames => run_frames(),
    }
}

/// Logs go to stderr so they never interleave with the board.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Play one game on stdin/stdout
#[instrument(skip(phrase))]
fn run_play(
    players: Option<PlayerMode>,
    phrase: Option<String>,
    word_list: Option<PathBuf>,
    seed: Option<u64>,
    config_path: PathBuf,
) -> Result<()> {
    let config = HangmanConfig::load_or_default(&config_path)?.with_overrides(players, word_list);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    let mode = match config.players() {
        Some(mode) => *mode,
        None => match console.prompt_players()? {
            Some(mode) => mode,
            None => return Ok(()),
        },
    };

    let phrase = match (phrase, mode) {
        (Some(text), _) => Phrase::parse(&text)?,
        (None, PlayerMode::Solo) => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            config.solo_source().resolve(&mut rng)?
        }
        (None, PlayerMode::Duel) => match console.prompt_phrase()? {
            Some(phrase) => phrase,
            None => return Ok(()),
        },
    };

    info!(%mode, "Starting game");
    match console.play(GameState::new(phrase))? {
        SessionEnd::Finished(outcome) => info!(%outcome, "Session finished"),
        SessionEnd::Aborted => info!("Session ended by end of input"),
    }

    Ok(())
}

/// Report usable and rejected lines of a word list
#[instrument]
fn run_check_list(path: PathBuf) -> Result<()> {
    let list = WordList::load(&path)?;
    let mut out = std::io::stdout().lock();

    for rejected in list.rejected() {
        writeln!(out, "line {}: {}", rejected.line, rejected.error)?;
    }
    writeln!(
        out,
        "{}: {} usable, {} rejected",
        path.display(),
        list.phrases().len(),
        list.rejected().len()
    )?;

    if list.phrases().is_empty() {
        warn!("No usable phrases");
        anyhow::bail!("{} has no usable phrases", path.display());
    }
    Ok(())
}

/// Print every gallows frame
fn run_frames() -> Result<()> {
    let mut out = std::io::stdout().lock();
    for misses in 0..=rules::MAX_MISSES {
        writeln!(out, "{} miss(es):\n{}\n", misses, visual_for(misses))?;
    }
    Ok(())
}
