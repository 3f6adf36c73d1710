//! Synchronous console driver.
//!
//! Prompts on any `BufRead`, prints on any `Write`. End of input at a
//! prompt ends the session; the game core is never asked to exit.

pub mod render;

use crate::config::PlayerMode;
use crate::games::hangman::{GameState, Outcome, Phrase, PhraseError};
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// How a console session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The game reached Won or Lost.
    Finished(Outcome),
    /// Input ran out before the game finished.
    Aborted,
}

/// Line-oriented prompt/print loop around a game.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given input and output.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the console, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints a prompt and reads one line without its terminator.
    ///
    /// Returns `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("End of input");
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Asks for the number of players until the answer is 1 or 2.
    #[instrument(skip(self))]
    pub fn prompt_players(&mut self) -> io::Result<Option<PlayerMode>> {
        loop {
            let Some(line) = self.read_line("Number of players (1 or 2): ")? else {
                return Ok(None);
            };
            match PlayerMode::from_str(line.trim()) {
                Ok(mode) => {
                    info!(%mode, "Player mode selected");
                    return Ok(Some(mode));
                }
                Err(_) => writeln!(self.output, "Please input 1 or 2")?,
            }
        }
    }

    /// Asks the phrase setter for a phrase until a valid one is entered.
    ///
    /// Entries with no letters are asked again without comment.
    #[instrument(skip(self))]
    pub fn prompt_phrase(&mut self) -> io::Result<Option<Phrase>> {
        loop {
            let Some(line) = self.read_line("Input word or phrase: ")? else {
                return Ok(None);
            };
            match Phrase::parse(&line) {
                Ok(phrase) => return Ok(Some(phrase)),
                Err(PhraseError::Empty | PhraseError::NoLetters) => continue,
                Err(error @ PhraseError::InvalidCharacter(_)) => {
                    writeln!(self.output, "{}", error)?;
                }
            }
        }
    }

    /// Runs the guessing loop until the game ends or input runs out.
    #[instrument(skip_all)]
    pub fn play(&mut self, mut game: GameState) -> io::Result<SessionEnd> {
        self.show(&game)?;
        loop {
            let Some(line) = self.read_line("Guess: ")? else {
                info!("Session aborted");
                return Ok(SessionEnd::Aborted);
            };
            match game.apply_guess(&line) {
                Ok(outcome) => {
                    self.show(&game)?;
                    if let Some(banner) = render::banner(&game) {
                        writeln!(self.output, "{}", banner)?;
                        return Ok(SessionEnd::Finished(outcome));
                    }
                }
                Err(error) => writeln!(self.output, "{}", error)?,
            }
        }
    }

    fn show(&mut self, game: &GameState) -> io::Result<()> {
        writeln!(self.output, "{}", render::board(game))
    }
}
