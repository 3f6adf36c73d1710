//! Text rendering of a game for the console.

use crate::games::hangman::{GameState, Outcome, visual_for};

/// Gallows, masked phrase and missed letters, ready to print.
pub fn board(game: &GameState) -> String {
    let mut out = String::new();
    out.push_str(visual_for(game.misses()));
    out.push('\n');
    out.push_str(&game.render_mask());
    out.push('\n');
    if game.misses() > 0 {
        let missed = game
            .guesses()
            .incorrect()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&format!("Missed: {} ({} left)\n", missed, game.remaining_misses()));
    }
    out
}

/// Closing message for a finished game, or `None` while it is still running.
pub fn banner(game: &GameState) -> Option<String> {
    match game.outcome() {
        Outcome::InProgress => None,
        Outcome::Won => Some("Congratulations, you won!\n".to_string()),
        Outcome::Lost => Some(format!(
            "The word/phrase was: {}\nSorry, you lost.\n",
            game.phrase()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::hangman::Phrase;

    fn game(phrase: &str) -> GameState {
        GameState::new(Phrase::parse(phrase).unwrap())
    }

    #[test]
    fn test_board_for_fresh_game() {
        let text = board(&game("Hi there!"));
        assert!(text.starts_with(visual_for(0)));
        assert!(text.contains("\n__ _____!\n"));
        assert!(!text.contains("Missed"));
    }

    #[test]
    fn test_board_lists_misses() {
        let mut game = game("Cat");
        game.apply_guess("z").unwrap();
        game.apply_guess("b").unwrap();
        assert!(board(&game).contains("Missed: b z (4 left)"));
    }

    #[test]
    fn test_banner_reveals_phrase_on_loss() {
        let mut game = game("Cat");
        for guess in ["b", "d", "e", "f", "g", "h"] {
            game.apply_guess(guess).unwrap();
        }
        let banner = banner(&game).unwrap();
        assert!(banner.contains("The word/phrase was: Cat"));
        assert!(banner.contains("Sorry, you lost."));
    }

    #[test]
    fn test_no_banner_in_progress() {
        assert_eq!(banner(&game("Cat")), None);
    }
}
