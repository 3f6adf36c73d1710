//! Tests for the hangman game state machine.

use strictly_hangman::{GameState, GuessError, Letter, Outcome, Phrase, rules};

fn game(phrase: &str) -> GameState {
    GameState::new(Phrase::parse(phrase).expect("Valid phrase"))
}

#[test]
fn test_six_wrong_letters_lose() {
    let mut game = game("Cat");
    let guesses = ["x", "y", "z", "q", "w", "e"];

    for guess in &guesses[..5] {
        assert_eq!(game.apply_guess(guess), Ok(Outcome::InProgress));
    }
    assert_eq!(game.apply_guess(guesses[5]), Ok(Outcome::Lost));
    assert_eq!(game.misses(), rules::MAX_MISSES);
}

#[test]
fn test_guessing_every_letter_wins() {
    let mut game = game("Cat");
    assert_eq!(game.render_mask(), "___");

    assert_eq!(game.apply_guess("c"), Ok(Outcome::InProgress));
    assert_eq!(game.render_mask(), "C__");

    assert_eq!(game.apply_guess("a"), Ok(Outcome::InProgress));
    assert_eq!(game.render_mask(), "Ca_");

    assert_eq!(game.apply_guess("t"), Ok(Outcome::Won));
    assert_eq!(game.render_mask(), "Cat");
}

#[test]
fn test_exact_phrase_guess_wins() {
    let mut game = game("Hi there!");
    assert_eq!(game.apply_guess("hi there!"), Ok(Outcome::Won));
    assert_eq!(game.render_mask(), "Hi there!");
}

#[test]
fn test_stripped_phrase_guess_wins() {
    let mut game = game("Hi there!");
    assert_eq!(game.apply_guess("hi there"), Ok(Outcome::Won));
}

#[test]
fn test_phrase_guess_wins_with_misses_on_the_board() {
    let mut game = game("Hi there!");
    for guess in ["a", "b", "c", "d", "f"] {
        assert_eq!(game.apply_guess(guess), Ok(Outcome::InProgress));
    }
    assert_eq!(game.remaining_misses(), 1);

    assert_eq!(game.apply_guess("Hi There"), Ok(Outcome::Won));
    assert_eq!(game.misses(), 5);
}

#[test]
fn test_two_letters_is_invalid() {
    let mut game = game("Cat");
    assert_eq!(game.apply_guess("ab"), Err(GuessError::InvalidGuess));
    assert!(game.guesses().correct().is_empty());
    assert!(game.guesses().incorrect().is_empty());
    assert_eq!(game.outcome(), Outcome::InProgress);
}

#[test]
fn test_repeat_letter_is_already_guessed() {
    let mut game = game("Cat");
    assert_eq!(game.apply_guess("c"), Ok(Outcome::InProgress));
    assert_eq!(
        game.apply_guess("c"),
        Err(GuessError::AlreadyGuessed(Letter::parse('c').expect("letter")))
    );
    assert_eq!(game.guesses().correct().len(), 1);
}

#[test]
fn test_repeat_miss_is_not_counted_twice() {
    let mut game = game("Cat");
    game.apply_guess("z").expect("First miss");
    assert!(game.apply_guess("Z").is_err());
    assert_eq!(game.misses(), 1);
}

#[test]
fn test_lost_game_is_frozen() {
    let mut game = game("Cat");
    for guess in ["x", "y", "z", "q", "w", "e"] {
        game.apply_guess(guess).expect("Valid guess");
    }
    assert_eq!(game.apply_guess("cat"), Err(GuessError::GameOver));
    assert_eq!(game.apply_guess("c"), Err(GuessError::GameOver));
    assert_eq!(game.outcome(), Outcome::Lost);
    assert_eq!(game.render_mask(), "___");
}

#[test]
fn test_separate_games_do_not_share_guesses() {
    let mut first = game("Cat");
    first.apply_guess("c").expect("Valid guess");

    let second = game("Cat");
    assert!(second.guesses().correct().is_empty());
    assert_eq!(second.render_mask(), "___");
}

#[test]
fn test_punctuation_and_spaces_never_masked() {
    let game = game(r#"Rock & roll - "don't" stop, ok?!."#);
    assert_eq!(game.render_mask(), r#"____ & ____ - "___'_" ____, __?!."#);
}
