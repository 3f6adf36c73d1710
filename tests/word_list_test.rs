//! Tests for loading phrases from word list files.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Write;
use strictly_hangman::{HangmanConfig, PhraseSource, PhraseSourceError, PlayerMode, WordList};
use tempfile::NamedTempFile;

fn list_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Temp file");
    file.write_all(contents.as_bytes()).expect("Write word list");
    file
}

#[test]
fn test_load_capitalizes_lines() {
    let file = list_file("HELLO world\nrock & roll\n");
    let list = WordList::load(file.path()).expect("Readable list");
    let phrases: Vec<&str> = list.phrases().iter().map(|p| p.as_str()).collect();
    assert_eq!(phrases, vec!["Hello world", "Rock & roll"]);
}

#[test]
fn test_source_picks_a_listed_phrase() {
    let file = list_file("alpha\nbravo\ncharlie\n");
    let source = PhraseSource::WordList(file.path().to_path_buf());
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..10 {
        let phrase = source.resolve(&mut rng).expect("Phrase picked");
        assert!(["Alpha", "Bravo", "Charlie"].contains(&phrase.as_str()));
    }
}

#[test]
fn test_source_with_only_bad_lines_fails() {
    let file = list_file("123\n@@@\n\n");
    let source = PhraseSource::WordList(file.path().to_path_buf());
    let result = source.resolve(&mut StdRng::seed_from_u64(1));
    assert!(matches!(result, Err(PhraseSourceError::EmptyList { .. })));
}

#[test]
fn test_missing_file_is_read_error() {
    let source = PhraseSource::WordList("/no/such/words.txt".into());
    let result = source.resolve(&mut StdRng::seed_from_u64(1));
    assert!(matches!(result, Err(PhraseSourceError::Read { .. })));
}

#[test]
fn test_config_file_points_at_word_list() {
    let list = list_file("only choice\n");
    let mut config_file = NamedTempFile::new().expect("Temp file");
    writeln!(
        config_file,
        "word_list = {:?}\nplayers = \"solo\"",
        list.path().display().to_string()
    )
    .expect("Write config");

    let config = HangmanConfig::from_file(config_file.path()).expect("Valid config");
    assert_eq!(config.players(), &Some(PlayerMode::Solo));

    let phrase = config
        .solo_source()
        .resolve(&mut StdRng::seed_from_u64(3))
        .expect("Phrase picked");
    assert_eq!(phrase.as_str(), "Only choice");
}
