//! Full-phrase guess matching.

use super::super::Phrase;
use tracing::instrument;

/// Punctuation allowed in phrases and ignored when matching a full-phrase guess.
pub const PUNCTUATION: [char; 8] = ['.', ',', '!', '?', '"', '\'', '&', '-'];

/// Removes every [`PUNCTUATION`] character. Spaces are kept.
pub fn strip_punctuation(text: &str) -> String {
    text.chars().filter(|c| !PUNCTUATION.contains(c)).collect()
}

/// Checks whether a lowercased guess spells out the whole phrase.
///
/// Matches either exactly (ignoring case) or once punctuation is stripped
/// from both sides.
#[instrument(skip_all)]
pub fn is_full_phrase_match(phrase: &Phrase, normalized: &str) -> bool {
    let target = phrase.as_str().to_lowercase();
    normalized == target || strip_punctuation(normalized) == strip_punctuation(&target)
}
