//! Gallows drawings, one per miss count.

use super::rules::MAX_MISSES;

const FRAMES: [&str; MAX_MISSES + 1] = [
    r" _______
 |   \ |
      \|
       |
       |
       |
      /|\
     / | \
¯¯¯¯¯¯¯¯¯¯¯",
    r" _______
 |   \ |
 O    \|
       |
       |
       |
      /|\
     / | \
¯¯¯¯¯¯¯¯¯¯¯",
    r" _______
 |   \ |
 O    \|
 |     |
 |     |
       |
      /|\
     / | \
¯¯¯¯¯¯¯¯¯¯¯",
    r" _______
 |   \ |
 O    \|
\|     |
 |     |
       |
      /|\
     / | \
¯¯¯¯¯¯¯¯¯¯¯",
    r" _______
 |   \ |
 O    \|
\|/    |
 |     |
       |
      /|\
     / | \
¯¯¯¯¯¯¯¯¯¯¯",
    r" _______
 |   \ |
 O    \|
\|/    |
 |     |
/      |
      /|\
     / | \
¯¯¯¯¯¯¯¯¯¯¯",
    r" _______
 |   \ |
 O    \|
\|/    |
 |     |
/ \    |
      /|\
     / | \
¯¯¯¯¯¯¯¯¯¯¯",
];

/// Returns the gallows drawing for the given number of misses.
///
/// Counts past the limit show the finished drawing.
pub fn visual_for(misses: usize) -> &'static str {
    FRAMES[misses.min(MAX_MISSES)]
}
