//! Word-boundary assertions.
//!
//! `chars` is the body of a regex character class (e.g. `a-z0-9.-`), not a
//! list of literal characters. A `-` meant literally must come last.

use crate::grammar::WORD_CHARS;

/// Negative look-behind: not preceded by a word character.
pub fn word_open(chars: &str) -> String {
    format!("(?<![{chars}])")
}

/// Negative look-ahead: not followed by a word character.
pub fn word_close(chars: &str) -> String {
    format!("(?![{chars}])")
}

/// Wrap `pattern` so it only matches a whole word.
pub fn wordify(pattern: &str, chars: &str) -> String {
    format!("{}{}{}", word_open(chars), pattern, word_close(chars))
}

/// [`wordify`] with the standard numeric word set.
pub fn std_wordify(pattern: &str) -> String {
    wordify(pattern, WORD_CHARS)
}
