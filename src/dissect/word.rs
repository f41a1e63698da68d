//! Word matching.
//!
//! A word is a run of ASCII letters, digits and underscores, optionally
//! joined by single inner punctuation from ``~@#$%&*_'.-``:
//! `don't`, `v1.2.3`, `user@host`, `snake_case`, `well-known`.

use std::sync::LazyLock;

use regex::Regex;

static WORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9A-Za-z_]+(?:[~@#$%&*_'.\-][0-9A-Za-z_]+)*").expect("word pattern is valid")
});

/// Byte length of the word at the start of `s`, if any.
pub(super) fn match_word(s: &str) -> Option<usize> {
    WORD_RE.find(s).map(|m| m.end())
}
