//! String dissection into atomic segments.
//!
//! Splits a string into an ordered, non-overlapping sequence of segments that
//! must never be cut in half: escape sequences, emoji, URLs, words and
//! grapheme clusters.
//!
//! # Algorithm
//!
//! A cursor starts at byte 0. At each position the matchers are tried in
//! fixed priority order, each anchored at the cursor:
//!
//! 1. Control sequence (always)
//! 2. Emoji (always)
//! 3. URL (`safe_urls`)
//! 4. Word (`safe_words`)
//! 5. Grapheme cluster (always)
//! 6. Single `char` (always)
//!
//! The first matcher that matches emits its longest match as one segment and
//! the cursor advances past it. The single-`char` fallback matches any
//! non-empty input, so every iteration makes progress.

mod ansi;
mod emoji;
mod grapheme;
mod url;
mod word;

use bitflags::bitflags;
use serde::Deserialize;

use crate::types::{Segment, SegmentKind};

bitflags! {
    /// Matchers participating in dissection.
    ///
    /// The single-`char` fallback is not a flag: it is always last.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MatcherSet: u8 {
        const CONTROL   = 1 << 0;
        const EMOJI     = 1 << 1;
        const URL       = 1 << 2;
        const WORD      = 1 << 3;
        const CHARACTER = 1 << 4;
    }
}

impl MatcherSet {
    /// Matchers that run regardless of options.
    pub const ALWAYS: Self = Self::CONTROL.union(Self::EMOJI).union(Self::CHARACTER);
}

impl Default for MatcherSet {
    fn default() -> Self {
        Self::all()
    }
}

/// Options controlling which optional matchers participate.
///
/// Deserializes from `safe_urls`/`safe_words` keys, each defaulting to `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DissectorOptions {
    /// Keep URLs whole.
    pub safe_urls: bool,
    /// Keep words whole.
    pub safe_words: bool,
}

impl Default for DissectorOptions {
    fn default() -> Self {
        Self {
            safe_urls: true,
            safe_words: true,
        }
    }
}

impl From<DissectorOptions> for MatcherSet {
    fn from(options: DissectorOptions) -> Self {
        let mut set = Self::ALWAYS;
        set.set(Self::URL, options.safe_urls);
        set.set(Self::WORD, options.safe_words);
        set
    }
}

// =============================================================================
// Matcher chain
// =============================================================================

type MatchFn = fn(&str) -> Option<usize>;

/// Matchers in priority order, with the flag that enables each.
const CHAIN: [(MatcherSet, SegmentKind, MatchFn); 5] = [
    (MatcherSet::CONTROL, SegmentKind::ControlSequence, ansi::match_control_sequence),
    (MatcherSet::EMOJI, SegmentKind::Emoji, emoji::match_emoji),
    (MatcherSet::URL, SegmentKind::Url, url::match_url),
    (MatcherSet::WORD, SegmentKind::Word, word::match_word),
    (MatcherSet::CHARACTER, SegmentKind::Character, grapheme::match_character),
];

/// Splits strings into atomic segments.
///
/// Holds only the matcher selection; a dissector is `Copy` and can be shared
/// freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StringDissector {
    matchers: MatcherSet,
}

impl StringDissector {
    pub fn new(options: DissectorOptions) -> Self {
        Self::with_matchers(options.into())
    }

    /// Build from an explicit matcher set.
    ///
    /// Always-on matchers are added back if missing.
    pub fn with_matchers(matchers: MatcherSet) -> Self {
        Self {
            matchers: matchers | MatcherSet::ALWAYS,
        }
    }

    pub fn matchers(&self) -> MatcherSet {
        self.matchers
    }

    pub fn safe_urls(&self) -> bool {
        self.matchers.contains(MatcherSet::URL)
    }

    pub fn safe_words(&self) -> bool {
        self.matchers.contains(MatcherSet::WORD)
    }

    /// Dissect `item` into segments.
    ///
    /// Concatenating the returned segments reproduces `item` exactly. An
    /// empty input yields no segments.
    pub fn dissect<'a>(&self, item: &'a str) -> Vec<Segment<'a>> {
        let mut segments = Vec::new();
        let mut rest = item;

        while !rest.is_empty() {
            let segment = self.next_segment(rest);
            rest = &rest[segment.value.len()..];
            segments.push(segment);
        }

        segments
    }

    /// Highest-priority match anchored at the start of non-empty `rest`.
    fn next_segment<'a>(&self, rest: &'a str) -> Segment<'a> {
        for (flag, kind, matcher) in CHAIN {
            if !self.matchers.contains(flag) {
                continue;
            }
            if let Some(len) = matcher(rest).filter(|&len| len > 0) {
                return Segment::new(&rest[..len], kind);
            }
        }

        let len = grapheme::match_fallback(rest).unwrap_or(rest.len());
        Segment::new(&rest[..len], SegmentKind::Fallback)
    }
}

/// Dissect `item` with the given options.
///
/// Convenience for a one-off [`StringDissector`].
pub fn dissect(item: &str, options: DissectorOptions) -> Vec<Segment<'_>> {
    StringDissector::new(options).dissect(item)
}
