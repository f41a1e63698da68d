//! Core types for string-overflow.
//!
//! Segments are what the dissector produces and the truncator consumes.
//! The ellipsis position decides how the character budget is split.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::TruncateError;

// =============================================================================
// Segment
// =============================================================================

/// Which matcher produced a segment.
///
/// Variants are listed in matcher priority order: at any cursor position the
/// first matcher that matches there wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// ANSI/VT escape or control sequence.
    ControlSequence,
    /// Emoji or emoji sequence (ZWJ, flags, keycaps, skin tones).
    Emoji,
    /// URL. Only produced when URL safety is enabled.
    Url,
    /// Alphanumeric word. Only produced when word safety is enabled.
    Word,
    /// One extended grapheme cluster.
    Character,
    /// One raw `char`.
    Fallback,
}

/// An atomic, non-splittable slice of the dissected input.
///
/// Concatenating every segment of a dissection reproduces the input exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub value: &'a str,
    pub kind: SegmentKind,
}

impl<'a> Segment<'a> {
    pub const fn new(value: &'a str, kind: SegmentKind) -> Self {
        Self { value, kind }
    }

    /// Length in characters (Unicode scalar values).
    #[inline]
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value)
    }
}

// =============================================================================
// Ellipsis position
// =============================================================================

/// Where the ellipsis mark sits relative to the kept content.
///
/// Parses case-insensitively from `start`/`left`/`s`/`l`,
/// `middle`/`center`/`m`/`c` and `end`/`right`/`e`/`r`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum EllipsisPosition {
    /// Keep a suffix: `...tail`.
    Start,
    /// Keep both ends: `he...il`.
    Middle,
    /// Keep a prefix: `head...`.
    #[default]
    End,
}

impl EllipsisPosition {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::Middle => "Middle",
            Self::End => "End",
        }
    }
}

impl FromStr for EllipsisPosition {
    type Err = TruncateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "e" | "end" | "r" | "right" => Ok(Self::End),
            "c" | "center" | "m" | "middle" => Ok(Self::Middle),
            "l" | "left" | "s" | "start" => Ok(Self::Start),
            _ => Err(TruncateError::InvalidEllipsisPosition(s.to_string())),
        }
    }
}

impl TryFrom<String> for EllipsisPosition {
    type Error = TruncateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for EllipsisPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
