//! Emoji matching.
//!
//! An emoji segment is one extended grapheme cluster whose content is an
//! emoji. Grapheme segmentation keeps multi-codepoint sequences together:
//! - `👨‍👩‍👧‍👦` (ZWJ sequence)
//! - `🇺🇸` (regional indicator pair)
//! - `👍🏽` (skin tone modifier)
//! - `1️⃣` (keycap)
//! - `☀️` (text symbol with VS16 emoji presentation)

use unicode_segmentation::UnicodeSegmentation;

const VS16: char = '\u{FE0F}';
const KEYCAP: char = '\u{20E3}';

/// Byte length of the emoji cluster at the start of `s`, if any.
pub(super) fn match_emoji(s: &str) -> Option<usize> {
    let cluster = s.graphemes(true).next()?;
    is_emoji_cluster(cluster).then_some(cluster.len())
}

fn is_emoji_cluster(cluster: &str) -> bool {
    let Some(first) = cluster.chars().next() else {
        return false;
    };

    if is_pictographic(first) {
        return true;
    }

    // Keycaps: 0-9, # or * + (VS16) + combining enclosing keycap.
    if matches!(first, '0'..='9' | '#' | '*') {
        return cluster.contains(KEYCAP);
    }

    // Text-default symbols only count with explicit emoji presentation.
    is_text_default_symbol(first) && cluster.contains(VS16)
}

/// Codepoints with default emoji presentation.
#[inline]
fn is_pictographic(c: char) -> bool {
    matches!(c as u32,
        // Mahjong, cards, enclosed alphanumerics, regional indicators,
        // pictographs, emoticons, transport, supplemental and extended-A
        0x1F000..=0x1FAFF
        // Misc symbols and dingbats (☀ ✨ ⚡)
        | 0x2600..=0x27BF
        // Watch, hourglass, media controls
        | 0x231A..=0x231B
        | 0x23E9..=0x23F3
        | 0x23F8..=0x23FA
        // Squares and circles
        | 0x2B1B..=0x2B1C
        | 0x2B50
        | 0x2B55
    )
}

/// Symbols rendered as text unless followed by VS16.
#[inline]
fn is_text_default_symbol(c: char) -> bool {
    matches!(c as u32,
        0x00A9 | 0x00AE
        | 0x203C | 0x2049 | 0x2122 | 0x2139
        | 0x2194..=0x21AA
        | 0x2300..=0x23FF
        | 0x24C2
        | 0x25AA..=0x25FE
        | 0x2934..=0x2935
        | 0x2B05..=0x2B55
        | 0x3030 | 0x303D | 0x3297 | 0x3299
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched(s: &str) -> Option<&str> {
        match_emoji(s).map(|n| &s[..n])
    }

    #[test]
    fn single_codepoint_emoji() {
        assert_eq!(matched("😀 hi"), Some("😀"));
        assert_eq!(matched("🚀launch"), Some("🚀"));
        assert_eq!(matched("✨"), Some("✨"));
    }

    #[test]
    fn zwj_sequence_is_one_segment() {
        let family = "👨\u{200D}👩\u{200D}👧\u{200D}👦";
        let s = format!("{family} family");
        assert_eq!(matched(&s), Some(family));
    }

    #[test]
    fn skin_tone_stays_attached() {
        assert_eq!(matched("👍\u{1F3FD}ok"), Some("👍\u{1F3FD}"));
    }

    #[test]
    fn flag_pair() {
        assert_eq!(matched("🇺🇸🇧🇷"), Some("🇺🇸"));
    }

    #[test]
    fn keycap_sequence() {
        assert_eq!(matched("1\u{FE0F}\u{20E3}2"), Some("1\u{FE0F}\u{20E3}"));
        assert_eq!(matched("1 apple"), None);
    }

    #[test]
    fn vs16_presentation() {
        assert_eq!(matched("\u{A9}\u{FE0F} 2024"), Some("\u{A9}\u{FE0F}"));
        assert_eq!(matched("\u{A9} 2024"), None);
    }

    #[test]
    fn plain_text_is_not_emoji() {
        assert_eq!(matched("hello"), None);
        assert_eq!(matched("你好"), None);
        assert_eq!(matched("e\u{0301}"), None);
        assert_eq!(matched(""), None);
    }
}
