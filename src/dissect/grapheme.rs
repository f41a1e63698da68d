//! Character matching: the always-on tail of the matcher chain.

use unicode_segmentation::UnicodeSegmentation;

/// Byte length of the extended grapheme cluster at the start of `s`.
///
/// A base character plus its combining marks (`e\u{301}`) is one cluster.
#[inline]
pub(super) fn match_character(s: &str) -> Option<usize> {
    s.graphemes(true).next().map(str::len)
}

/// Byte length of the first `char` of `s`.
///
/// Last resort of the chain: matches any non-empty input, so dissection
/// always makes progress.
#[inline]
pub(super) fn match_fallback(s: &str) -> Option<usize> {
    s.chars().next().map(char::len_utf8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn character_keeps_combining_marks() {
        assert_eq!(match_character("e\u{0301}x"), Some(3));
        assert_eq!(match_character("ab"), Some(1));
        assert_eq!(match_character("你好"), Some(3));
    }

    #[test]
    fn character_keeps_crlf_together() {
        assert_eq!(match_character("\r\nnext"), Some(2));
    }

    #[test]
    fn fallback_takes_one_char() {
        assert_eq!(match_fallback("e\u{0301}"), Some(1));
        assert_eq!(match_fallback("你好"), Some(3));
    }

    #[test]
    fn empty_input_matches_nothing() {
        assert_eq!(match_character(""), None);
        assert_eq!(match_fallback(""), None);
    }
}
