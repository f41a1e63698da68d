//! ANSI escape sequence matching.
//!
//! Finds the extent of an escape sequence at the start of the input so the
//! whole sequence becomes one segment. Handles:
//! - CSI sequences: `ESC [` (or 8-bit `0x9B`) ... final byte (0x40-0x7E)
//! - OSC sequences: `ESC ]` ... BEL (0x07) or ST (ESC \)
//! - DCS/PM/APC sequences: `ESC P`/`ESC ^`/`ESC _` ... ST
//! - Charset designators: `ESC (`/`ESC )`/`ESC #` + one char
//! - Two-character sequences: `ESC` + single char

const ESC: u8 = 0x1B;
const C1_CSI: char = '\u{9B}';

/// Byte length of the control sequence at the start of `s`, if any.
pub(super) fn match_control_sequence(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    match bytes.first() {
        Some(&ESC) => Some(skip_escape_sequence(s, 0)),
        _ if s.starts_with(C1_CSI) => Some(skip_csi(bytes, C1_CSI.len_utf8())),
        _ => None,
    }
}

/// Skip an escape sequence starting at `pos` (which points to ESC byte).
/// Returns the byte index after the complete sequence.
fn skip_escape_sequence(s: &str, pos: usize) -> usize {
    let bytes = s.as_bytes();
    let next = pos + 1;
    if next >= bytes.len() {
        return bytes.len();
    }

    match bytes[next] {
        b'[' => skip_csi(bytes, next + 1),
        b']' => skip_string_terminated(bytes, next + 1),
        b'P' | b'^' | b'_' => skip_string_terminated(bytes, next + 1),
        b'(' | b')' | b'#' => next_char_end(s, next + 1),
        _ => next_char_end(s, next), // Two-character sequence
    }
}

/// End of the char starting at `pos`, or the end of input.
///
/// Keeps segment boundaries on UTF-8 boundaries when an escape introducer is
/// followed by a multi-byte char.
fn next_char_end(s: &str, pos: usize) -> usize {
    s.get(pos..)
        .and_then(|rest| rest.chars().next())
        .map_or(s.len(), |c| pos + c.len_utf8())
}

/// Skip a CSI sequence. `pos` is the byte after `[`.
///
/// CSI format: parameter bytes (0x30-0x3F), intermediate bytes (0x20-0x2F),
/// final byte (0x40-0x7E).
fn skip_csi(bytes: &[u8], pos: usize) -> usize {
    let len = bytes.len();
    let mut i = pos;

    while i < len {
        let b = bytes[i];
        if (0x40..=0x7E).contains(&b) {
            return i + 1; // Final byte: sequence complete
        }
        if !(0x20..=0x7E).contains(&b) {
            return i; // Invalid byte: sequence ends before it
        }
        i += 1;
    }

    len // Unterminated: consume all
}

/// Skip a string-terminated sequence (OSC, DCS, PM, APC).
/// `pos` is the byte after the type indicator.
///
/// Terminates with BEL (0x07) or ST (ESC \).
fn skip_string_terminated(bytes: &[u8], pos: usize) -> usize {
    let len = bytes.len();
    let mut i = pos;

    while i < len {
        match bytes[i] {
            0x07 => return i + 1,
            ESC if i + 1 < len && bytes[i + 1] == b'\\' => return i + 2,
            _ => i += 1,
        }
    }

    len // Unterminated: consume all
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched(s: &str) -> Option<&str> {
        match_control_sequence(s).map(|n| &s[..n])
    }

    #[test]
    fn plain_text_is_not_a_sequence() {
        assert_eq!(matched("hello"), None);
        assert_eq!(matched(""), None);
        assert_eq!(matched("a\x1b[31m"), None);
    }

    #[test]
    fn csi_color() {
        assert_eq!(matched("\x1b[31mred\x1b[0m"), Some("\x1b[31m"));
    }

    #[test]
    fn csi_truecolor() {
        assert_eq!(matched("\x1b[38;2;255;0;0mred"), Some("\x1b[38;2;255;0;0m"));
    }

    #[test]
    fn csi_eight_bit_introducer() {
        assert_eq!(matched("\u{9B}1mbold"), Some("\u{9B}1m"));
    }

    #[test]
    fn osc_hyperlink() {
        let s = "\x1b]8;;https://example.com\x07click";
        assert_eq!(matched(s), Some("\x1b]8;;https://example.com\x07"));
    }

    #[test]
    fn osc_with_st_terminator() {
        assert_eq!(matched("\x1b]0;window title\x1b\\text"), Some("\x1b]0;window title\x1b\\"));
    }

    #[test]
    fn dcs_sequence() {
        assert_eq!(matched("\x1bPdata\x1b\\after"), Some("\x1bPdata\x1b\\"));
    }

    #[test]
    fn charset_designator() {
        assert_eq!(matched("\x1b(Btext"), Some("\x1b(B"));
    }

    #[test]
    fn two_char_sequence() {
        assert_eq!(matched("\x1b=normal"), Some("\x1b="));
    }

    #[test]
    fn two_char_sequence_keeps_utf8_boundary() {
        assert_eq!(matched("\x1bé rest"), Some("\x1bé"));
    }

    #[test]
    fn bare_esc_at_end() {
        assert_eq!(matched("\x1b"), Some("\x1b"));
    }

    #[test]
    fn unterminated_sequences_consume_rest() {
        assert_eq!(matched("\x1b[31"), Some("\x1b[31"));
        assert_eq!(matched("\x1b]8;;url"), Some("\x1b]8;;url"));
    }

    #[test]
    fn csi_stops_before_invalid_byte() {
        assert_eq!(matched("\x1b[3\n1m"), Some("\x1b[3"));
        assert_eq!(matched("\x1b[你"), Some("\x1b["));
    }
}
