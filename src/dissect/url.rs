//! URL matching.
//!
//! Recognizes, anchored at the start of the input:
//! - scheme URLs: `https://example.com/path`, `ftp://files.example.net`
//! - protocol-relative URLs: `//cdn.example.com/lib.js`
//! - `www.` hosts: `www.example.com`
//! - bare hosts: `example.org/docs?q=1`, `localhost:8080`, `[::1]:3000`
//!
//! With or without a scheme, a host must be `localhost`, an IPv4 or bracketed
//! IPv6 address, or a domain on a known TLD. `//comment` and `dir//file` are
//! not URLs. Trailing sentence punctuation (`.`, `,`, `)` ...) is left out of
//! the match.

use std::sync::LazyLock;

use regex::Regex;

/// Top-level domains accepted on domain hosts.
const COMMON_TLDS: &str = "com|org|net|edu|gov|mil|int|info|biz|name|pro|io|dev|app|ai|co|me|\
xyz|tech|site|online|blog|page|cloud|uk|us|ca|au|nz|de|fr|it|es|nl|be|ch|at|se|no|dk|fi|\
pl|cz|pt|ie|ru|ua|jp|cn|kr|tw|hk|sg|in|br|mx|ar|za|eu|tv|cc|ly|gg|sh|to|fm|gl";

/// Any character allowed inside a URL.
const PATH_CHAR: &str = r#"[^\s<>"]"#;
/// Characters a URL may end with: no trailing sentence punctuation.
const PATH_END: &str = r#"[^\s<>".,;:!?)\]'}]"#;

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    let tail = format!("(?:{PATH_CHAR}*{PATH_END})?");
    let pattern = format!(
        concat!(
            "(?i)^(?:",
            // www.host
            r"www\.{path}*{end}",
            "|",
            // [scheme:]//, optional for bare hosts
            r"(?:(?:[a-z][a-z0-9+.\-]*:)?//)?",
            // [user[:pass]@]
            r"(?:[^\s:@/]+(?::[^\s@/]*)?@)?",
            // localhost | ipv4 | host.tld | [ipv6]
            r"(?:(?:localhost|(?:\d{{1,3}}\.){{3}}\d{{1,3}}|(?:[a-z0-9](?:[a-z0-9\-]*[a-z0-9])?\.)+(?:{tlds}))\b",
            r"|\[[0-9a-f]*:[0-9a-f:.]*\])",
            // [:port][/path]
            r"(?::\d{{2,5}})?",
            r"(?:[/?#]{tail})?",
            ")"
        ),
        path = PATH_CHAR,
        end = PATH_END,
        tail = tail,
        tlds = COMMON_TLDS,
    );
    Regex::new(&pattern).expect("URL pattern is valid")
});

/// Byte length of the URL at the start of `s`, if any.
pub(super) fn match_url(s: &str) -> Option<usize> {
    URL_RE.find(s).map(|m| m.end())
}
