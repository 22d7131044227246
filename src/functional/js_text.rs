//! Browser string semantics
//!
//! Form values arrive from a browser, where string length, whitespace and
//! line boundaries follow ECMAScript rules rather than Rust's. These helpers
//! reproduce those rules so validation gives identical answers on both sides.

/// Body of a regex character class matching ECMAScript `\s`.
///
/// Rust's `\s` is the Unicode `White_Space` property, which includes U+0085
/// and excludes U+FEFF; ECMAScript is the other way round.
pub const WHITESPACE_CLASS: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

/// Returns `true` for characters ECMAScript treats as whitespace or line terminators.
///
/// # Examples
///
/// ```
/// assert!(is_js_whitespace('\u{FEFF}'));
/// assert!(!is_js_whitespace('\u{0085}'));
/// ```
pub fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Returns `true` for characters that end a line for ECMAScript's `.` atom.
pub fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Equivalent of `String.prototype.trim`.
pub fn js_trim(value: &str) -> &str {
    value.trim_matches(is_js_whitespace)
}

/// Equivalent of `String.prototype.length`: the number of UTF-16 code units.
///
/// # Examples
///
/// ```
/// assert_eq!(utf16_len("ab"), 2);
/// assert_eq!(utf16_len("\u{1F600}"), 2);
/// ```
pub fn utf16_len(value: &str) -> usize {
    value.chars().map(char::len_utf16).sum()
}

/// Splits `value` into the segments a non-multiline `.*` can span.
pub fn js_lines(value: &str) -> impl Iterator<Item = &str> {
    value.split(is_line_terminator)
}
