//! HTML entity encoding for attribute values.
//!
//! Characters with special meaning in markup (`"`, `&`, `'`, `<`, `>` and the
//! backtick) and every character outside printable ASCII are written as
//! uppercase hexadecimal character references (`<` becomes `&#x3C;`).
//! NUL, line feed and carriage return pass through unchanged, as do the C1
//! controls that browsers remap (all of U+0080..U+009F except U+0081,
//! U+008D, U+008F, U+0090 and U+009D).

use std::borrow::Cow;
use std::fmt::Write;

/// Encodes `s` for use inside a double-quoted attribute value.
///
/// Returns a borrowed reference if nothing needs escaping.
///
/// ```rust
/// use attrset::escape::encode;
///
/// assert_eq!(encode("<br />"), "&#x3C;br /&#x3E;");
/// assert_eq!(encode("café"), "caf&#xE9;");
/// assert_eq!(encode("plain"), "plain");
/// ```
pub fn encode(s: &str) -> Cow<'_, str> {
    let Some(first) = s.find(needs_escape) else {
        return Cow::Borrowed(s);
    };

    let mut escaped = String::with_capacity(s.len() + 16);
    escaped.push_str(&s[..first]);
    for c in s[first..].chars() {
        if needs_escape(c) {
            // Writing into a String cannot fail.
            let _ = write!(escaped, "&#x{:X};", u32::from(c));
        } else {
            escaped.push(c);
        }
    }
    Cow::Owned(escaped)
}

fn needs_escape(c: char) -> bool {
    match c {
        '"' | '&' | '\'' | '<' | '>' | '`' => true,
        '\0' | '\n' | '\r' => false,
        '\u{01}'..='\u{1F}' | '\u{7F}' => true,
        ' '..='~' => false,
        '\u{81}' | '\u{8D}' | '\u{8F}' | '\u{90}' | '\u{9D}' => true,
        '\u{80}'..='\u{9F}' => false,
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use html_escape::decode_html_entities;

    #[test]
    fn no_special_chars_borrows() {
        assert!(matches!(encode("Hello World"), Cow::Borrowed(_)));
        assert!(matches!(encode(""), Cow::Borrowed(_)));
    }

    #[test]
    fn markup_characters() {
        assert_eq!(encode("<br />"), "&#x3C;br /&#x3E;");
        assert_eq!(encode("\"lorem ipsum\""), "&#x22;lorem ipsum&#x22;");
        assert_eq!(encode("a & b"), "a &#x26; b");
        assert_eq!(encode("it's"), "it&#x27;s");
        assert_eq!(encode("`x`"), "&#x60;x&#x60;");
    }

    #[test]
    fn non_ascii_uses_code_points() {
        assert_eq!(encode("é"), "&#xE9;");
        assert_eq!(encode("\u{A0}"), "&#xA0;");
        assert_eq!(encode("日本"), "&#x65E5;&#x672C;");
        assert_eq!(encode("😀"), "&#x1F600;");
    }

    #[test]
    fn control_characters() {
        assert_eq!(encode("a\tb"), "a&#x9;b");
        assert_eq!(encode("a\nb\rc"), "a\nb\rc");
        assert_eq!(encode("\u{7F}"), "&#x7F;");
        assert_eq!(encode("\u{81}\u{80}"), "&#x81;\u{80}");
    }

    #[test]
    fn decoding_restores_input() {
        for input in [
            "<br />",
            "\"quoted\" & 'single'",
            "naïve café ✓ 😀 𝄞",
            "tab\there",
            "<script>alert(`x`)</script>",
        ] {
            let encoded = encode(input);
            assert_eq!(decode_html_entities(&encoded), input);
        }
    }

    #[test]
    fn output_has_no_raw_markup() {
        let encoded = encode("<a href=\"x\">'&'</a>");
        assert!(!encoded.contains(['<', '>', '"', '\'']));
    }
}
