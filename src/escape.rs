//! Quoting and escaping of text for diagnostic output.
//!
//! Every text-like value that reaches the printer, whether through a
//! [`PrintTo`](crate::PrintTo) override or through Serde's `serialize_str` and
//! `serialize_bytes`, is rendered by the functions in this module. Sharing one
//! escaper keeps composite output consistent: a `String` inside a `Vec` looks
//! exactly like a `String` printed on its own.
//!
//! ## Escaping rules
//!
//! - The value is wrapped in double quotes (single quotes for a lone `char`)
//! - `\"` (inside strings), `\'` (inside chars) and `\\` are backslash-escaped
//! - `\0 \a \b \t \n \v \f \r` use their C-style short escapes
//! - Other ASCII control bytes and DEL are written as `\xHH`
//! - Non-ASCII control characters are written as `\u{XXXX}`
//! - Bytes that are not valid UTF-8 are written as `\xHH`
//!
//! ## Examples
//!
//! ```rust
//! use printto::escape::{quote_bytes, quote_str};
//!
//! assert_eq!(quote_str("a\"b"), r#""a\"b""#);
//! assert_eq!(quote_str(""), r#""""#);
//! assert_eq!(quote_bytes(b"\xFFok"), r#""\xFFok""#);
//! assert_eq!(quote_bytes(b"same"), quote_str("same"));
//! ```

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

#[derive(Clone, Copy, PartialEq, Eq)]
enum Quote {
    Double,
    Single,
}

impl Quote {
    #[inline]
    const fn as_char(self) -> char {
        match self {
            Quote::Double => '"',
            Quote::Single => '\'',
        }
    }
}

#[inline]
fn push_hex_byte(output: &mut String, byte: u8) {
    output.push_str("\\x");
    output.push(HEX_DIGITS[(byte >> 4) as usize] as char);
    output.push(HEX_DIGITS[(byte & 0x0F) as usize] as char);
}

#[inline]
fn push_escaped_char(output: &mut String, ch: char, quote: Quote) {
    match ch {
        '"' if quote == Quote::Double => output.push_str("\\\""),
        '\'' if quote == Quote::Single => output.push_str("\\'"),
        '\\' => output.push_str("\\\\"),
        '\0' => output.push_str("\\0"),
        '\u{0007}' => output.push_str("\\a"),
        '\u{0008}' => output.push_str("\\b"),
        '\t' => output.push_str("\\t"),
        '\n' => output.push_str("\\n"),
        '\u{000B}' => output.push_str("\\v"),
        '\u{000C}' => output.push_str("\\f"),
        '\r' => output.push_str("\\r"),
        // ASCII controls and DEL; the cast is lossless for ASCII
        c if c.is_ascii_control() => push_hex_byte(output, c as u8),
        c if c.is_control() => output.push_str(&format!("\\u{{{:04X}}}", c as u32)),
        c => output.push(c),
    }
}

fn push_escaped_str(output: &mut String, s: &str) {
    output.reserve(s.len());
    for ch in s.chars() {
        push_escaped_char(output, ch, Quote::Double);
    }
}

/// Writes `s` to `output` as a quoted, escaped string literal.
pub fn write_quoted_str(output: &mut String, s: &str) {
    output.push(Quote::Double.as_char());
    push_escaped_str(output, s);
    output.push(Quote::Double.as_char());
}

/// Writes arbitrary bytes to `output` as a quoted, escaped string literal.
///
/// Runs of valid UTF-8 are escaped exactly like [`write_quoted_str`] would
/// escape them, so text reaching the printer as bytes and text reaching it as
/// `str` produce identical output. Bytes that do not form valid UTF-8 are
/// written as `\xHH`; nothing is ever rejected.
pub fn write_quoted_bytes(output: &mut String, bytes: &[u8]) {
    output.push(Quote::Double.as_char());
    for chunk in bytes.utf8_chunks() {
        push_escaped_str(output, chunk.valid());
        for &byte in chunk.invalid() {
            push_hex_byte(output, byte);
        }
    }
    output.push(Quote::Double.as_char());
}

/// Writes a sequence of characters to `output` as a quoted string literal.
///
/// Used for character buffers (`[char]`, `SmallVec<[char; N]>`) that are
/// text but are not stored as UTF-8.
pub fn write_quoted_chars<I>(output: &mut String, chars: I)
where
    I: IntoIterator<Item = char>,
{
    output.push(Quote::Double.as_char());
    for ch in chars {
        push_escaped_char(output, ch, Quote::Double);
    }
    output.push(Quote::Double.as_char());
}

/// Writes a single character as a quoted `'c'` literal.
pub fn write_quoted_char(output: &mut String, ch: char) {
    output.push(Quote::Single.as_char());
    push_escaped_char(output, ch, Quote::Single);
    output.push(Quote::Single.as_char());
}

/// Returns `s` as a quoted, escaped string literal.
#[must_use]
pub fn quote_str(s: &str) -> String {
    let mut output = String::with_capacity(s.len() + 2);
    write_quoted_str(&mut output, s);
    output
}

/// Returns `bytes` as a quoted, escaped string literal.
#[must_use]
pub fn quote_bytes(bytes: &[u8]) -> String {
    let mut output = String::with_capacity(bytes.len() + 2);
    write_quoted_bytes(&mut output, bytes);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_only_quoted() {
        assert_eq!(quote_str("hello world"), "\"hello world\"");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(quote_str(""), "\"\"");
        assert_eq!(quote_bytes(b""), "\"\"");
    }

    #[test]
    fn test_embedded_quote_and_backslash() {
        assert_eq!(quote_str("a\"b"), "\"a\\\"b\"");
        assert_eq!(quote_str("C:\\dir"), "\"C:\\\\dir\"");
        // single quotes need no escape inside a string literal
        assert_eq!(quote_str("it's"), "\"it's\"");
    }

    #[test]
    fn test_short_escapes() {
        assert_eq!(
            quote_str("\0\u{7}\u{8}\t\n\u{B}\u{C}\r"),
            "\"\\0\\a\\b\\t\\n\\v\\f\\r\""
        );
    }

    #[test]
    fn test_hex_escapes_for_other_controls() {
        assert_eq!(quote_str("\u{1}\u{1B}\u{7F}"), "\"\\x01\\x1B\\x7F\"");
    }

    #[test]
    fn test_unicode_passthrough_and_c1_controls() {
        assert_eq!(quote_str("héllo ✓"), "\"héllo ✓\"");
        assert_eq!(quote_str("\u{85}"), "\"\\u{0085}\"");
    }

    #[test]
    fn test_invalid_utf8_bytes() {
        assert_eq!(quote_bytes(&[0x61, 0xFF, 0xFE, 0x62]), "\"a\\xFF\\xFEb\"");
        // truncated multi-byte sequence
        assert_eq!(quote_bytes(&[0xE2, 0x9C]), "\"\\xE2\\x9C\"");
    }

    #[test]
    fn test_bytes_match_str() {
        let text = "tab\there \"quoted\" \\ ünïcödé \u{1}";
        assert_eq!(quote_bytes(text.as_bytes()), quote_str(text));
    }

    #[test]
    fn test_chars_match_str() {
        let text = "a\"b\nc";
        let mut output = String::new();
        write_quoted_chars(&mut output, text.chars());
        assert_eq!(output, quote_str(text));
    }

    #[test]
    fn test_char_literals() {
        let render = |c| {
            let mut output = String::new();
            write_quoted_char(&mut output, c);
            output
        };
        assert_eq!(render('a'), "'a'");
        assert_eq!(render('\''), "'\\''");
        assert_eq!(render('"'), "'\"'");
        assert_eq!(render('\n'), "'\\n'");
    }

    #[test]
    fn test_requoting_is_not_a_fixed_point() {
        let once = quote_str("a\"b");
        let twice = quote_str(&once);
        assert_ne!(once, twice);
        assert_eq!(twice, "\"\\\"a\\\\\\\"b\\\"\"");
    }
}
