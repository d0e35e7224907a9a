//! Compact JSON encoding with HTML-safe string escapes.
//!
//! Strings have `<`, `>` and `&` written as `\u003c`, `\u003e` and `\u0026`,
//! and the line and paragraph separators as `\u2028` and `\u2029`. Documents
//! from other writers of the same audit index use these escapes, and the
//! document ID is a hash of the encoded bytes.

use std::io;

use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};

/// Compact formatter that escapes HTML-significant characters in strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlSafeFormatter;

impl Formatter for HtmlSafeFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (i, ch) in fragment.char_indices() {
            let escaped = match ch {
                '<' => "\\u003c",
                '>' => "\\u003e",
                '&' => "\\u0026",
                '\u{2028}' => "\\u2028",
                '\u{2029}' => "\\u2029",
                _ => continue,
            };
            writer.write_all(fragment[start..i].as_bytes())?;
            writer.write_all(escaped.as_bytes())?;
            start = i + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

/// Serialize `value` as compact JSON using [`HtmlSafeFormatter`].
pub fn to_vec<T>(value: &T) -> Result<Vec<u8>, serde_json::Error>
where
    T: ?Sized + Serialize,
{
    let mut buf = Vec::with_capacity(128);
    let mut serializer = Serializer::with_formatter(&mut buf, HtmlSafeFormatter);
    value.serialize(&mut serializer)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn encode(value: &serde_json::Value) -> String {
        String::from_utf8(to_vec(value).unwrap()).unwrap()
    }

    #[test]
    fn test_escapes_html_characters() {
        assert_eq!(
            encode(&json!({"q": "a<b&c>d"})),
            r#"{"q":"a\u003cb\u0026c\u003ed"}"#
        );
    }

    #[test]
    fn test_escapes_line_separators() {
        assert_eq!(
            encode(&json!("one\u{2028}two\u{2029}")),
            r#""one\u2028two\u2029""#
        );
    }

    #[test]
    fn test_escapes_keys() {
        assert_eq!(encode(&json!({"<k>": 1})), r#"{"\u003ck\u003e":1}"#);
    }

    #[test]
    fn test_standard_escapes_unchanged() {
        assert_eq!(
            encode(&json!("quote\" slash\\ tab\t é")),
            "\"quote\\\" slash\\\\ tab\\t é\""
        );
    }

    #[test]
    fn test_compact_output() {
        assert_eq!(
            encode(&json!({"b": [1, 2], "a": {"c": null}})),
            r#"{"a":{"c":null},"b":[1,2]}"#
        );
    }

    #[test]
    fn test_decodes_back_to_same_value() {
        let value = json!({"html": "<script>&amp;</script>", "sep": "\u{2028}"});
        let bytes = to_vec(&value).unwrap();
        assert_eq!(serde_json::from_slice::<serde_json::Value>(&bytes).unwrap(), value);
    }
}
