//! Percent-encoding of readable RSQL for use in a URL query parameter.
//!
//! Follows URL-component rules (ASCII alphanumerics and `-_.!~*'()` stay as
//! they are, everything else becomes `%XX` per UTF-8 byte) with an extra set
//! of characters that is always encoded.

use crate::error::{RsqlError, RsqlResult};

/// Punctuation left alone by URL-component encoding.
pub const COMPONENT_SAFE: &str = "-_.!~*'()";

/// Characters the RSQL encoder always encodes, on top of the component rules.
pub const RSQL_UNSAFE: &str = "=:,;\"'<>#";

/// A configurable percent-encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlEncoder {
    extra_unsafe: String,
    strict: bool,
}

impl UrlEncoder {
    /// Create an encoder that additionally encodes every char in `extra_unsafe`.
    ///
    /// In strict mode every `%` is encoded. Otherwise a `%` that already
    /// starts a valid `%XX` escape is copied through unchanged.
    pub fn new(extra_unsafe: impl Into<String>, strict: bool) -> Self {
        Self {
            extra_unsafe: extra_unsafe.into(),
            strict,
        }
    }

    /// The encoder used for RSQL query values: [`RSQL_UNSAFE`], lenient.
    pub fn rsql() -> Self {
        Self::new(RSQL_UNSAFE, false)
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    fn keeps(&self, c: char) -> bool {
        !self.extra_unsafe.contains(c) && (c.is_ascii_alphanumeric() || COMPONENT_SAFE.contains(c))
    }

    /// Percent-encode `text`.
    pub fn encode(&self, text: &str) -> String {
        let bytes = text.as_bytes();
        let mut out = String::with_capacity(text.len() * 3 / 2);
        let mut chars = text.char_indices();

        while let Some((i, c)) = chars.next() {
            if c == '%' && !self.strict && is_escape(&bytes[i..]) {
                // Both hex digits are ASCII, so this slice is on char boundaries
                out.push_str(&text[i..i + 3]);
                chars.next();
                chars.next();
                continue;
            }

            if self.keeps(c) {
                out.push(c);
            } else if c.is_ascii() {
                out.push_str(&format!("%{:02X}", c as u8));
            } else {
                let mut buf = [0u8; 4];
                out.push_str(&urlencoding::encode(c.encode_utf8(&mut buf)));
            }
        }

        out
    }
}

impl Default for UrlEncoder {
    fn default() -> Self {
        Self::rsql()
    }
}

/// `%` followed by two hex digits.
fn is_escape(bytes: &[u8]) -> bool {
    bytes.len() >= 3 && bytes[1].is_ascii_hexdigit() && bytes[2].is_ascii_hexdigit()
}

/// Percent-encode readable RSQL with the RSQL encoder.
pub fn encode(text: &str) -> String {
    UrlEncoder::rsql().encode(text)
}

/// Reverse percent-encoding.
pub fn decode(text: &str) -> RsqlResult<String> {
    urlencoding::decode(text)
        .map(|s| s.into_owned())
        .map_err(|e| RsqlError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_structural_chars_encoded() {
        assert_eq!(encode("a==1;(b==2,c==3)"), "a%3D%3D1%3B(b%3D%3D2%2Cc%3D%3D3)");
    }

    #[test]
    fn test_rsql_extra_set() {
        assert_eq!(encode("=:,;\"'<>#"), "%3D%3A%2C%3B%22%27%3C%3E%23");
    }

    #[test]
    fn test_component_safe_kept() {
        assert_eq!(encode("Az09-_.!~*()"), "Az09-_.!~*()");
    }

    #[test]
    fn test_other_ascii_encoded() {
        assert_eq!(encode("a b/c?d&e+f@g$h"), "a%20b%2Fc%3Fd%26e%2Bf%40g%24h");
        assert_eq!(encode(r"C:\x"), "C%3A%5Cx");
    }

    #[test]
    fn test_non_ascii_utf8_bytes() {
        assert_eq!(encode("café"), "caf%C3%A9");
        assert_eq!(encode("日"), "%E6%97%A5");
    }

    #[test]
    fn test_lenient_keeps_valid_escapes() {
        assert_eq!(encode("50%25"), "50%25");
        assert_eq!(encode("%2f%2F"), "%2f%2F");
        assert_eq!(encode("100%"), "100%25");
        assert_eq!(encode("%zz"), "%25zz");
        assert_eq!(encode("%2"), "%252");
    }

    #[test]
    fn test_lenient_is_stable_on_encoded_text() {
        let once = encode("name=='John Doe'");
        assert_eq!(encode(&once), once);
    }

    #[test]
    fn test_strict_encodes_every_percent() {
        let strict = UrlEncoder::new(RSQL_UNSAFE, true);
        assert!(strict.is_strict());
        assert_eq!(strict.encode("50%25"), "50%2525");
    }

    #[test]
    fn test_custom_extra_set() {
        let enc = UrlEncoder::new("*", false);
        assert_eq!(enc.encode("a*b'c"), "a%2Ab'c");
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode("a%3D%3D1%3B(b%3D%3D2)").unwrap(), "a==1;(b==2)");
        assert_eq!(decode("caf%C3%A9").unwrap(), "café");
        assert!(decode("%FF").is_err());
    }
}
