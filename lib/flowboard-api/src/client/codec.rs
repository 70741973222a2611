use std::borrow::Cow;
use std::fmt::Debug;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Characters escaped by JavaScript's `encodeURIComponent`: everything except
/// alphanumerics and `- _ . ! ~ * ' ( )`. The generated Angular client encodes
/// path and query components with exactly this set, and servers built against it
/// expect the same wire form.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Encodes and decodes a single path or query key/value pair to its wire form.
///
/// The active codec lives on [`Configuration`](super::Configuration) and is
/// applied to every path substitution and query pair. Implement this trait to
/// interoperate with servers that expect a non-standard encoding.
pub trait ParameterCodec: Debug + Send + Sync {
    /// Encodes a parameter key for the URL.
    fn encode_key<'a>(&self, key: &'a str) -> Cow<'a, str>;

    /// Encodes a parameter value for the URL.
    fn encode_value<'a>(&self, value: &'a str) -> Cow<'a, str>;

    /// Decodes a parameter key from its wire form.
    fn decode_key<'a>(&self, key: &'a str) -> Cow<'a, str>;

    /// Decodes a parameter value from its wire form.
    fn decode_value<'a>(&self, value: &'a str) -> Cow<'a, str>;
}

/// Default codec: percent-encoding with the `encodeURIComponent` character set.
#[derive(Debug, Clone, Copy, Default)]
pub struct PercentCodec;

impl ParameterCodec for PercentCodec {
    fn encode_key<'a>(&self, key: &'a str) -> Cow<'a, str> {
        utf8_percent_encode(key, COMPONENT).into()
    }

    fn encode_value<'a>(&self, value: &'a str) -> Cow<'a, str> {
        utf8_percent_encode(value, COMPONENT).into()
    }

    fn decode_key<'a>(&self, key: &'a str) -> Cow<'a, str> {
        percent_decode_str(key).decode_utf8_lossy()
    }

    fn decode_value<'a>(&self, value: &'a str) -> Cow<'a, str> {
        percent_decode_str(value).decode_utf8_lossy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_preserves_unreserved_marks() {
        let codec = PercentCodec;
        assert_eq!(codec.encode_value("a-b_c.d!e~f*g'h(i)j"), "a-b_c.d!e~f*g'h(i)j");
    }

    #[test]
    fn test_encode_escapes_reserved_characters() {
        let codec = PercentCodec;
        assert_eq!(codec.encode_value("hello world"), "hello%20world");
        assert_eq!(codec.encode_value("a/b?c&d=e"), "a%2Fb%3Fc%26d%3De");
        assert_eq!(codec.encode_key("user@example.com"), "user%40example.com");
    }

    #[test]
    fn test_encode_escapes_utf8() {
        let codec = PercentCodec;
        assert_eq!(codec.encode_value("café"), "caf%C3%A9");
    }

    #[test]
    fn test_decode_round_trip() {
        let codec = PercentCodec;
        let original = "hello world & more/less?";
        let encoded = codec.encode_value(original).into_owned();
        assert_eq!(codec.decode_value(&encoded), original);
    }

    #[test]
    fn test_decode_key_and_value() {
        let codec = PercentCodec;
        assert_eq!(codec.decode_key("a%5Bb%5D"), "a[b]");
        assert_eq!(codec.decode_value("100%25"), "100%");
    }
}
