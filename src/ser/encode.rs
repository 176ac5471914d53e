use std::borrow::Cow;

use percent_encoding::AsciiSet;
use serde::{Deserialize, Serialize};

/// Percent-encoding applied to keys and values when writing a querystring.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    /// Escape everything except ASCII alphanumerics and `-`, `_`, `.`, `~`.
    ///
    /// This is the escaping used for URL query components by most HTTP
    /// stacks, e.g. `a b&c` becomes `a+b%26c`.
    #[default]
    Form,
    /// Escape only what a query component strictly requires, plus the
    /// characters with a meaning inside querystrings (`+`, `&`, `;`, `=`, `[`,
    /// `]`).
    ///
    /// Produces more readable output, e.g. `a/b:c` stays as is.
    Query,
}

/// As defined in https://url.spec.whatwg.org/#query-percent-encode-set
///
/// The set of characters that need to be encoded in a _query_ string
/// are:
/// - CONTROL characters
/// - SPACE (but we'll separately encode it as `+`)
/// - U+0022 ("), U+0023 (#), U+003C (<), and U+003E (>).
///
/// NOTE: we add our querystring-specific characters here
/// because the encode method is only ever called on
/// keys and values.
const MINIMAL_QS_SET: &AsciiSet = &percent_encoding::CONTROLS
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    // `+` is used to represent a space in query strings
    .add(b'+')
    .add(b'[')
    .add(b']')
    // key, value separator
    .add(b'=')
    // denote key-value pairs
    .add(b'&')
    // rejected as a pair separator when parsing
    .add(b';')
    // non-ASCII bytes are always escaped by `percent_encode`, `%` is not
    .add(b'%');

/// All code points except the ASCII alphanumerics and the RFC 3986
/// unreserved marks `-`, `.`, `_`, `~`.
///
/// Space is left out of the set and written as `+` afterwards.
const FORM_SET: &AsciiSet = &percent_encoding::NON_ALPHANUMERIC
    .remove(b' ')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Encodes bytes for use in a querystring, applying percent-encoding as needed.
///
/// Spaces are written as `+` in both modes.
///
/// The function returns an iterator to avoid allocations when no encoding is needed.
pub fn encode(b: &[u8], encoding: Encoding) -> impl Iterator<Item = Cow<'_, [u8]>> + '_ {
    let set = match encoding {
        Encoding::Form => FORM_SET,
        Encoding::Query => MINIMAL_QS_SET,
    };
    percent_encoding::percent_encode(b, set).map(|s| {
        if s.as_bytes().contains(&b' ') {
            Cow::Owned(
                s.as_bytes()
                    .iter()
                    .map(|b| if *b == b' ' { b'+' } else { *b })
                    .collect(),
            )
        } else {
            Cow::Borrowed(s.as_bytes())
        }
    })
}

/// Appends the encoded form of `input` to `out`.
pub fn encode_into(out: &mut Vec<u8>, input: &str, encoding: Encoding) {
    for chunk in encode(input.as_bytes(), encoding) {
        out.extend_from_slice(&chunk);
    }
}

#[cfg(test)]
mod test {
    use super::{Encoding, encode_into};

    fn encoded(input: &str, encoding: Encoding) -> String {
        let mut out = Vec::new();
        encode_into(&mut out, input, encoding);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn form_encoding() {
        assert_eq!(encoded("abc-_.~09", Encoding::Form), "abc-_.~09");
        assert_eq!(encoded("a b&c=d", Encoding::Form), "a+b%26c%3Dd");
        assert_eq!(encoded("a/b:c*", Encoding::Form), "a%2Fb%3Ac%2A");
        assert_eq!(encoded("1+1", Encoding::Form), "1%2B1");
        assert_eq!(encoded("é", Encoding::Form), "%C3%A9");
    }

    #[test]
    fn query_encoding() {
        assert_eq!(encoded("a/b:c*", Encoding::Query), "a/b:c*");
        assert_eq!(encoded("a b&c=d", Encoding::Query), "a+b%26c%3Dd");
        assert_eq!(encoded("x[0]#%", Encoding::Query), "x%5B0%5D%23%25");
        assert_eq!(encoded("a;b", Encoding::Query), "a%3Bb");
        assert_eq!(encoded("é", Encoding::Query), "%C3%A9");
    }
}
