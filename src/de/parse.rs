//! Querystring tokenizer.
//!
//! Splits `key=value&key=value` text into [`Values`]. Keys and values are
//! unescaped, repeated keys keep every value in order, and the first value is
//! what the decoder reads.

use crate::error::{Error, Result};
use crate::values::Values;

mod decode;

/// Parses a querystring into [`Values`].
///
/// - pairs are separated by `&`, empty pairs are skipped
/// - the first `=` splits key from value, a pair without `=` has an empty value
/// - `+` decodes to a space and `%XX` to the escaped byte
///
/// A `;` inside a pair, an invalid `%` escape, or escaped bytes that do not
/// form UTF-8 are errors.
pub fn parse(encoded: &[u8]) -> Result<Values> {
    let mut values = Values::new();
    let mut parser = Parser::new(encoded);
    while let Some((key, value)) = parser.next_pair()? {
        values.add(key, value);
    }
    Ok(values)
}

/// Walks the querystring one `&`-separated segment at a time, keeping the
/// byte offset of the current segment for error positions.
struct Parser<'qs> {
    inner: &'qs [u8],
    index: usize,
}

impl<'qs> Parser<'qs> {
    fn new(encoded: &'qs [u8]) -> Self {
        Parser {
            inner: encoded,
            index: 0,
        }
    }

    /// Returns the next non-empty segment and its starting offset.
    fn next_segment(&mut self) -> Option<(&'qs [u8], usize)> {
        while self.index < self.inner.len() {
            let start = self.index;
            let rest = &self.inner[start..];
            let len = rest.iter().position(|&b| b == b'&').unwrap_or(rest.len());
            // skip over the separator as well
            self.index = start + len + 1;
            if len > 0 {
                return Some((&rest[..len], start));
            }
        }
        None
    }

    fn next_pair(&mut self) -> Result<Option<(String, String)>> {
        let Some((segment, start)) = self.next_segment() else {
            return Ok(None);
        };

        if let Some(pos) = segment.iter().position(|&b| b == b';') {
            return Err(Error::parse_err(
                "invalid semicolon separator in query",
                start + pos,
            ));
        }

        let (key, value, value_start) = match segment.iter().position(|&b| b == b'=') {
            Some(eq) => (&segment[..eq], &segment[eq + 1..], start + eq + 1),
            None => (segment, &segment[segment.len()..], start + segment.len()),
        };

        let key = decode::decode(key, start)?;
        let value = decode::decode(value, value_start)?;
        Ok(Some((key.into_owned(), value.into_owned())))
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::parse;
    use crate::Values;

    fn pairs(values: &Values) -> Vec<(&str, Vec<&str>)> {
        let mut pairs: Vec<_> = values
            .iter()
            .map(|(k, v)| (k, v.iter().map(String::as_str).collect()))
            .collect();
        pairs.sort();
        pairs
    }

    #[test]
    fn parse_empty() {
        assert_eq!(parse(b"").unwrap(), Values::new());
        assert_eq!(parse(b"&&").unwrap(), Values::new());
    }

    #[test]
    fn parse_flat() {
        let parsed = parse(b"uid=2222&busi_type=1").unwrap();
        assert_eq!(
            pairs(&parsed),
            vec![("busi_type", vec!["1"]), ("uid", vec!["2222"])]
        );
    }

    #[test]
    fn parse_no_value() {
        let parsed = parse(b"flag&empty=&=orphan").unwrap();
        assert_eq!(parsed.get("flag"), Some(""));
        assert_eq!(parsed.get("empty"), Some(""));
        assert_eq!(parsed.get(""), Some("orphan"));
    }

    #[test]
    fn parse_repeated_keys() {
        let parsed = parse(b"a=1&b=x&a=2").unwrap();
        assert_eq!(parsed.get("a"), Some("1"));
        assert_eq!(parsed.get_all("a"), &["1".to_owned(), "2".to_owned()][..]);
    }

    #[test]
    fn parse_value_with_equals() {
        let parsed = parse(b"expr=a%3Db=c").unwrap();
        assert_eq!(parsed.get("expr"), Some("a=b=c"));
    }

    #[test]
    fn parse_encoded() {
        let parsed = parse(b"first+name=Carrot+City&cheese=comt%C3%A9&x%5B0%5D=1").unwrap();
        assert_eq!(parsed.get("first name"), Some("Carrot City"));
        assert_eq!(parsed.get("cheese"), Some("comté"));
        // brackets carry no meaning in flat querystrings
        assert_eq!(parsed.get("x[0]"), Some("1"));
    }

    #[test]
    fn parse_semicolon() {
        let err = parse(b"a=1;b=2").unwrap_err();
        assert_eq!(
            err.to_string(),
            "parsing failed with error: 'invalid semicolon separator in query' at position: 3"
        );
    }

    #[test]
    fn parse_invalid_escape_position() {
        let err = parse(b"ok=1&bad=%zz").unwrap_err();
        assert_eq!(
            err.to_string(),
            "parsing failed with error: 'invalid URL escape \"%zz\"' at position: 9"
        );

        let err = parse(b"ok=1&b%g=1").unwrap_err();
        assert!(err.to_string().ends_with("at position: 6"), "got: {err}");
    }
}
