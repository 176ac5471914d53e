use std::borrow::Cow;

use crate::error::{Error, Result};

#[inline(always)]
fn char_to_digit(c: u8) -> Option<u8> {
    char::from(c).to_digit(16).map(|d| d as u8)
}

/// Decodes one key or value of the querystring:
/// - Replaces `+` with a space
/// - Decodes percent-encoded characters
/// - Converts the result to a UTF-8 string
///
/// `offset` is the position of `input` within the whole querystring and is
/// only used to report the position of an invalid escape.
pub fn decode(input: &[u8], offset: usize) -> Result<Cow<'_, str>> {
    if !input.iter().any(|&b| b == b'+' || b == b'%') {
        return Ok(Cow::Borrowed(std::str::from_utf8(input)?));
    }

    let mut decoded = Vec::with_capacity(input.len());
    let mut idx = 0;

    while idx < input.len() {
        match input[idx] {
            b'+' => {
                decoded.push(b' ');
                idx += 1;
            }
            b'%' => {
                let escape = input.get(idx + 1..idx + 3);
                let digits = escape.and_then(|e| Some((char_to_digit(e[0])?, char_to_digit(e[1])?)));
                let Some((h, l)) = digits else {
                    let end = input.len().min(idx + 3);
                    let escape = String::from_utf8_lossy(&input[idx..end]);
                    return Err(Error::parse_err(
                        format!("invalid URL escape {escape:?}"),
                        offset + idx,
                    ));
                };
                decoded.push(h * 0x10 + l);
                idx += 3;
            }
            b => {
                decoded.push(b);
                idx += 1;
            }
        }
    }

    String::from_utf8(decoded)
        .map(Cow::Owned)
        .map_err(|e| Error::Utf8(e.utf8_error()))
}

#[cfg(test)]
mod test {
    use super::decode;

    #[test]
    fn borrowed_when_nothing_to_decode() {
        let decoded = decode(b"plain", 0).unwrap();
        assert!(matches!(decoded, std::borrow::Cow::Borrowed("plain")));
    }

    #[test]
    fn plus_and_percent() {
        assert_eq!(decode(b"a+b%26c", 0).unwrap(), "a b&c");
        assert_eq!(decode(b"comt%C3%A9", 0).unwrap(), "comté");
        assert_eq!(decode(b"%2b", 0).unwrap(), "+");
    }

    #[test]
    fn invalid_escape() {
        let err = decode(b"ab%zz", 10).unwrap_err();
        assert_eq!(
            err.to_string(),
            "parsing failed with error: 'invalid URL escape \"%zz\"' at position: 12"
        );

        let err = decode(b"ab%4", 0).unwrap_err();
        assert!(err.to_string().contains("\"%4\""), "got: {err}");
    }

    #[test]
    fn invalid_utf8() {
        assert!(matches!(
            decode(b"%FF", 0),
            Err(crate::Error::Utf8(_))
        ));
    }
}
