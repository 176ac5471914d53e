//! Decoding query values into records.
//!
//! ### How a field is decoded
//!
//! Every field of the record's table is visited in declaration order. The
//! field's wire name is resolved from the configured annotation family, and
//! the first value stored under that name is looked up. A missing key reads
//! as the empty string, so the field is reset to its zero value.
//!
//! The text is then coerced according to the field's [`Kind`]:
//! strings are assigned verbatim, booleans, integers and floats are parsed
//! leniently (text that does not parse, or does not fit the declared width,
//! yields the zero value unless [`Config::strict`] is set), and any other kind
//! stops decoding with [`Error::UnsupportedType`].
//!
//! Decoding writes fields in place and stops at the first error, so fields
//! visited before a failing one keep their new values.

mod coerce;
pub(crate) mod parse;

use std::borrow::Cow;
use std::io::Read;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::record::{Kind, Record, Scalar};
use crate::values::Values;

/// Decodes `values` into `record` using the default [`Config`].
///
/// ```
/// #[derive(Debug, Default, PartialEq)]
/// struct Query {
///     name: String,
///     age: u8,
///     active: bool,
/// }
///
/// urlparam::impl_record! {
///     Query {
///         name: String,
///         age: u8,
///         #[json = "is_active"]
///         active: bool,
///     }
/// }
///
/// let values: urlparam::Values = "name=Alice&age=24&is_active=true".parse().unwrap();
/// let mut query = Query::default();
/// urlparam::decode(&values, &mut query).unwrap();
/// assert_eq!(query, Query { name: "Alice".into(), age: 24, active: true });
/// ```
pub fn decode<R: Record>(values: &Values, record: &mut R) -> Result<()> {
    Config::default().decode(values, record)
}

/// Parses a querystring and decodes it into `record` using the default
/// [`Config`].
///
/// A malformed querystring is reported before any field is written.
pub fn unmarshal<R: Record>(input: &str, record: &mut R) -> Result<()> {
    Config::default().unmarshal(input, record)
}

/// Parses a querystring into a fresh `R::default()`.
///
/// ```
/// #[derive(Debug, Default, PartialEq)]
/// struct Query {
///     page: u32,
///     lang: String,
/// }
///
/// urlparam::impl_record! {
///     Query {
///         page: u32,
///         lang: String,
///     }
/// }
///
/// let query: Query = urlparam::from_str("page=3&lang=en").unwrap();
/// assert_eq!(query, Query { page: 3, lang: "en".into() });
/// ```
pub fn from_str<R: Record + Default>(input: &str) -> Result<R> {
    Config::default().deserialize_str(input)
}

/// Like [`from_str`], from raw bytes.
pub fn from_bytes<R: Record + Default>(input: &[u8]) -> Result<R> {
    let mut record = R::default();
    Config::default().unmarshal_bytes(input, &mut record)?;
    Ok(record)
}

/// Convenience function that reads all bytes from `reader` and deserializes
/// them with `from_bytes`.
pub fn from_reader<R, T>(mut reader: T) -> Result<R>
where
    R: Record + Default,
    T: Read,
{
    let mut buf = vec![];
    reader.read_to_end(&mut buf)?;
    from_bytes(&buf)
}

/// Parses a querystring into [`Values`].
pub fn parse_query(input: &str) -> Result<Values> {
    parse::parse(input.as_bytes())
}

pub(crate) fn decode_record<R: Record>(
    values: &Values,
    record: &mut R,
    config: &Config,
) -> Result<()> {
    for field in R::fields() {
        let Some(key) = field.wire_name(&config.tag) else {
            continue;
        };
        let text = values.get(key).unwrap_or_else(|| {
            tracing::trace!(key, "query key missing, decoding empty value");
            ""
        });

        let scalar = match field.kind() {
            Kind::String => Some(Scalar::Str(Cow::Borrowed(text))),
            Kind::Bool => coerce::parse_bool(text).map(Scalar::Bool),
            Kind::Int => coerce::parse_int(text).map(Scalar::Int),
            Kind::Uint => coerce::parse_uint(text).map(Scalar::Uint),
            Kind::Float => coerce::parse_float(text).map(Scalar::Float),
            Kind::Unsupported => {
                return Err(Error::unsupported(field.type_name(), text, key));
            }
        };

        if scalar.is_some_and(|scalar| field.set(record, scalar)) {
            continue;
        }

        if config.strict {
            return Err(Error::InvalidValue {
                key: key.to_owned(),
                value: text.to_owned(),
                kind: field.kind(),
            });
        }
        tracing::debug!(
            key,
            value = text,
            kind = %field.kind(),
            "could not coerce query value, using zero value"
        );
        field.set_zero(record);
    }
    Ok(())
}
