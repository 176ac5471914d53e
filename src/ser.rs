//! Encoding records into query values.

pub(crate) mod encode;

use std::borrow::Cow;
use std::io::Write;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::record::Record;
use crate::values::Values;

/// Encodes `record` into [`Values`] using the default [`Config`].
///
/// ```
/// #[derive(Debug, Default)]
/// struct Query {
///     name: String,
///     age: u8,
///     secret: String,
/// }
///
/// urlparam::impl_record! {
///     Query {
///         name: String,
///         #[json = "age,omitempty"]
///         age: u8,
///         #[json = "-"]
///         secret: String,
///     }
/// }
///
/// let query = Query { name: "Alice".into(), age: 24, secret: "s3cr3t".into() };
/// let values = urlparam::encode(&query).unwrap();
/// assert_eq!(values.get("name"), Some("Alice"));
/// assert_eq!(values.get("age"), Some("24"));
/// assert!(!values.contains_key("secret"));
/// ```
pub fn encode<R: Record>(record: &R) -> Result<Values> {
    Config::default().encode(record)
}

/// Serializes `record` into a querystring using the default [`Config`].
///
/// ```
/// #[derive(Debug, Default)]
/// struct Query {
///     name: String,
///     age: u8,
///     occupation: String,
/// }
///
/// urlparam::impl_record! {
///     Query {
///         name: String,
///         age: u8,
///         occupation: String,
///     }
/// }
///
/// let q = Query {
///     name: "Alice".to_owned(),
///     age: 24,
///     occupation: "Student".to_owned(),
/// };
///
/// # #[cfg(not(feature = "indexmap"))]
/// assert_eq!(
///     urlparam::marshal(&q).unwrap(),
///     "age=24&name=Alice&occupation=Student");
/// # #[cfg(feature = "indexmap")]
/// # assert_eq!(urlparam::marshal(&q).unwrap(), "name=Alice&age=24&occupation=Student");
/// ```
pub fn marshal<R: Record>(record: &R) -> Result<String> {
    Config::default().marshal(record)
}

/// Alias of [`marshal`].
pub fn to_string<R: Record>(record: &R) -> Result<String> {
    marshal(record)
}

/// Serializes `record` into a generic writer object.
pub fn to_writer<R: Record, W: Write>(record: &R, writer: &mut W) -> Result<()> {
    Config::default().marshal_to_writer(record, writer)
}

pub(crate) fn encode_record<R: Record>(record: &R, config: &Config) -> Result<Values> {
    let mut values = Values::new();
    for field in R::fields() {
        let Some(key) = field.wire_name(&config.tag) else {
            continue;
        };
        let text = match field.get(record) {
            Some(scalar) => scalar.into_text(),
            None if config.strict => {
                return Err(Error::unsupported(field.type_name(), "", key));
            }
            None => {
                tracing::debug!(
                    key,
                    type_name = field.type_name(),
                    "encoding unsupported field as empty value"
                );
                Cow::Borrowed("")
            }
        };
        values.set(key, text);
    }
    tracing::trace!(keys = values.len(), "encoded record");
    Ok(values)
}
