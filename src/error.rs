use std::fmt::Display;
use std::io;
use std::str;

use crate::record::Kind;

/// Errors returned while mapping records to and from query strings.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A field declared with a type outside the supported scalar set.
    ///
    /// Decoding stops at the offending field. Fields that were visited before
    /// it keep the values they were assigned.
    #[error("unsupported type: {type_name}, val: {value:?}, query key: {key}")]
    UnsupportedType {
        type_name: &'static str,
        value: String,
        key: String,
    },

    /// Text that could not be coerced into the field's kind.
    ///
    /// Only raised when [`Config::strict`](crate::Config::strict) is enabled;
    /// the lenient default decodes such text to the zero value instead.
    #[error("invalid value for query key {key}: expected {kind}, got {value:?}")]
    InvalidValue {
        key: String,
        value: String,
        kind: Kind,
    },

    /// Malformed querystring, with the byte position of the failure.
    #[error("parsing failed with error: '{0}' at position: {1}")]
    Parse(String, usize),

    /// Percent-decoded query bytes that are not valid UTF-8.
    #[error(transparent)]
    Utf8(#[from] str::Utf8Error),

    /// Failure reading the querystring or writing the encoded output.
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Generate a parsing error message with position.
    pub fn parse_err<T>(msg: T, position: usize) -> Self
    where
        T: Display,
    {
        Error::Parse(msg.to_string(), position)
    }

    pub(crate) fn unsupported(type_name: &'static str, value: &str, key: &str) -> Self {
        Error::UnsupportedType {
            type_name,
            value: value.to_owned(),
            key: key.to_owned(),
        }
    }
}
