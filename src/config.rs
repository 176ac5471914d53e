use std::borrow::Cow;
use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::de::{decode_record, parse};
use crate::error::Result;
use crate::record::Record;
use crate::ser::encode::Encoding;
use crate::ser::encode_record;
use crate::values::Values;

/// Annotation family read when no other is configured.
///
/// Sharing the family with JSON means a record annotated for JSON maps to
/// the same wire names in querystrings.
pub const DEFAULT_TAG: &str = "json";

/// Configuration for encoding and decoding records.
///
/// A `Config` is a plain value: build it once and share it between threads,
/// every call only reads it.
///
/// ## Annotation family
///
/// Fields carry annotations keyed by family (`#[json = "..."]`,
/// `#[qs = "..."]`). `tag` selects the family that decides wire names.
/// Fields without an annotation in that family use their identifier.
///
/// Default value: `tag = "json"`
///
/// ```
/// use urlparam::Config;
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Report {
///     busi_type: i32,
/// }
///
/// urlparam::impl_record! {
///     Report {
///         #[json = "busi_type,omitempty", qs = "bt"]
///         busi_type: i32,
///     }
/// }
///
/// let report = Report { busi_type: 7 };
/// assert_eq!(Config::default().marshal(&report).unwrap(), "busi_type=7");
/// assert_eq!(Config::new().tag("qs").marshal(&report).unwrap(), "bt=7");
/// ```
///
/// ## Strict mode
///
/// By default text that does not parse as the field's kind decodes to the
/// zero value. With `strict` enabled it is reported as
/// [`Error::InvalidValue`](crate::Error::InvalidValue) instead, and encoding
/// a field of unsupported type fails rather than producing an empty value.
///
/// ```
/// use urlparam::{Config, Error};
///
/// # #[derive(Debug, Default, PartialEq)]
/// # struct Report {
/// #     busi_type: i32,
/// # }
/// # urlparam::impl_record! {
/// #     Report {
/// #         busi_type: i32,
/// #     }
/// # }
/// let mut report = Report::default();
/// Config::default().unmarshal("busi_type=abc", &mut report).unwrap();
/// assert_eq!(report.busi_type, 0);
///
/// let err = Config::new().strict(true).unmarshal("busi_type=abc", &mut report);
/// assert!(matches!(err, Err(Error::InvalidValue { .. })));
/// ```
///
/// ## Loading
///
/// `Config` deserializes from any serde format; missing fields keep their
/// defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub(crate) tag: Cow<'static, str>,
    pub(crate) strict: bool,
    pub(crate) encoding: Encoding,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub const fn new() -> Self {
        Self {
            tag: Cow::Borrowed(DEFAULT_TAG),
            strict: false,
            encoding: Encoding::Form,
        }
    }

    /// Selects the annotation family used to resolve wire names.
    pub fn tag(mut self, tag: impl Into<Cow<'static, str>>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Reject text that does not coerce into a field's kind.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Specifies how keys and values are percent-encoded by
    /// [`marshal`](Config::marshal). Decoding accepts either form.
    pub fn encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn annotation_family(&self) -> &str {
        &self.tag
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Encodes `record` into [`Values`] using this `Config`.
    pub fn encode<R: Record>(&self, record: &R) -> Result<Values> {
        encode_record(record, self)
    }

    /// Decodes `values` into `record` using this `Config`.
    ///
    /// On error, fields decoded before the failing one keep their new values.
    pub fn decode<R: Record>(&self, values: &Values, record: &mut R) -> Result<()> {
        decode_record(values, record, self)
    }

    /// Serializes `record` to a querystring using this `Config`.
    pub fn marshal<R: Record>(&self, record: &R) -> Result<String> {
        Ok(self.encode(record)?.encode_with(self.encoding))
    }

    /// Serializes `record` to a writer using this `Config`.
    pub fn marshal_to_writer<R: Record, W: Write>(&self, record: &R, writer: &mut W) -> Result<()> {
        writer.write_all(self.marshal(record)?.as_bytes())?;
        Ok(())
    }

    /// Parses `input` and decodes it into `record` using this `Config`.
    pub fn unmarshal<R: Record>(&self, input: &str, record: &mut R) -> Result<()> {
        self.unmarshal_bytes(input.as_bytes(), record)
    }

    /// Parses `input` and decodes it into `record` using this `Config`.
    pub fn unmarshal_bytes<R: Record>(&self, input: &[u8], record: &mut R) -> Result<()> {
        let values = parse::parse(input)?;
        self.decode(&values, record)
    }

    /// Parses `input` into a fresh `R::default()` using this `Config`.
    pub fn deserialize_str<R: Record + Default>(&self, input: &str) -> Result<R> {
        let mut record = R::default();
        self.unmarshal(input, &mut record)?;
        Ok(record)
    }
}
