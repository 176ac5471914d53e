//! Map flat URL querystrings to annotated records and back.
//!
//! `urlparam` converts between the `key=value&key=value` text of a URL query
//! and plain Rust structs. Which key a field maps to is decided by a naming
//! annotation on the field, read from a configurable annotation family. The
//! default family is `json`, so a record annotated for JSON
//! (`busi_type,omitempty`, `-`, ...) uses the same wire names in
//! querystrings.
//!
//! ## Supported Types
//!
//! Records are flat: every mapped field is a `String`, a `bool`, a signed or
//! unsigned integer of any width, or a float. Fields of any other type are
//! rejected when decoding with [`Error::UnsupportedType`]. Nested records,
//! sequences and repeated keys are not supported; for nested querystrings
//! use a bracket-notation format instead.
//!
//! ## Annotations
//!
//! - `#[json = "name"]` maps the field to `name`
//! - `#[json = "name,omitempty"]` maps to `name`; options after the comma
//!   are ignored here and left for other consumers of the annotation
//! - `#[json = "-"]` excludes the field
//! - no annotation, or an empty name, maps the field to its identifier
//!
//! ## Usage
//!
//! ```
//! #[derive(Debug, Default, PartialEq)]
//! #[allow(non_snake_case)]
//! struct UserReportParams {
//!     BusiType: i32,
//!     UID: String,
//!     ActionType: i32,
//!     FeedsIndex: u32,
//!     AdposID: String,
//! }
//!
//! urlparam::impl_record! {
//!     UserReportParams {
//!         #[json = "busi_type,omitempty"]
//!         BusiType: i32,
//!         #[json = "uid"]
//!         UID: String,
//!         ActionType: i32,
//!         #[json = "feeds_index"]
//!         FeedsIndex: u32,
//!         #[json = "-"]
//!         AdposID: String,
//!     }
//! }
//!
//! let params = UserReportParams {
//!     BusiType: 1,
//!     UID: "2222".to_string(),
//!     ActionType: -666,
//!     FeedsIndex: 7777,
//!     AdposID: "aaaaa".to_string(),
//! };
//! let query = urlparam::marshal(&params).unwrap();
//! # #[cfg(not(feature = "indexmap"))]
//! assert_eq!(query, "ActionType=-666&busi_type=1&feeds_index=7777&uid=2222");
//! # #[cfg(feature = "indexmap")]
//! # assert_eq!(query, "busi_type=1&uid=2222&ActionType=-666&feeds_index=7777");
//!
//! let mut decoded = UserReportParams::default();
//! urlparam::unmarshal(&query, &mut decoded).unwrap();
//! assert_eq!(decoded, UserReportParams { AdposID: String::new(), ..params });
//! ```
//!
//! Decoding is lenient by default: a value that does not parse as the
//! field's type, or a missing key, leaves the field at its zero value. Use
//! [`Config::strict`] to reject unparsable values instead.

mod config;
mod de;
mod error;
mod map;
mod record;
mod ser;
pub mod tag;
mod values;

#[cfg(feature = "axum")]
pub mod axum;
#[cfg(feature = "axum")]
mod web;

#[doc(inline)]
pub use config::{Config, DEFAULT_TAG};
#[doc(inline)]
pub use de::{decode, from_bytes, from_reader, from_str, parse_query, unmarshal};
pub use error::{Error, Result};
#[doc(inline)]
pub use record::{Field, FieldType, Kind, Record, Scalar};
#[doc(inline)]
pub use ser::encode::Encoding;
#[doc(inline)]
pub use ser::{encode, marshal, to_string, to_writer};
pub use values::Values;
