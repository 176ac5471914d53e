//! Records and their field tables.
//!
//! A record is a struct whose fields are described by a static table of
//! [`Field`]s. The table is generated by [`impl_record!`](crate::impl_record)
//! and gives the mapper everything it needs without runtime type
//! introspection: the field identifier, its naming annotations, its [`Kind`],
//! and accessors to read and write it.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt;
use std::io::{Cursor, Write};

use crate::tag;

/// A type that can be mapped to and from flat query values.
///
/// Usually implemented with [`impl_record!`](crate::impl_record). The field
/// table is a `'static` item, so records cannot borrow.
pub trait Record: Sized + 'static {
    /// Fields taking part in the mapping, in declaration order.
    fn fields() -> &'static [Field<Self>];
}

/// The closed set of field kinds understood by the mapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    String,
    Bool,
    /// Signed integers of any width.
    Int,
    /// Unsigned integers of any width.
    Uint,
    Float,
    /// Anything else: sequences, maps, options, nested records.
    Unsupported,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::String => "string",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Uint => "uint",
            Kind::Float => "float",
            Kind::Unsupported => "unsupported",
        };
        f.write_str(name)
    }
}

/// A typed value moving between a record field and the query values.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar<'a> {
    Str(Cow<'a, str>),
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
}

impl<'a> Scalar<'a> {
    /// The zero value of `kind`, or `None` for [`Kind::Unsupported`].
    pub fn zero(kind: Kind) -> Option<Scalar<'static>> {
        Some(match kind {
            Kind::String => Scalar::Str(Cow::Borrowed("")),
            Kind::Bool => Scalar::Bool(false),
            Kind::Int => Scalar::Int(0),
            Kind::Uint => Scalar::Uint(0),
            Kind::Float => Scalar::Float(0.0),
            Kind::Unsupported => return None,
        })
    }

    pub fn kind(&self) -> Kind {
        match self {
            Scalar::Str(_) => Kind::String,
            Scalar::Bool(_) => Kind::Bool,
            Scalar::Int(_) => Kind::Int,
            Scalar::Uint(_) => Kind::Uint,
            Scalar::Float(_) => Kind::Float,
        }
    }

    /// Renders the value as query text.
    ///
    /// Integers are written in base 10 and floats in their shortest
    /// round-trip decimal form, never in exponent notation.
    pub fn into_text(self) -> Cow<'a, str> {
        match self {
            Scalar::Str(s) => s,
            Scalar::Bool(true) => Cow::Borrowed("true"),
            Scalar::Bool(false) => Cow::Borrowed("false"),
            Scalar::Int(v) => Cow::Owned(itoa::Buffer::new().format(v).to_owned()),
            Scalar::Uint(v) => Cow::Owned(itoa::Buffer::new().format(v).to_owned()),
            Scalar::Float(v) => Cow::Owned(v.to_string()),
        }
    }
}

/// Conversion between a field's declared type and [`Scalar`].
///
/// Implemented for the supported scalar types and, as
/// [`Kind::Unsupported`], for common composite types so that records
/// declaring them still compile and fail at decode time.
pub trait FieldType: Sized {
    const KIND: Kind;

    /// `None` when the type has no scalar representation.
    fn to_scalar(&self) -> Option<Scalar<'_>>;

    /// `None` when `scalar` is of another kind or out of range for `Self`.
    fn from_scalar(scalar: Scalar<'_>) -> Option<Self>;
}

impl FieldType for String {
    const KIND: Kind = Kind::String;

    fn to_scalar(&self) -> Option<Scalar<'_>> {
        Some(Scalar::Str(Cow::Borrowed(self)))
    }

    fn from_scalar(scalar: Scalar<'_>) -> Option<Self> {
        match scalar {
            Scalar::Str(s) => Some(s.into_owned()),
            _ => None,
        }
    }
}

impl FieldType for bool {
    const KIND: Kind = Kind::Bool;

    fn to_scalar(&self) -> Option<Scalar<'_>> {
        Some(Scalar::Bool(*self))
    }

    fn from_scalar(scalar: Scalar<'_>) -> Option<Self> {
        match scalar {
            Scalar::Bool(b) => Some(b),
            _ => None,
        }
    }
}

macro_rules! field_type_integer {
    ($kind:ident, $variant:ident, $wide:ty => $($ty:ty,)*) => {
        $(
            impl FieldType for $ty {
                const KIND: Kind = Kind::$kind;

                fn to_scalar(&self) -> Option<Scalar<'_>> {
                    Some(Scalar::$variant(*self as $wide))
                }

                fn from_scalar(scalar: Scalar<'_>) -> Option<Self> {
                    match scalar {
                        Scalar::$variant(v) => <$ty>::try_from(v).ok(),
                        _ => None,
                    }
                }
            }
        )*
    };
}

field_type_integer!(Int, Int, i64 => i8, i16, i32, i64, isize,);
field_type_integer!(Uint, Uint, u64 => u8, u16, u32, u64, usize,);

impl FieldType for f32 {
    const KIND: Kind = Kind::Float;

    fn to_scalar(&self) -> Option<Scalar<'_>> {
        // widen through the shortest decimal form, so 0.1f32 renders as "0.1"
        // and not as the exact binary value of the widened f64.
        // the longest f32 in non-exponent form (smallest negative subnormal)
        // is 48 bytes
        let mut buf = [0u8; 64];
        let len = {
            let mut cursor = Cursor::new(&mut buf[..]);
            write!(cursor, "{self}").ok()?;
            cursor.position() as usize
        };
        let text = std::str::from_utf8(&buf[..len]).ok()?;
        text.parse().ok().map(Scalar::Float)
    }

    fn from_scalar(scalar: Scalar<'_>) -> Option<Self> {
        match scalar {
            Scalar::Float(v) => Some(v as f32),
            _ => None,
        }
    }
}

impl FieldType for f64 {
    const KIND: Kind = Kind::Float;

    fn to_scalar(&self) -> Option<Scalar<'_>> {
        Some(Scalar::Float(*self))
    }

    fn from_scalar(scalar: Scalar<'_>) -> Option<Self> {
        match scalar {
            Scalar::Float(v) => Some(v),
            _ => None,
        }
    }
}

macro_rules! field_type_unsupported {
    ($(impl<$($param:ident),*> for $ty:ty;)*) => {
        $(
            impl<$($param),*> FieldType for $ty {
                const KIND: Kind = Kind::Unsupported;

                fn to_scalar(&self) -> Option<Scalar<'_>> {
                    None
                }

                fn from_scalar(_: Scalar<'_>) -> Option<Self> {
                    None
                }
            }
        )*
    };
}

field_type_unsupported! {
    impl<> for char;
    impl<> for ();
    impl<T> for Vec<T>;
    impl<T> for Option<T>;
    impl<T> for Box<T>;
    impl<K, V, S> for HashMap<K, V, S>;
    impl<K, V> for BTreeMap<K, V>;
    impl<T, S> for HashSet<T, S>;
    impl<T> for BTreeSet<T>;
}

type Getter<R> = fn(&R) -> Option<Scalar<'_>>;
type Setter<R> = fn(&mut R, Scalar<'_>) -> bool;

/// One entry of a record's field table.
pub struct Field<R> {
    ident: &'static str,
    tags: &'static [(&'static str, &'static str)],
    kind: Kind,
    type_name: &'static str,
    get: Getter<R>,
    set: Setter<R>,
}

impl<R> Field<R> {
    /// Describes a field of declared type `T`.
    ///
    /// `tags` holds `(family, annotation)` pairs, e.g.
    /// `&[("json", "busi_type,omitempty")]`. A leading `r#` on `ident` is
    /// dropped.
    pub fn new<T: FieldType>(
        ident: &'static str,
        tags: &'static [(&'static str, &'static str)],
        get: Getter<R>,
        set: Setter<R>,
    ) -> Self {
        Field {
            ident: ident.strip_prefix("r#").unwrap_or(ident),
            tags,
            kind: T::KIND,
            type_name: std::any::type_name::<T>(),
            get,
            set,
        }
    }

    pub fn ident(&self) -> &'static str {
        self.ident
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Annotation declared for `family`, if any.
    pub fn annotation(&self, family: &str) -> Option<tag::Annotation<'static>> {
        self.tags
            .iter()
            .find(|(f, _)| *f == family)
            .map(|(_, annotation)| tag::Annotation::parse(annotation))
    }

    /// Wire name under the annotation `family`, `None` if the field is
    /// excluded.
    pub fn wire_name(&self, family: &str) -> Option<&'static str> {
        tag::wire_name(self.ident, self.tags, family)
    }

    pub fn get<'r>(&self, record: &'r R) -> Option<Scalar<'r>> {
        (self.get)(record)
    }

    /// Writes `scalar` into the field. Returns `false`, leaving the field
    /// untouched, when the value does not fit the declared type.
    pub fn set(&self, record: &mut R, scalar: Scalar<'_>) -> bool {
        (self.set)(record, scalar)
    }

    /// Resets the field to the zero value of its kind.
    pub fn set_zero(&self, record: &mut R) -> bool {
        Scalar::zero(self.kind).is_some_and(|zero| self.set(record, zero))
    }
}

impl<R> fmt::Debug for Field<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("ident", &self.ident)
            .field("tags", &self.tags)
            .field("kind", &self.kind)
            .field("type_name", &self.type_name)
            .finish()
    }
}

/// Implements [`Record`] for a struct by listing its mapped fields.
///
/// Each field may carry any number of `#[family = "annotation"]` attributes,
/// one per annotation family. Fields left out of the list do not take part
/// in the mapping. The struct itself also gets a [`FieldType`] impl of kind
/// [`Kind::Unsupported`], so nesting it inside another record is reported at
/// decode time instead of failing to compile.
///
/// ```
/// #[derive(Debug, Default, PartialEq)]
/// struct Search {
///     query: String,
///     page: u32,
///     internal: String,
/// }
///
/// urlparam::impl_record! {
///     Search {
///         #[json = "q,omitempty"]
///         query: String,
///         #[json = "page", qs = "p"]
///         page: u32,
///         #[json = "-"]
///         internal: String,
///     }
/// }
///
/// let search = Search { query: "rust".into(), page: 2, internal: "x".into() };
/// # #[cfg(not(feature = "indexmap"))]
/// assert_eq!(urlparam::marshal(&search).unwrap(), "page=2&q=rust");
/// # #[cfg(feature = "indexmap")]
/// # assert_eq!(urlparam::marshal(&search).unwrap(), "q=rust&page=2");
/// ```
#[macro_export]
macro_rules! impl_record {
    (
        $name:ident {
            $(
                $(#[$($family:ident = $annotation:literal),+ $(,)?])*
                $field:ident : $fty:ty
            ),* $(,)?
        }
    ) => {
        impl $crate::Record for $name {
            fn fields() -> &'static [$crate::Field<Self>] {
                static FIELDS: ::std::sync::OnceLock<::std::vec::Vec<$crate::Field<$name>>> =
                    ::std::sync::OnceLock::new();
                FIELDS.get_or_init(|| {
                    ::std::vec![
                        $(
                            $crate::Field::new::<$fty>(
                                ::std::stringify!($field),
                                &[$($((::std::stringify!($family), $annotation),)+)*],
                                {
                                    fn get(
                                        record: &$name,
                                    ) -> ::std::option::Option<$crate::Scalar<'_>> {
                                        $crate::FieldType::to_scalar(&record.$field)
                                    }
                                    get
                                },
                                {
                                    fn set(record: &mut $name, scalar: $crate::Scalar<'_>) -> bool {
                                        match <$fty as $crate::FieldType>::from_scalar(scalar) {
                                            ::std::option::Option::Some(value) => {
                                                record.$field = value;
                                                true
                                            }
                                            ::std::option::Option::None => false,
                                        }
                                    }
                                    set
                                },
                            ),
                        )*
                    ]
                })
            }
        }

        impl $crate::FieldType for $name {
            const KIND: $crate::Kind = $crate::Kind::Unsupported;

            fn to_scalar(&self) -> ::std::option::Option<$crate::Scalar<'_>> {
                ::std::option::Option::None
            }

            fn from_scalar(_: $crate::Scalar<'_>) -> ::std::option::Option<Self> {
                ::std::option::Option::None
            }
        }
    };
}
