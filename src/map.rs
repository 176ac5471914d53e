//! Map type backing [`Values`](crate::Values).
//!
//! Keys are kept in lexicographic order by default, which makes encoded
//! querystrings deterministic. With the `indexmap` feature the map keeps
//! keys in the order they were first inserted instead.

#[cfg(feature = "indexmap")]
pub use indexmap::IndexMap as Map;

#[cfg(not(feature = "indexmap"))]
pub use std::collections::BTreeMap as Map;
