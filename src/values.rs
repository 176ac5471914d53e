//! Flat key/value mapping exchanged with the querystring codec.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::map::Map;
use crate::ser::encode::{Encoding, encode_into};

/// Query values keyed by wire name.
///
/// A key may hold several values after parsing a querystring such as
/// `a=1&a=2`; [`get`](Values::get) returns the first one, which is what the
/// decoder reads. The encoder writes exactly one value per key.
///
/// ```
/// use urlparam::Values;
///
/// let mut values = Values::new();
/// values.set("uid", "2222");
/// values.set("name", "Carrot City");
/// # #[cfg(not(feature = "indexmap"))]
/// assert_eq!(values.encode(), "name=Carrot+City&uid=2222");
/// # #[cfg(feature = "indexmap")]
/// # assert_eq!(values.encode(), "uid=2222&name=Carrot+City");
///
/// let parsed: Values = "uid=1&uid=2".parse().unwrap();
/// assert_eq!(parsed.get("uid"), Some("1"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Values(Map<String, Vec<String>>);

impl Values {
    pub fn new() -> Self {
        Values(Map::default())
    }

    /// First value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Every value stored under `key`, in insertion order.
    pub fn get_all(&self, key: &str) -> &[String] {
        self.0.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Replaces any values under `key` with `value`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), vec![value.into()]);
    }

    /// Appends `value` to the values under `key`.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.entry(key.into()).or_default().push(value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<Vec<String>> {
        #[cfg(feature = "indexmap")]
        {
            self.0.shift_remove(key)
        }
        #[cfg(not(feature = "indexmap"))]
        {
            self.0.remove(key)
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Writes the values as a form-encoded querystring.
    pub fn encode(&self) -> String {
        self.encode_with(Encoding::default())
    }

    /// Writes the values as a querystring, escaping with `encoding`.
    ///
    /// Pairs are joined by `&` in key order; a key with several values is
    /// written once per value.
    pub fn encode_with(&self, encoding: Encoding) -> String {
        // most report-style querystrings fit without regrowing
        let mut buffer = Vec::with_capacity(128);
        for (key, values) in &self.0 {
            for value in values {
                if !buffer.is_empty() {
                    buffer.push(b'&');
                }
                encode_into(&mut buffer, key, encoding);
                buffer.push(b'=');
                encode_into(&mut buffer, value, encoding);
            }
        }
        // percent-encoding only ever emits ASCII for escaped bytes and copies
        // the remaining UTF-8 input verbatim
        String::from_utf8(buffer).unwrap_or_default()
    }
}

impl FromStr for Values {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::de::parse::parse(s.as_bytes())
    }
}

impl fmt::Display for Values {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl<K, V> FromIterator<(K, V)> for Values
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = Values::new();
        values.extend(iter);
        values
    }
}

impl<K, V> Extend<(K, V)> for Values
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.add(key, value);
        }
    }
}

impl IntoIterator for Values {
    type Item = (String, Vec<String>);
    type IntoIter = <Map<String, Vec<String>> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::Values;
    use crate::Encoding;

    #[test]
    fn set_replaces_add_appends() {
        let mut values = Values::new();
        values.add("a", "1");
        values.add("a", "2");
        assert_eq!(values.get_all("a").len(), 2);

        values.set("a", "3");
        assert_eq!(values.get_all("a"), &["3".to_owned()][..]);
        assert_eq!(values.get("missing"), None);
        assert!(values.get_all("missing").is_empty());

        assert_eq!(values.remove("a"), Some(vec!["3".to_owned()]));
        assert!(values.is_empty());
    }

    #[test]
    fn encode_repeated_and_escaped() {
        let values: Values = [("q", "a b"), ("a", "1"), ("a", "x&y")].into_iter().collect();
        #[cfg(not(feature = "indexmap"))]
        insta::assert_snapshot!(values.encode(), @"a=1&a=x%26y&q=a+b");
        #[cfg(feature = "indexmap")]
        insta::assert_snapshot!(values.encode(), @"q=a+b&a=1&a=x%26y");
    }

    #[test]
    fn encode_query_mode() {
        let values: Values = [("path", "/a/b:c")].into_iter().collect();
        assert_eq!(values.encode(), "path=%2Fa%2Fb%3Ac");
        assert_eq!(values.encode_with(Encoding::Query), "path=/a/b:c");
    }

    #[test]
    fn parse_then_display() {
        let values: Values = "b=2&a=1".parse().unwrap();
        assert_eq!(values.len(), 2);
        assert!(values.contains_key("a"));
        #[cfg(not(feature = "indexmap"))]
        assert_eq!(values.to_string(), "a=1&b=2");
    }

    #[test]
    fn serde_as_map_of_lists() {
        let values: Values = [("uid", "2222")].into_iter().collect();
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"{"uid":["2222"]}"#);
        let back: Values = serde_json::from_str(&json).unwrap();
        assert_eq!(back, values);
    }
}
