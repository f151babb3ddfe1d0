//! The untyped parameter map.
//!
//! [`ParameterMap`] is a thin wrapper around [`IndexMap`] from parameter name
//! to raw string value. It performs no validation of its own: names and
//! values are checked by the tokenizer on the way in and by the coercion
//! engine when a typed record is decoded.
//!
//! Insertion order is remembered so that [`KeyOrder::Insertion`] output is
//! possible, but equality is order-independent and the default marshal
//! order is ascending by name.
//!
//! [`KeyOrder::Insertion`]: crate::KeyOrder::Insertion
//!
//! ## Examples
//!
//! ```rust
//! use text_parameters::ParameterMap;
//!
//! let mut params = ParameterMap::new();
//! params.set("Foo", "foobar");
//! params.set("Bar", "golang");
//!
//! assert_eq!(params.get("Foo"), "foobar");
//! assert_eq!(params.get("missing"), "");
//! assert_eq!(params.sorted_keys(), vec!["Bar", "Foo"]);
//! ```

use indexmap::IndexMap;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

/// A mapping from parameter name to raw parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParameterMap(IndexMap<String, String>);

impl ParameterMap {
    /// Creates an empty `ParameterMap`.
    #[must_use]
    pub fn new() -> Self {
        ParameterMap(IndexMap::new())
    }

    /// Creates an empty `ParameterMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        ParameterMap(IndexMap::with_capacity(capacity))
    }

    /// Returns the value for `name`, or the empty string if it is absent.
    ///
    /// Use [`ParameterMap::find`] to tell an absent name from an empty value.
    #[must_use]
    pub fn get(&self, name: &str) -> &str {
        self.find(name).unwrap_or_default()
    }

    /// Returns the value for `name` if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use text_parameters::ParameterMap;
    ///
    /// let params: ParameterMap = "foo\nbar: 1".parse().unwrap();
    /// assert_eq!(params.find("foo"), Some(""));
    /// assert_eq!(params.find("baz"), None);
    /// ```
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Sets `name` to `value`, returning the previous value if there was one.
    ///
    /// Overwriting keeps the entry's original insertion position.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), value.into())
    }

    /// Removes `name`, returning its value if it was present.
    ///
    /// The remaining entries keep their relative insertion order.
    pub fn delete(&mut self, name: &str) -> Option<String> {
        self.0.shift_remove(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the names of the map, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.keys().map(String::as_str)
    }

    /// Returns the names of the map in ascending byte-wise order.
    #[must_use]
    pub fn sorted_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.keys().collect();
        keys.sort_unstable();
        keys
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.values().map(String::as_str)
    }

    /// Returns an iterator over the name-value pairs of the map, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for ParameterMap {
    /// Renders the map in the wire format with default options.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::marshal(self))
    }
}

impl FromStr for ParameterMap {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        crate::unmarshal_str(s)
    }
}

impl From<HashMap<String, String>> for ParameterMap {
    fn from(map: HashMap<String, String>) -> Self {
        ParameterMap(map.into_iter().collect())
    }
}

impl From<BTreeMap<String, String>> for ParameterMap {
    fn from(map: BTreeMap<String, String>) -> Self {
        ParameterMap(map.into_iter().collect())
    }
}

impl From<ParameterMap> for HashMap<String, String> {
    fn from(map: ParameterMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for ParameterMap {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParameterMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        ParameterMap(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for ParameterMap {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.set(k, v);
        }
    }
}

impl Serialize for ParameterMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

struct ParameterMapVisitor;

impl<'de> Visitor<'de> for ParameterMapVisitor {
    type Value = ParameterMap;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of parameter names to string values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<ParameterMap, A::Error> {
        let mut params = ParameterMap::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((name, value)) = access.next_entry::<String, String>()? {
            params.set(name, value);
        }
        Ok(params)
    }
}

impl<'de> Deserialize<'de> for ParameterMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ParameterMapVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_delete() {
        let mut params = ParameterMap::new();
        assert!(params.set("foo", "3").is_none());
        assert_eq!(params.set("foo", "4"), Some("3".to_string()));
        assert_eq!(params.get("foo"), "4");
        assert!(params.contains("foo"));

        assert_eq!(params.delete("foo"), Some("4".to_string()));
        assert_eq!(params.get("foo"), "");
        assert!(params.delete("foo").is_none());
        assert!(params.is_empty());
    }

    #[test]
    fn test_keys_follow_insertion_order() {
        let params: ParameterMap = [("b", "1"), ("a", "2"), ("c", "3")].into_iter().collect();
        assert_eq!(params.keys().collect::<Vec<_>>(), vec!["b", "a", "c"]);
        assert_eq!(params.sorted_keys(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_delete_keeps_relative_order() {
        let mut params: ParameterMap = [("b", "1"), ("a", "2"), ("c", "3")].into_iter().collect();
        params.delete("a");
        assert_eq!(params.keys().collect::<Vec<_>>(), vec!["b", "c"]);
    }

    #[test]
    fn test_equality_ignores_order() {
        let left: ParameterMap = [("foo", "3"), ("bar", "4")].into_iter().collect();
        let right: ParameterMap = [("bar", "4"), ("foo", "3")].into_iter().collect();
        assert_eq!(left, right);

        let different: ParameterMap = [("bar", "4"), ("foo", "5")].into_iter().collect();
        assert_ne!(left, different);
    }

    #[test]
    fn test_case_sensitive_names() {
        let mut params = ParameterMap::new();
        params.set("Extra", "upper");
        params.set("extra", "lower");
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("Extra"), "upper");
    }

    #[test]
    fn test_conversions() {
        let mut hash = HashMap::new();
        hash.insert("x".to_string(), "1".to_string());
        let params = ParameterMap::from(hash.clone());
        assert_eq!(HashMap::from(params), hash);

        let mut tree = BTreeMap::new();
        tree.insert("y".to_string(), "2".to_string());
        assert_eq!(ParameterMap::from(tree).get("y"), "2");
    }

    #[test]
    fn test_extend_overwrites() {
        let mut params: ParameterMap = [("a", "1")].into_iter().collect();
        params.extend([("a", "2"), ("b", "3")]);
        assert_eq!(params.get("a"), "2");
        assert_eq!(params.len(), 2);
    }
}
