use crate::error::{PropkitError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A flat mapping from property key to property value.
///
/// Keys are unique and inserting an existing key replaces its value
/// (last write wins). The key keeps the position of its first insertion.
///
/// We use `IndexMap` so that iteration order is deterministic (file order),
/// which keeps `--list` output stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PropertyMap {
    #[serde(flatten)]
    inner: IndexMap<String, String>,
}

impl PropertyMap {
    /// Creates a new empty property map.
    pub fn new() -> Self {
        Self {
            inner: IndexMap::new(),
        }
    }

    /// Returns true if the map contains no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of entries in the map.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Inserts a key-value pair, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.inner.insert(key.into(), value.into())
    }

    /// Retrieves the value stored under `key`.
    ///
    /// Keys are matched exactly; there is no dot-notation traversal.
    ///
    /// # Example
    /// ```
    /// # use propkit_core::PropertyMap;
    /// let mut map = PropertyMap::new();
    /// map.insert("server.port", "8080");
    /// assert_eq!(map.get("server.port"), Some("8080"));
    /// assert_eq!(map.get("server"), None);
    /// ```
    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner.get(key).map(String::as_str)
    }

    /// Returns true if `key` has a value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.inner.keys().map(String::as_str)
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Parses a flat JSON object of strings into a PropertyMap.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| PropkitError::serialization(e.to_string()))
    }

    /// Serializes the map to a JSON object (pretty printed).
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| PropkitError::serialization(e.to_string()))
    }
}

impl<K, V> FromIterator<(K, V)> for PropertyMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = PropertyMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}
