//! Insertion-ordered key/value map used for context and metadata.
//!
//! Keys are unique. Re-inserting a key replaces its value in place, so the
//! rendered order always reflects the first time a key was recorded.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::ContextMap;
//!
//! let mut map = ContextMap::new();
//! map.insert("field_name", "email");
//! map.insert("attempt", 1);
//! map.insert("field_name", "name");
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.to_string(), r#"{"field_name": "name", "attempt": 1}"#);
//! ```
use crate::types::ContextValue;
use std::fmt::Display;

/// Ordered map from `String` keys to [`ContextValue`]s.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContextMap {
    entries: Vec<(String, ContextValue)>,
}

impl ContextMap {
    #[inline]
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { entries: Vec::with_capacity(capacity) }
    }

    /// Inserts `value` under `key`, returning the value it replaced.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<ContextValue>
    where
        K: Into<String>,
        V: Into<ContextValue>,
    {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    #[inline]
    pub fn with<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<ContextValue>,
    {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&ContextValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ContextValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Returns a new map holding `self` overlaid with `other`.
    ///
    /// Keys present in both keep their position from `self` and take the value
    /// from `other`; keys only in `other` are appended in `other`'s order.
    #[must_use]
    pub fn merged(&self, other: &ContextMap) -> ContextMap {
        let mut result = ContextMap::with_capacity(self.len() + other.len());
        result.entries.extend(self.entries.iter().cloned());
        for (key, value) in &other.entries {
            result.insert(key.clone(), value.clone());
        }
        result
    }
}

impl Display for ContextMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key:?}: {value}")?;
        }
        f.write_str("}")
    }
}

impl<K, V> Extend<(K, V)> for ContextMap
where
    K: Into<String>,
    V: Into<ContextValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for ContextMap
where
    K: Into<String>,
    V: Into<ContextValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = ContextMap::new();
        map.extend(iter);
        map
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for ContextMap
where
    K: Into<String>,
    V: Into<ContextValue>,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K, V> From<Vec<(K, V)>> for ContextMap
where
    K: Into<String>,
    V: Into<ContextValue>,
{
    fn from(entries: Vec<(K, V)>) -> Self {
        entries.into_iter().collect()
    }
}

impl IntoIterator for ContextMap {
    type Item = (String, ContextValue);
    type IntoIter = std::vec::IntoIter<(String, ContextValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ContextMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ContextMap {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedVisitor;

        impl<'de> serde::de::Visitor<'de> for OrderedVisitor {
            type Value = ContextMap;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a map of context entries")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut map = ContextMap::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, ContextValue>()? {
                    map.insert(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(OrderedVisitor)
    }
}
