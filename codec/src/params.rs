//! Request-scoped side-parameter store.
//!
//! A [`Params`] map carries auxiliary per-codec state (like the Bech32
//! human-readable prefix) alongside the canonical bytes. It is seeded from
//! the inbound request's query pairs, may be mutated by the active codec
//! during decode, and is read back by codecs during encode. Keys are
//! namespaced by convention: a codec must only touch keys it owns.

use std::collections::BTreeMap;

/// An ordered multimap of string keys to one-or-more string values.
///
/// Scoped strictly to one request; values a codec writes here only survive
/// to the next request if the caller reflects them back into the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params {
    entries: BTreeMap<String, Vec<String>>,
}

impl Params {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from decoded query pairs, preserving duplicate keys.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut params = Self::new();
        for (key, value) in pairs {
            params.append(key.into(), value.into());
        }
        params
    }

    /// Returns the first value for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns every value recorded for `key`.
    pub fn all(&self, key: &str) -> &[String] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Replaces all values for `key` with a single value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), vec![value.into()]);
    }

    /// Appends a value for `key`, keeping any existing values.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.entry(key.into()).or_default().push(value.into());
    }

    /// Iterates over all (key, value) pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().flat_map(|(key, values)| {
            values.iter().map(move |value| (key.as_str(), value.as_str()))
        })
    }
}
