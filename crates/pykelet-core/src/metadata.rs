//! The parsed metadata mapping.
//!
//! [`Metadata`] is the result of parsing one Pykelet comment block: a flat
//! map from normalized key to trimmed string value. Keys are trimmed and
//! uppercased on insertion, empty keys are dropped, and a later insert of
//! the same key overwrites the earlier value.

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::{Deserialize, Serialize};

/// The literal token that marks a comment as a Pykelet metadata block.
pub const MARKER: &str = "PYKELET";

/// Key/value mapping parsed from a metadata block.
///
/// Iteration is sorted by key. The order carries no meaning; it only keeps
/// output stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata {
    entries: BTreeMap<String, String>,
}

impl Metadata {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize a raw key: trim, then uppercase.
    ///
    /// Returns `None` when the key is empty after trimming.
    pub fn normalize_key(raw: &str) -> Option<String> {
        let key = raw.trim().to_uppercase();
        if key.is_empty() { None } else { Some(key) }
    }

    /// Insert a value under the normalized form of `key`.
    ///
    /// The value is trimmed. Returns `false` (and stores nothing) when the
    /// key normalizes to empty.
    pub fn insert(&mut self, key: &str, value: &str) -> bool {
        match Self::normalize_key(key) {
            Some(key) => {
                self.entries.insert(key, value.trim().to_string());
                true
            }
            None => {
                log::trace!("dropping metadata entry with an empty key");
                false
            }
        }
    }

    /// Look up a value by key.
    ///
    /// The lookup is exact: keys are stored uppercased, so callers should
    /// ask for `"TITLE"`, not `"title"`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, value)` pairs.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Iterate over the keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Borrow the underlying map.
    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.entries
    }

    /// Consume the mapping, returning the underlying map.
    pub fn into_map(self) -> BTreeMap<String, String> {
        self.entries
    }
}

/// Iterator over the entries of a [`Metadata`] mapping.
#[derive(Debug)]
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, String, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a Metadata {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
