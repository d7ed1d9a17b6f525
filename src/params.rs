//! The inbound key → text mapping the option builders read from.

use std::collections::BTreeMap;

use kstring::KString;
use serde::Serialize;

use crate::url_encoding::query_pairs;

/// Query (or form) parameters of one request. The first occurrence
/// of a key wins. Empty values are stored but read back as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ParameterMap(BTreeMap<KString, String>);

impl ParameterMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the part of a URL after `?` (or an urlencoded form
    /// body).
    pub fn from_query_string(qs: &str) -> Self {
        query_pairs(qs).collect()
    }

    /// Set `key`, replacing any previous value. Chains.
    pub fn insert(&mut self, key: &str, val: impl Into<String>) -> &mut Self {
        self.0.insert(KString::from_ref(key), val.into());
        self
    }

    /// The value for `key`, `None` if it is missing or empty.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str).filter(|v| !v.is_empty())
    }

    pub fn get_or<'s>(&'s self, key: &str, default: &'s str) -> &'s str {
        self.get(key).unwrap_or(default)
    }

    /// True only for the exact text "true".
    pub fn flag(&self, key: &str) -> bool {
        self.get(key) == Some("true")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for ParameterMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = BTreeMap::new();
        for (k, v) in iter {
            map.entry(KString::from_ref(k.as_ref())).or_insert_with(|| v.into());
        }
        ParameterMap(map)
    }
}
