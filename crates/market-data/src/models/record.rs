use std::collections::btree_map::{self, BTreeMap};

use serde::{Deserialize, Serialize};

use super::types::ProviderId;

/// Provider name that produced the record.
pub const SOURCE_KEY: &str = "source";
/// Exact request URL that produced the record.
pub const SOURCE_URL_KEY: &str = "source_url";
/// Ticker of a historical row.
pub const SYMBOL_KEY: &str = "symbol";
/// Trading day of a historical row.
pub const DATE_KEY: &str = "Date";

/// A quote or a historical row keyed by normalized field name.
///
/// Values are kept as the provider sent them. Keys iterate in ascending
/// order, which keeps every output format deterministic.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedRecord {
    fields: BTreeMap<String, String>,
}

impl NormalizedRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, returning the previous value if the key existed.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.fields.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Stamp `source` and `source_url`. Applied after normalization so the
    /// provenance always reflects the request that was actually sent.
    pub fn with_provenance(mut self, provider: ProviderId, url: &str) -> Self {
        self.insert(SOURCE_KEY, provider.display_name());
        self.insert(SOURCE_URL_KEY, url);
        self
    }
}

impl FromIterator<(String, String)> for NormalizedRecord {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a NormalizedRecord {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
