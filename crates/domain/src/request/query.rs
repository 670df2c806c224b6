//! Query parameter types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Query parameters captured with a request.
///
/// Carried through edits untouched; the raw text codec never rebuilds them
/// from the URL. Keys are kept sorted for deterministic serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryParameters {
    items: BTreeMap<String, String>,
}

impl QueryParameters {
    /// Creates an empty query parameter collection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: BTreeMap::new(),
        }
    }

    /// Sets a parameter, returning the previous value for the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.items.insert(name.into(), value.into())
    }

    /// Returns the value stored under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.items.get(name).map(String::as_str)
    }

    /// Returns an iterator over `(name, value)` pairs sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.items.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParameters {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            items: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_sorted_by_name() {
        let params: QueryParameters = [("page", "2"), ("id", "7")].into_iter().collect();
        let names: Vec<_> = params.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["id", "page"]);
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let params: QueryParameters = [("q", "test")].into_iter().collect();
        let json = serde_json::to_string(&params).unwrap_or_default();
        assert_eq!(json, r#"{"q":"test"}"#);
    }
}
