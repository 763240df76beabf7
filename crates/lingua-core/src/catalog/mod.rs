//! The catalog store: an immutable locale → key → node mapping.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::LinguaError;

#[cfg(test)]
mod tests;

/// A single value reachable at a key path.
///
/// Deserialization is untagged: strings become [`Node::Text`], lists of
/// strings become [`Node::Forms`], mappings recurse into [`Node::Map`], and
/// anything else (a number, a boolean, a mixed list) is kept as
/// [`Node::Other`]. Keeping unsupported values around instead of rejecting
/// them lets catalog construction validate only the top-level shape; leaf
/// problems surface as `InvalidNode` at resolution time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// A leaf string.
    Text(String),
    /// Ordered plural forms. The first element is the singular, the last is
    /// the plural; middle elements are addressable only by explicit key paths
    /// elsewhere in the catalog.
    Forms(Vec<String>),
    /// A nested mapping, arbitrary depth.
    Map(BTreeMap<String, Node>),
    /// Any other value; rejected wherever a string or plural list is
    /// required.
    Other(Value),
}

impl Node {
    fn from_value(value: Value) -> Self {
        match value {
            Value::String(s) => Self::Text(s),
            Value::Array(items) if items.iter().all(Value::is_string) => Self::Forms(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::String(s) => Some(s),
                        _ => None,
                    })
                    .collect(),
            ),
            Value::Object(map) => Self::Map(
                map.into_iter()
                    .map(|(key, value)| (key, Self::from_value(value)))
                    .collect(),
            ),
            other => Self::Other(other),
        }
    }
}

/// All keys of a single locale.
pub type LocaleEntry = BTreeMap<String, Node>;

/// The full locale → key → text data set. Immutable after construction;
/// resolution calls are pure reads.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    locales: BTreeMap<String, LocaleEntry>,
}

impl Catalog {
    /// Build a catalog from a parsed JSON-like value.
    ///
    /// Validates exactly the top-level shape — a mapping of locale
    /// identifiers to mappings of keys — and nothing deeper.
    pub fn from_value(value: Value) -> Result<Self, LinguaError> {
        let Value::Object(locales) = value else {
            return Err(LinguaError::Shape(
                "catalog root must be a mapping of locales".to_string(),
            ));
        };
        let mut out = BTreeMap::new();
        for (locale, entry) in locales {
            let Value::Object(keys) = entry else {
                return Err(LinguaError::Shape(format!(
                    "locale '{locale}' must map to a mapping of keys"
                )));
            };
            let entry = keys
                .into_iter()
                .map(|(key, value)| (key, Node::from_value(value)))
                .collect();
            out.insert(locale, entry);
        }
        Ok(Self { locales: out })
    }

    /// Look up the entry for an exact locale identifier. No normalization is
    /// applied; `"en-US"` matches only a literal `"en-US"` key.
    pub fn get(&self, locale: &str) -> Option<&LocaleEntry> {
        self.locales.get(locale)
    }

    /// Whether the catalog defines the locale.
    pub fn contains(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }

    /// All locale identifiers, in sorted order.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    /// Number of locales.
    pub fn len(&self) -> usize {
        self.locales.len()
    }

    /// Whether the catalog has no locales at all.
    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}
