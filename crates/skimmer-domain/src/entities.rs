//! Accumulated field → value mapping

use serde::Serialize;
use std::collections::BTreeMap;

/// Mapping from field name to extracted text value.
///
/// Values are never blank: inserting an empty or whitespace-only value is a
/// no-op, so "not found" is always represented by the key being absent.
/// Merging is monotonic — a field that already holds a value is only ever
/// overwritten by another non-blank value, never cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EntityMap {
    values: BTreeMap<String, String>,
}

impl EntityMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value for a field.
    ///
    /// The value is trimmed; blank values are ignored. Returns whether the
    /// map was changed.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) -> bool {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.values.insert(field.into(), trimmed.to_string());
        true
    }

    /// Get the value for a field, if found.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// Whether a field has a value.
    pub fn contains(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }

    /// Number of fields with a value.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no field has a value yet.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Merge another map into this one.
    ///
    /// Non-blank values from `other` overwrite; fields absent from `other`
    /// keep their current value. Values in `other` were already trimmed and
    /// non-blank by construction, so this never regresses a found field.
    pub fn merge(&mut self, other: EntityMap) {
        for (field, value) in other.values {
            self.values.insert(field, value);
        }
    }

    /// Iterate (field, value) pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
