//! The ordered set of fields a pipeline run is required to find

use serde::{Deserialize, Serialize};

/// An ordered sequence of distinct required field names.
///
/// Order is fixed at construction and defines missing-field reporting order
/// for the whole run. Duplicate names are dropped (first occurrence wins) and
/// an empty or all-blank list is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct FieldSet {
    names: Vec<String>,
}

impl FieldSet {
    /// Build a field set from raw names.
    ///
    /// Names are trimmed; blanks are skipped; duplicates keep their
    /// first-seen position. Fails if nothing usable remains.
    pub fn new<I, S>(names: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = Vec::new();
        for name in names {
            let name = name.into();
            let trimmed = name.trim();
            if trimmed.is_empty() {
                continue;
            }
            if !seen.iter().any(|n: &String| n == trimmed) {
                seen.push(trimmed.to_string());
            }
        }

        if seen.is_empty() {
            return Err("required field list is empty".to_string());
        }

        Ok(Self { names: seen })
    }

    /// Iterate the field names in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Number of required fields.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the set is empty (never true for a constructed set).
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Whether `name` is one of the required fields.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// The field names as a slice, in reporting order.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl TryFrom<Vec<String>> for FieldSet {
    type Error = String;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(names)
    }
}

impl From<FieldSet> for Vec<String> {
    fn from(fields: FieldSet) -> Self {
        fields.names
    }
}
