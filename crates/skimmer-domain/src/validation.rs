//! Pure validation of accumulated entities against the required fields

use crate::{EntityMap, FieldSet};
use serde::{Deserialize, Serialize};

/// Completion status of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionStatus {
    /// Every required field was found
    Complete,
    /// Some required fields were found, some are missing
    Partial,
    /// No required field was found
    Empty,
}

/// Result of validating an entity map against a field set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    /// Completion status
    pub status: ExtractionStatus,

    /// Required fields still missing, in field-set order
    pub missing: Vec<String>,
}

impl ValidationOutcome {
    /// Whether every required field was found.
    pub fn is_complete(&self) -> bool {
        self.status == ExtractionStatus::Complete
    }
}

/// Compute the validation outcome for `entities` against `fields`.
///
/// A field is missing iff it has no value in the map (blank extractions
/// never enter an [`EntityMap`], so presence implies a usable value).
/// Deterministic and side-effect free.
pub fn validate(entities: &EntityMap, fields: &FieldSet) -> ValidationOutcome {
    let missing: Vec<String> = fields
        .iter()
        .filter(|field| !entities.contains(field))
        .map(String::from)
        .collect();

    let status = if missing.is_empty() {
        ExtractionStatus::Complete
    } else if missing.len() == fields.len() {
        ExtractionStatus::Empty
    } else {
        ExtractionStatus::Partial
    };

    ValidationOutcome { status, missing }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> FieldSet {
        FieldSet::new(["company", "budget", "deadline"]).unwrap()
    }

    #[test]
    fn test_complete_when_nothing_missing() {
        let mut entities = EntityMap::new();
        entities.insert("company", "Acme");
        entities.insert("budget", "$10000");
        entities.insert("deadline", "2025-09-01");

        let outcome = validate(&entities, &fields());
        assert_eq!(outcome.status, ExtractionStatus::Complete);
        assert!(outcome.missing.is_empty());
    }

    #[test]
    fn test_partial_lists_missing_in_field_order() {
        let mut entities = EntityMap::new();
        entities.insert("deadline", "2025-09-01");

        let outcome = validate(&entities, &fields());
        assert_eq!(outcome.status, ExtractionStatus::Partial);
        assert_eq!(outcome.missing, vec!["company", "budget"]);
    }

    #[test]
    fn test_empty_when_all_missing() {
        let outcome = validate(&EntityMap::new(), &fields());
        assert_eq!(outcome.status, ExtractionStatus::Empty);
        assert_eq!(outcome.missing, vec!["company", "budget", "deadline"]);
    }

    #[test]
    fn test_extra_keys_do_not_affect_status() {
        let mut entities = EntityMap::new();
        entities.insert("company", "Acme");
        entities.insert("unrelated", "value");

        let outcome = validate(&entities, &fields());
        assert_eq!(outcome.status, ExtractionStatus::Partial);
        assert_eq!(outcome.missing, vec!["budget", "deadline"]);
    }

    #[test]
    fn test_idempotent() {
        let mut entities = EntityMap::new();
        entities.insert("budget", "$500");

        let first = validate(&entities, &fields());
        let second = validate(&entities, &fields());
        assert_eq!(first, second);
    }
}
