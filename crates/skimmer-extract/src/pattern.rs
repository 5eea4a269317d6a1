//! Deterministic text-matching extraction strategy

use async_trait::async_trait;
use regex::Regex;
use skimmer_domain::{EntityExtractor, EntityMap, ExtractError, FieldSet};
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::debug;

/// Extracts fields with fixed text-matching rules.
///
/// Every field gets a generic labeled-line rule (`Field: value`). The three
/// canonical fields additionally get phrasing heuristics: subjects of
/// "needs/wants/requires" for `company`, amounts near budget or currency
/// markers for `budget`, and ISO dates for `deadline`. Absence is expressed
/// by omitting the key; this strategy never fails.
pub struct PatternExtractor {
    company_rules: Vec<Regex>,
    budget_rules: Vec<Regex>,
    deadline_rules: Vec<Regex>,
    // Labeled-line rules are built from field names only known at call time,
    // so they are compiled once on first use and memoized here.
    labeled_rules: Mutex<HashMap<String, Regex>>,
}

impl PatternExtractor {
    /// Create an extractor with the built-in rule set.
    pub fn new() -> Self {
        let compile = |patterns: &[&str]| {
            patterns
                .iter()
                .map(|p| Regex::new(p).expect("built-in pattern compiles"))
                .collect()
        };

        Self {
            company_rules: compile(&[
                r"(?i)\b([A-Za-z][\w&.-]*)\s+(?:needs|wants|requires|is requesting)\b",
                r"(?i)\bclient\s*:\s*([^\n]+)",
            ]),
            budget_rules: compile(&[
                r"(?i)\bbudget\s+of\s+\$?([\d,]+(?:\.\d+)?)",
                r"\$\s*([\d,]+(?:\.\d+)?)",
                r"(?i)\b([\d,]+(?:\.\d+)?)\s*(?:dollars|usd)\b",
            ]),
            deadline_rules: compile(&[
                r"(?i)\bdeadline\s+(?:of|is)\s+(\d{4}-\d{2}-\d{2})",
                r"(\d{4}-\d{2}-\d{2})",
            ]),
            labeled_rules: Mutex::new(HashMap::new()),
        }
    }

    /// Match a single field against the document.
    fn match_field(&self, document: &str, field: &str) -> Option<String> {
        // The explicit label form wins over any heuristic.
        if let Some(value) = self.match_labeled(document, field) {
            return Some(value);
        }

        match field {
            "company" => first_capture(&self.company_rules, document),
            "budget" => first_capture(&self.budget_rules, document).map(normalize_budget),
            "deadline" => first_capture(&self.deadline_rules, document),
            _ => None,
        }
    }

    /// Match the generic `Field: value` form, value running to end of line.
    fn match_labeled(&self, document: &str, field: &str) -> Option<String> {
        let rule = self.labeled_rule(field);
        rule.captures(document)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .filter(|v| !v.is_empty())
    }

    /// Fetch the labeled-line rule for a field, compiling it on first use.
    fn labeled_rule(&self, field: &str) -> Regex {
        let mut rules = self.labeled_rules.lock().unwrap();
        if let Some(rule) = rules.get(field) {
            return rule.clone();
        }
        let pattern = format!(r"(?i)\b{}\s*:\s*([^\n]+)", regex::escape(field));
        let rule = Regex::new(&pattern).expect("escaped field name compiles");
        rules.insert(field.to_string(), rule.clone());
        rule
    }
}

impl Default for PatternExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EntityExtractor for PatternExtractor {
    async fn extract(&self, document: &str, fields: &FieldSet) -> Result<EntityMap, ExtractError> {
        let mut entities = EntityMap::new();

        for field in fields.iter() {
            if let Some(value) = self.match_field(document, field) {
                entities.insert(field, value);
            }
        }

        debug!(
            found = entities.len(),
            required = fields.len(),
            "pattern extraction finished"
        );

        Ok(entities)
    }
}

fn first_capture(rules: &[Regex], document: &str) -> Option<String> {
    rules.iter().find_map(|rule| {
        rule.captures(document)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .filter(|v| !v.is_empty())
    })
}

/// Bare amounts get a leading `$` so budget values render uniformly.
fn normalize_budget(value: String) -> String {
    if value.starts_with('$') {
        value
    } else {
        format!("${}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> FieldSet {
        FieldSet::new(["company", "budget", "deadline"]).unwrap()
    }

    #[tokio::test]
    async fn test_extracts_all_from_sentence_form() {
        let extractor = PatternExtractor::new();
        let doc = "Acme needs a campaign with a budget of 10000 and a deadline of 2025-09-01.";

        let entities = extractor.extract(doc, &fields()).await.unwrap();
        assert_eq!(entities.get("company"), Some("Acme"));
        assert_eq!(entities.get("budget"), Some("$10000"));
        assert_eq!(entities.get("deadline"), Some("2025-09-01"));
    }

    #[tokio::test]
    async fn test_extracts_all_from_labeled_form() {
        let extractor = PatternExtractor::new();
        let doc = "Project Proposal\n\nCompany: TechCorp Solutions Inc.\nBudget: $75,000 USD\nDeadline: March 15, 2025\n";

        let entities = extractor.extract(doc, &fields()).await.unwrap();
        assert_eq!(entities.get("company"), Some("TechCorp Solutions Inc."));
        assert_eq!(entities.get("budget"), Some("$75,000 USD"));
        assert_eq!(entities.get("deadline"), Some("March 15, 2025"));
    }

    #[tokio::test]
    async fn test_absence_is_omission_not_error() {
        let extractor = PatternExtractor::new();
        let doc = "A campaign is needed.";

        let entities = extractor.extract(doc, &fields()).await.unwrap();
        assert!(entities.is_empty());
    }

    #[tokio::test]
    async fn test_partial_document() {
        let extractor = PatternExtractor::new();
        let doc = "Acme needs a campaign with a budget of 10000.";

        let entities = extractor.extract(doc, &fields()).await.unwrap();
        assert_eq!(entities.get("company"), Some("Acme"));
        assert_eq!(entities.get("budget"), Some("$10000"));
        assert_eq!(entities.get("deadline"), None);
    }

    #[tokio::test]
    async fn test_empty_document_yields_empty_map() {
        let extractor = PatternExtractor::new();
        let entities = extractor.extract("", &fields()).await.unwrap();
        assert!(entities.is_empty());
    }

    #[tokio::test]
    async fn test_only_configured_fields_are_queried() {
        let extractor = PatternExtractor::new();
        let only_company = FieldSet::new(["company"]).unwrap();
        let doc = "Acme needs a campaign with a budget of 10000.";

        let entities = extractor.extract(doc, &only_company).await.unwrap();
        assert_eq!(entities.len(), 1);
        assert_eq!(entities.get("budget"), None);
    }

    #[tokio::test]
    async fn test_labeled_rules_compiled_once_per_field() {
        let extractor = PatternExtractor::new();
        let doc = "Company: Acme\nBudget: $10";

        extractor.extract(doc, &fields()).await.unwrap();
        extractor.extract(doc, &fields()).await.unwrap();

        let rules = extractor.labeled_rules.lock().unwrap();
        assert_eq!(rules.len(), fields().len());
    }

    #[tokio::test]
    async fn test_labeled_rule_works_for_custom_fields() {
        let extractor = PatternExtractor::new();
        let custom = FieldSet::new(["contact"]).unwrap();
        let doc = "Contact: jane@example.com\nBudget: $500";

        let entities = extractor.extract(doc, &custom).await.unwrap();
        assert_eq!(entities.get("contact"), Some("jane@example.com"));
    }
}
