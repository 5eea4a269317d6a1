//! Parse LLM replies into entity maps

use serde_json::Value;
use skimmer_domain::{EntityMap, ExtractError, FieldSet};
use tracing::warn;

/// Parse a model reply into an entity map.
///
/// The reply must be a JSON object (optionally wrapped in a markdown code
/// fence) mapping field names to values. Null and blank values are dropped,
/// keys outside `fields` are ignored, and scalar non-string values are
/// rendered to text. Anything that is not a JSON object is a parse error.
pub(crate) fn parse_reply(reply: &str, fields: &FieldSet) -> Result<EntityMap, ExtractError> {
    let json_str = strip_code_fence(reply)?;

    let json: Value = serde_json::from_str(&json_str)
        .map_err(|e| ExtractError::Parse(format!("JSON parse error: {}", e)))?;

    let object = json
        .as_object()
        .ok_or_else(|| ExtractError::Parse("expected a JSON object".to_string()))?;

    let mut entities = EntityMap::new();
    for (key, value) in object {
        if !fields.contains(key) {
            warn!(field = %key, "reply contained an unrequested field, ignoring");
            continue;
        }
        if let Some(text) = value_to_text(value) {
            entities.insert(key.as_str(), text);
        }
    }

    Ok(entities)
}

/// Unwrap a markdown code fence if the model added one.
fn strip_code_fence(reply: &str) -> Result<String, ExtractError> {
    let trimmed = reply.trim();

    if trimmed.starts_with("```") {
        let lines: Vec<&str> = trimmed.lines().collect();
        if lines.len() < 2 {
            return Err(ExtractError::Parse("empty code block".to_string()));
        }
        // Skip the opening line (``` or ```json) and the closing ```
        let inner = &lines[1..lines.len().saturating_sub(1)];
        Ok(inner.join("\n"))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Render a scalar JSON value to extraction text. Null, containers, and
/// blank strings yield nothing.
fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> FieldSet {
        FieldSet::new(["company", "budget", "deadline"]).unwrap()
    }

    #[test]
    fn test_parse_plain_object() {
        let reply = r#"{"company": "Acme", "budget": "$10000", "deadline": "2025-09-01"}"#;
        let entities = parse_reply(reply, &fields()).unwrap();

        assert_eq!(entities.get("company"), Some("Acme"));
        assert_eq!(entities.get("budget"), Some("$10000"));
        assert_eq!(entities.get("deadline"), Some("2025-09-01"));
    }

    #[test]
    fn test_parse_with_markdown_fence() {
        let reply = "```json\n{\"company\": \"Acme\"}\n```";
        let entities = parse_reply(reply, &fields()).unwrap();
        assert_eq!(entities.get("company"), Some("Acme"));
    }

    #[test]
    fn test_parse_fence_without_language() {
        let reply = "```\n{\"company\": \"Acme\"}\n```";
        let entities = parse_reply(reply, &fields()).unwrap();
        assert_eq!(entities.get("company"), Some("Acme"));
    }

    #[test]
    fn test_null_values_dropped() {
        let reply = r#"{"company": "Acme", "budget": null, "deadline": null}"#;
        let entities = parse_reply(reply, &fields()).unwrap();

        assert_eq!(entities.len(), 1);
        assert!(!entities.contains("budget"));
    }

    #[test]
    fn test_blank_values_dropped() {
        let reply = r#"{"company": "  ", "budget": "$5"}"#;
        let entities = parse_reply(reply, &fields()).unwrap();

        assert!(!entities.contains("company"));
        assert_eq!(entities.get("budget"), Some("$5"));
    }

    #[test]
    fn test_unrequested_keys_ignored() {
        let reply = r#"{"company": "Acme", "confidence": "high"}"#;
        let entities = parse_reply(reply, &fields()).unwrap();

        assert_eq!(entities.len(), 1);
        assert!(!entities.contains("confidence"));
    }

    #[test]
    fn test_numeric_values_rendered_to_text() {
        let reply = r#"{"budget": 10000}"#;
        let entities = parse_reply(reply, &fields()).unwrap();
        assert_eq!(entities.get("budget"), Some("10000"));
    }

    #[test]
    fn test_non_json_is_parse_error() {
        let result = parse_reply("I could not find any entities.", &fields());
        assert!(matches!(result, Err(ExtractError::Parse(_))));
    }

    #[test]
    fn test_array_is_parse_error() {
        let result = parse_reply(r#"["company"]"#, &fields());
        assert!(matches!(result, Err(ExtractError::Parse(_))));
    }
}
