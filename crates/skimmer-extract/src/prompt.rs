//! Prompt engineering for LLM-backed field extraction

use skimmer_domain::FieldSet;

/// Builds the extraction prompt for one document.
pub struct PromptBuilder<'a> {
    document: &'a str,
    fields: &'a FieldSet,
}

impl<'a> PromptBuilder<'a> {
    /// Create a builder for `document` and the configured fields.
    pub fn new(document: &'a str, fields: &'a FieldSet) -> Self {
        Self { document, fields }
    }

    /// Build the complete extraction prompt.
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        // 1. Instruction block
        prompt.push_str(EXTRACTION_INSTRUCTIONS);
        prompt.push_str("\n\n");

        // 2. The fields to find
        prompt.push_str("Extract the following entities:\n");
        for field in self.fields.iter() {
            prompt.push_str(&format!("- {}: {}\n", field, describe_field(field)));
        }
        prompt.push('\n');

        // 3. The document
        prompt.push_str("Document:\n");
        prompt.push_str("---\n");
        prompt.push_str(self.document);
        prompt.push_str("\n---\n\n");

        // 4. Output format reminder
        prompt.push_str(OUTPUT_FORMAT_REMINDER);

        prompt
    }
}

/// One-line guidance per field; unrecognized fields get a generic line.
fn describe_field(field: &str) -> &'static str {
    match field {
        "company" => "the company name or organization",
        "budget" => "the budget amount or financial information",
        "deadline" => "the deadline or timeline information",
        _ => "the value of this field as stated in the document",
    }
}

const EXTRACTION_INSTRUCTIONS: &str = "You are an expert entity extractor. \
Extract the requested entities from the given document. \
Copy values from the document text; do not invent information. \
If an entity is not present in the document, use null for its value.";

const OUTPUT_FORMAT_REMINDER: &str = r#"Output format (a single JSON object, no additional text):
{
  "field_name": "extracted value or null"
}

Remember: return ONLY valid JSON, no markdown code blocks, no explanations."#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_includes_document() {
        let fields = FieldSet::new(["company"]).unwrap();
        let prompt = PromptBuilder::new("Acme needs a campaign", &fields).build();
        assert!(prompt.contains("Acme needs a campaign"));
    }

    #[test]
    fn test_prompt_lists_every_field() {
        let fields = FieldSet::new(["company", "budget", "deadline"]).unwrap();
        let prompt = PromptBuilder::new("text", &fields).build();

        assert!(prompt.contains("- company: the company name or organization"));
        assert!(prompt.contains("- budget: the budget amount"));
        assert!(prompt.contains("- deadline: the deadline"));
    }

    #[test]
    fn test_prompt_describes_custom_fields_generically() {
        let fields = FieldSet::new(["contact"]).unwrap();
        let prompt = PromptBuilder::new("text", &fields).build();
        assert!(prompt.contains("- contact: the value of this field"));
    }

    #[test]
    fn test_prompt_includes_instructions_and_format() {
        let fields = FieldSet::new(["company"]).unwrap();
        let prompt = PromptBuilder::new("text", &fields).build();

        assert!(prompt.contains("expert entity extractor"));
        assert!(prompt.contains("ONLY valid JSON"));
    }
}
