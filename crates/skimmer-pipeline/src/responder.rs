//! Final response rendering

use skimmer_domain::{EntityMap, ExtractionStatus, FieldSet, ValidationOutcome};

/// Render the user-facing summary for a finished run.
///
/// Trusts the outcome passed in; it never re-derives status or missing
/// fields. Present pairs and missing fields are both listed in field-set
/// order.
pub fn respond(entities: &EntityMap, outcome: &ValidationOutcome, fields: &FieldSet) -> String {
    match outcome.status {
        ExtractionStatus::Complete => {
            let mut message = String::from(
                "All required fields extracted successfully!\n\nExtracted entities:\n",
            );
            push_pairs(&mut message, entities, fields);
            message
        }
        ExtractionStatus::Partial => {
            let mut message = String::from("Partial extraction completed.\n\nExtracted entities:\n");
            push_pairs(&mut message, entities, fields);
            message.push_str(&format!(
                "\nMissing required fields: {}",
                outcome.missing.join(", ")
            ));
            message
        }
        ExtractionStatus::Empty => format!(
            "Entity extraction failed.\n\nMissing all required fields: {}\n\n\
             The document may not contain the required information or the \
             extraction process encountered an error.",
            outcome.missing.join(", ")
        ),
    }
}

fn push_pairs(message: &mut String, entities: &EntityMap, fields: &FieldSet) {
    for field in fields.iter() {
        if let Some(value) = entities.get(field) {
            message.push_str(&format!("- {}: {}\n", field, value));
        }
    }
}
