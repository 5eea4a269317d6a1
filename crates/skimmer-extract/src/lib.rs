//! Skimmer Extraction Strategies
//!
//! Two interchangeable implementations of the
//! [`EntityExtractor`](skimmer_domain::EntityExtractor) contract:
//!
//! - **PatternExtractor**: deterministic text-matching rules per field; no
//!   external dependency, never suspends.
//! - **LlmExtractor**: builds a structured prompt, sends it through a
//!   [`ChatCompleter`](skimmer_llm::ChatCompleter), and parses the JSON
//!   reply. The only place in the pipeline that performs external I/O.
//!
//! The orchestrator invokes both identically; which one is in play is a
//! configuration decision.
//!
//! # Example Usage
//!
//! ```
//! use skimmer_domain::{EntityExtractor, FieldSet};
//! use skimmer_extract::PatternExtractor;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let fields = FieldSet::new(["company", "budget", "deadline"])?;
//! let extractor = PatternExtractor::new();
//!
//! let entities = extractor
//!     .extract("Acme needs a campaign with a budget of 10000.", &fields)
//!     .await?;
//!
//! assert_eq!(entities.get("company"), Some("Acme"));
//! assert_eq!(entities.get("budget"), Some("$10000"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod llm;
mod parser;
mod pattern;
mod prompt;

#[cfg(test)]
mod tests;

pub use llm::LlmExtractor;
pub use pattern::PatternExtractor;
pub use prompt::PromptBuilder;
