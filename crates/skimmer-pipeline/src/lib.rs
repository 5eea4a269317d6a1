//! Skimmer Pipeline
//!
//! The orchestration state machine: sequences extraction, validation and
//! response generation for one document, retrying extraction a bounded
//! number of times while accumulating found entities.
//!
//! # Architecture
//!
//! ```text
//! Document → Extracting → Validating → {Retrying → Extracting | Responding} → Done
//! ```
//!
//! # Key Properties
//!
//! - **Bounded retries**: the loop never runs more than `max_attempts`
//!   extraction attempts.
//! - **Monotonic accumulation**: a field once found is never reverted by a
//!   later attempt that comes back empty.
//! - **Recoverable failures**: transport and parse errors degrade one
//!   attempt's yield to nothing; they never abort the run.
//!
//! # Example Usage
//!
//! ```
//! use skimmer_pipeline::{Orchestrator, PipelineConfig};
//! use skimmer_domain::{EntityExtractor, EntityMap, ExtractError, FieldSet};
//! # use async_trait::async_trait;
//! # struct Noop;
//! # #[async_trait]
//! # impl EntityExtractor for Noop {
//! #     async fn extract(&self, _d: &str, _f: &FieldSet) -> Result<EntityMap, ExtractError> {
//! #         Ok(EntityMap::new())
//! #     }
//! # }
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PipelineConfig {
//!     required_fields: vec!["company".into(), "budget".into(), "deadline".into()],
//!     max_attempts: 3,
//! };
//! let orchestrator = Orchestrator::new(Noop, config)?;
//!
//! let report = orchestrator.process("A campaign is needed.").await;
//! println!("{}", report.message);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod orchestrator;
mod responder;

pub use config::PipelineConfig;
pub use error::{PipelineError, Result};
pub use orchestrator::Orchestrator;
pub use responder::respond;
