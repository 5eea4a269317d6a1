//! The bounded-retry orchestration state machine

use crate::config::PipelineConfig;
use crate::error::{PipelineError, Result};
use crate::responder::respond;
use skimmer_domain::{
    validate, EntityExtractor, EntityMap, FieldSet, ProcessReport, ValidationOutcome,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Where the loop goes after a Validating step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    /// Loop back to Extracting with the accumulated entities
    Retry,
    /// Render the final report
    Respond,
}

/// Exit conditions are explicit: a complete outcome or an exhausted attempt
/// budget ends the loop, nothing else does.
fn decide(outcome: &ValidationOutcome, attempt: usize, max_attempts: usize) -> Transition {
    if outcome.is_complete() || attempt >= max_attempts {
        Transition::Respond
    } else {
        Transition::Retry
    }
}

/// Drives the extract → validate → respond loop for one document at a time.
///
/// Construction validates configuration up front; `process` itself cannot
/// fail — recoverable extractor errors degrade a single attempt's yield and
/// the final report always reflects whatever accumulated.
///
/// One orchestrator may serve concurrent `process` calls: each call owns its
/// processing state and the extractor is shared behind an `Arc`.
pub struct Orchestrator<E: EntityExtractor> {
    extractor: Arc<E>,
    fields: FieldSet,
    max_attempts: usize,
}

impl<E: EntityExtractor> Orchestrator<E> {
    /// Create an orchestrator, failing fast on invalid configuration.
    pub fn new(extractor: E, config: PipelineConfig) -> Result<Self> {
        config.validate().map_err(PipelineError::Config)?;
        let fields = FieldSet::new(config.required_fields).map_err(PipelineError::Config)?;

        Ok(Self {
            extractor: Arc::new(extractor),
            fields,
            max_attempts: config.max_attempts,
        })
    }

    /// The configured required fields, in reporting order.
    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    /// Process one document to a final report.
    ///
    /// Runs up to `max_attempts` extraction attempts, merging each yield
    /// into the accumulated entity map, and stops as soon as every required
    /// field is present. Cancellation is cooperative: dropping the returned
    /// future abandons the in-flight attempt and discards all state.
    pub async fn process(&self, document: &str) -> ProcessReport {
        let mut entities = EntityMap::new();
        let mut attempt = 0;

        info!(
            fields = self.fields.len(),
            max_attempts = self.max_attempts,
            "starting document run"
        );

        let outcome = loop {
            // Extracting
            match self.extractor.extract(document, &self.fields).await {
                Ok(found) => {
                    debug!(attempt, found = found.len(), "extraction attempt yielded");
                    entities.merge(self.scope_to_fields(found));
                }
                Err(e) => {
                    // Recoverable: this attempt yields nothing, the loop goes on.
                    warn!(attempt, error = %e, "extraction attempt failed, zero yield");
                }
            }
            attempt += 1;

            // Validating
            let outcome = validate(&entities, &self.fields);
            debug!(
                attempt,
                status = ?outcome.status,
                missing = outcome.missing.len(),
                "validated accumulated entities"
            );

            match decide(&outcome, attempt, self.max_attempts) {
                Transition::Respond => break outcome,
                Transition::Retry => {
                    info!(attempt, missing = ?outcome.missing, "retrying extraction");
                }
            }
        };

        // Responding
        let message = respond(&entities, &outcome, &self.fields);

        info!(
            attempts = attempt,
            status = ?outcome.status,
            "document run finished"
        );

        ProcessReport {
            status: outcome.status,
            entities,
            missing: outcome.missing,
            message,
            attempts: attempt,
        }
    }

    /// Strategies must only return configured keys; filter again here so the
    /// invariant holds even against a misbehaving implementation.
    fn scope_to_fields(&self, found: EntityMap) -> EntityMap {
        let mut scoped = EntityMap::new();
        for (field, value) in found.iter() {
            if self.fields.contains(field) {
                scoped.insert(field, value);
            }
        }
        scoped
    }
}
