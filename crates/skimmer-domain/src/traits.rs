//! Trait definitions for extraction strategies
//!
//! The orchestrator depends only on [`EntityExtractor`]; concrete strategies
//! (pattern matching, remote inference) live in infrastructure crates.

use crate::{EntityMap, FieldSet};
use async_trait::async_trait;
use thiserror::Error;

/// Recoverable failures an extraction strategy can report.
///
/// Neither variant aborts a pipeline run; the orchestrator treats a failed
/// attempt as having yielded nothing and lets the retry budget compensate.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Could not reach or authenticate with an external dependency
    #[error("transport error: {0}")]
    Transport(String),

    /// Received a reply that could not be decoded into the expected shape
    #[error("parse error: {0}")]
    Parse(String),
}

/// A strategy that pulls required-field values out of document text.
///
/// Contract: the returned map contains only keys drawn from `fields`, and
/// "not found" is expressed by omitting the key — never by an error or a
/// blank value. Implementations hold no per-call mutable state, so one
/// instance may serve concurrent runs.
#[async_trait]
pub trait EntityExtractor: Send + Sync {
    /// Best-effort extraction of `fields` from `document`.
    async fn extract(&self, document: &str, fields: &FieldSet) -> Result<EntityMap, ExtractError>;
}
