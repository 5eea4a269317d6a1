//! The externally visible result of a pipeline run

use crate::{EntityMap, ExtractionStatus};
use serde::Serialize;

/// Immutable snapshot produced once a document's run reaches its terminal
/// state. This is the only output a caller ever sees.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessReport {
    /// Final completion status
    pub status: ExtractionStatus,

    /// Everything found across all attempts
    pub entities: EntityMap,

    /// Required fields never found, in field-set order
    pub missing: Vec<String>,

    /// Rendered human-readable summary
    pub message: String,

    /// Number of extraction attempts performed
    pub attempts: usize,
}
