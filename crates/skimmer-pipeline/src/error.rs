//! Error types for the pipeline

use thiserror::Error;

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Fatal pipeline errors.
///
/// Recoverable extraction failures never surface here; they are absorbed by
/// the retry loop. Only configuration problems reach the caller, and only at
/// construction time.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Invalid configuration (zero attempt budget, empty field list)
    #[error("configuration error: {0}")]
    Config(String),
}
