//! Skimmer Domain Layer
//!
//! Core types shared by every stage of the extraction pipeline. This crate
//! defines the value objects (field sets, entity maps, validation outcomes,
//! process reports) and the trait seam that extraction strategies implement.
//! Infrastructure (HTTP clients, regex engines) lives in other crates.
//!
//! ## Key Concepts
//!
//! - **FieldSet**: the ordered list of required fields a run must find
//! - **EntityMap**: field → value mapping; blank values never enter it
//! - **ValidationOutcome**: completion status plus ordered missing fields
//! - **ProcessReport**: the immutable, externally visible result of a run
//! - **EntityExtractor**: the polymorphic extraction contract

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod entities;
pub mod fields;
pub mod report;
pub mod traits;
pub mod validation;

// Re-exports for convenience
pub use entities::EntityMap;
pub use fields::FieldSet;
pub use report::ProcessReport;
pub use traits::{EntityExtractor, ExtractError};
pub use validation::{validate, ExtractionStatus, ValidationOutcome};
