//! Skimmer CLI library.
//!
//! Provides the pieces behind the `skim` binary: argument parsing,
//! configuration management, demo documents, and output formatting.

pub mod cli;
pub mod config;
pub mod demo;
pub mod error;
pub mod output;

pub use cli::{Cli, Engine};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
