//! CLI command definitions and argument parsing.

use crate::error::{CliError, Result};
use clap::Parser;
use std::path::PathBuf;

/// Skim required fields out of free-form documents.
#[derive(Debug, Parser)]
#[command(name = "skim")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Document file to process (reads stdin when omitted)
    pub document: Option<PathBuf>,

    /// Required field (repeatable); defaults to the configured list
    #[arg(short = 'F', long = "field")]
    pub fields: Vec<String>,

    /// Maximum extraction attempts per document
    #[arg(short, long)]
    pub max_attempts: Option<usize>,

    /// Extraction engine
    #[arg(short, long, value_enum, default_value_t = Engine::Pattern)]
    pub engine: Engine,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = CliFormat::Text)]
    pub format: CliFormat,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Run the built-in demo documents instead of reading input
    #[arg(long)]
    pub demo: bool,

    /// Azure OpenAI endpoint (azure engine only)
    #[arg(long, env = "AZURE_OPENAI_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Azure OpenAI API key (azure engine only)
    #[arg(long, env = "AZURE_OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Azure OpenAI deployment name (azure engine only)
    #[arg(long, env = "AZURE_OPENAI_DEPLOYMENT_NAME")]
    pub deployment: Option<String>,

    /// Azure OpenAI API version (azure engine only)
    #[arg(long, env = "AZURE_OPENAI_API_VERSION")]
    pub api_version: Option<String>,

    /// Sampling temperature (azure engine only)
    #[arg(long)]
    pub temperature: Option<f64>,
}

/// Pick the field list for the run: `--field` flags override the configured
/// list. A blank name on the command line is rejected up front rather than
/// being silently dropped later.
pub fn resolve_fields(flag_fields: &[String], config_fields: &[String]) -> Result<Vec<String>> {
    if flag_fields.is_empty() {
        return Ok(config_fields.to_vec());
    }
    if flag_fields.iter().any(|f| f.trim().is_empty()) {
        return Err(CliError::InvalidInput(
            "--field requires a non-blank field name".to_string(),
        ));
    }
    Ok(flag_fields.to_vec())
}

/// Which extraction strategy drives the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Engine {
    /// Deterministic text-matching rules, no external service
    Pattern,
    /// Azure OpenAI chat-completions
    Azure,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Human-readable text (default)
    Text,
    /// JSON report
    Json,
    /// Status word only
    Quiet,
}
