//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration, persisted as TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Required fields, in reporting order
    #[serde(default = "default_fields")]
    pub required_fields: Vec<String>,

    /// Maximum extraction attempts per document
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,

    /// Azure OpenAI settings for the remote engine
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub azure: Option<AzureSettings>,
}

/// Settings for the Azure engine. The API key is deliberately not part of
/// the file; it comes from the environment or the command line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AzureSettings {
    /// Resource endpoint URL
    pub endpoint: String,

    /// Deployment name
    pub deployment: String,

    /// API version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,

    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

fn default_fields() -> Vec<String> {
    vec![
        "company".to_string(),
        "budget".to_string(),
        "deadline".to_string(),
    ]
}

fn default_max_attempts() -> usize {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            required_fields: default_fields(),
            max_attempts: default_max_attempts(),
            azure: None,
        }
    }
}

impl Config {
    /// Get the configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("could not find home directory".into()))?;
        Ok(home.join(".skimmer").join("config.toml"))
    }

    /// Load configuration from the default path, or defaults when absent.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Save configuration to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }
}
