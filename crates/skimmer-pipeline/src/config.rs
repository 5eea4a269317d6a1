//! Configuration for the pipeline

use serde::{Deserialize, Serialize};

/// Configuration for one orchestrator instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Fields every run must attempt to find, in reporting order
    pub required_fields: Vec<String>,

    /// Maximum extraction attempts per document
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
}

fn default_max_attempts() -> usize {
    3
}

impl PipelineConfig {
    /// Validate the configuration.
    ///
    /// A zero attempt budget is rejected, never silently coerced to one.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_attempts == 0 {
            return Err("max_attempts must be greater than 0".to_string());
        }
        if self.required_fields.iter().all(|f| f.trim().is_empty()) {
            return Err("required_fields must not be empty".to_string());
        }
        Ok(())
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("failed to parse TOML: {}", e))
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("failed to serialize to TOML: {}", e))
    }
}

impl Default for PipelineConfig {
    /// Default: the three canonical fields, three attempts.
    fn default() -> Self {
        Self {
            required_fields: vec![
                "company".to_string(),
                "budget".to_string(),
                "deadline".to_string(),
            ],
            max_attempts: default_max_attempts(),
        }
    }
}
