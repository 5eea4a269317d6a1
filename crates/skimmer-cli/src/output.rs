//! Output formatting for the CLI.

use crate::cli::CliFormat;
use crate::error::Result;
use colored::Colorize;
use skimmer_domain::{ExtractionStatus, ProcessReport};

/// Output formatter.
pub struct Formatter {
    format: CliFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: CliFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a finished report.
    pub fn format_report(&self, report: &ProcessReport) -> Result<String> {
        match self.format {
            CliFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            CliFormat::Quiet => Ok(status_word(report.status).to_string()),
            CliFormat::Text => Ok(self.format_text(report)),
        }
    }

    fn format_text(&self, report: &ProcessReport) -> String {
        let status = status_word(report.status);
        let status = if self.color_enabled {
            match report.status {
                ExtractionStatus::Complete => status.green().bold().to_string(),
                ExtractionStatus::Partial => status.yellow().bold().to_string(),
                ExtractionStatus::Empty => status.red().bold().to_string(),
            }
        } else {
            status.to_string()
        };

        format!(
            "Status: {} (after {} attempt{})\n\n{}",
            status,
            report.attempts,
            if report.attempts == 1 { "" } else { "s" },
            report.message
        )
    }
}

fn status_word(status: ExtractionStatus) -> &'static str {
    match status {
        ExtractionStatus::Complete => "complete",
        ExtractionStatus::Partial => "partial",
        ExtractionStatus::Empty => "empty",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skimmer_domain::EntityMap;

    fn report() -> ProcessReport {
        let mut entities = EntityMap::new();
        entities.insert("company", "Acme");
        ProcessReport {
            status: ExtractionStatus::Partial,
            entities,
            missing: vec!["budget".into(), "deadline".into()],
            message: "Partial extraction completed.".into(),
            attempts: 3,
        }
    }

    #[test]
    fn test_text_format_without_color() {
        let formatter = Formatter::new(CliFormat::Text, false);
        let out = formatter.format_report(&report()).unwrap();

        assert!(out.contains("Status: partial (after 3 attempts)"));
        assert!(out.contains("Partial extraction completed."));
    }

    #[test]
    fn test_quiet_format_is_status_only() {
        let formatter = Formatter::new(CliFormat::Quiet, false);
        assert_eq!(formatter.format_report(&report()).unwrap(), "partial");
    }

    #[test]
    fn test_json_format_round_trips() {
        let formatter = Formatter::new(CliFormat::Json, false);
        let out = formatter.format_report(&report()).unwrap();

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["status"], "partial");
        assert_eq!(value["attempts"], 3);
        assert_eq!(value["entities"]["company"], "Acme");
        assert_eq!(value["missing"][0], "budget");
    }
}
