//! List command implementation

use crate::output::OutputFormat;
use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use lexmetrics_core::MetricName;

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List the metrics computed for each document
    Metrics,

    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Print the requested listing to stdout
    pub fn execute(&self) -> Result<()> {
        for line in self.lines() {
            println!("{line}");
        }
        Ok(())
    }

    fn lines(&self) -> Vec<String> {
        match self {
            ListCommands::Metrics => MetricName::ALL
                .iter()
                .map(|name| name.as_str().to_string())
                .collect(),
            ListCommands::Formats => OutputFormat::value_variants()
                .iter()
                .filter_map(|format| format.to_possible_value())
                .map(|value| match value.get_help() {
                    Some(help) => format!("{:<10} {help}", value.get_name()),
                    None => value.get_name().to_string(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_metrics() {
        let lines = ListCommands::Metrics.lines();
        assert_eq!(lines.len(), 13);
        assert_eq!(lines[0], "POSITIVE SCORE");
        assert_eq!(lines[12], "AVG WORD LENGTH");
    }

    #[test]
    fn test_list_formats() {
        let lines = ListCommands::Formats.lines();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().any(|l| l.starts_with("json")));
        assert!(lines.iter().any(|l| l.starts_with("markdown")));
    }
}
