//! Validate command implementation

use super::{init_logging, ResourceArgs};
use anyhow::{Context, Result};
use clap::Args;
use lexmetrics_engine::Resources;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub resources: ResourceArgs,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Sizes of the loaded resources
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceSummary {
    /// Whitespace-separated stop-word entries
    pub stop_words: usize,
    /// Positive dictionary words after stop-word filtering
    pub positive_words: usize,
    /// Negative dictionary words after stop-word filtering
    pub negative_words: usize,
    /// General stop words used for the readability word count
    pub general_stop_words: usize,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, false);

        let summary = self.summarize()?;
        println!("✓ Resources are valid!");
        println!("  Stop words: {}", summary.stop_words);
        println!("  Positive words: {}", summary.positive_words);
        println!("  Negative words: {}", summary.negative_words);
        println!("  General stop words: {}", summary.general_stop_words);
        Ok(())
    }

    /// Load every resource and count its entries
    pub fn summarize(&self) -> Result<ResourceSummary> {
        let config = self.resources.load_config()?;
        let resources = Resources::load(&config).context("Validation failed")?;

        Ok(ResourceSummary {
            stop_words: resources.stop_words().len(),
            positive_words: resources.lexicon().positive().len(),
            negative_words: resources.lexicon().negative().len(),
            general_stop_words: resources.general_stop_words().len(),
        })
    }
}
