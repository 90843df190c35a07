//! Generate config command implementation

use anyhow::{bail, Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Commented configuration with every default spelled out
const TEMPLATE: &str = r#"# lexmetrics configuration
#
# Relative paths resolve against resources.data_root, and a relative
# data_root resolves against the directory of this file.

[resources]
data_root = "."
# Every file in this directory is a stop-word source
stop_words_dir = "StopWords"
master_dictionary_dir = "MasterDictionary"
positive_file = "positive-words.txt"
negative_file = "negative-words.txt"
# One stop word per line; leave unset for the built-in English list
# general_stop_words = "english-stopwords.txt"
# "fragment": drop a dictionary word found anywhere in the stop-word text
# "token": drop it only when it equals a stop-word entry
stop_word_match = "fragment"
# Decoder for files that are not valid UTF-8
fallback_encoding = "windows-1252"

[corpus]
# One text file per document; the file stem is the document id
dir = "textfile"

[execution]
# "sequential", "parallel" or "adaptive"
mode = "adaptive"
# Worker threads for parallel mode (0 = one per CPU)
threads = 0
# Adaptive mode goes parallel from this many documents
parallel_threshold = 8
"#;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        if self.output.exists() && !self.force {
            bail!(
                "{} already exists; pass --force to overwrite it",
                self.output.display()
            );
        }

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, TEMPLATE)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Point data_root at the directory holding StopWords/ and MasterDictionary/");
        println!("2. Check the resources load:");
        println!("   lexmetrics validate -c {}", self.output.display());
        println!("3. Analyse the corpus:");
        println!("   lexmetrics analyze -c {}", self.output.display());

        Ok(())
    }

    /// Template content
    pub fn template() -> &'static str {
        TEMPLATE
    }
}
