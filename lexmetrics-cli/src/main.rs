//! lexmetrics command-line entry point

use anyhow::Result;
use clap::Parser;
use lexmetrics_cli::commands::Commands;

/// Lexicon-based sentiment and readability metrics for text documents
#[derive(Debug, Parser)]
#[command(name = "lexmetrics", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
