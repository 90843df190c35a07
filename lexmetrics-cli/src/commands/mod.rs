//! CLI command implementations

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use lexmetrics_engine::EngineConfig;
use std::path::PathBuf;

pub mod analyze;
pub mod generate_config;
pub mod list;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compute metrics for every document of a corpus
    Analyze(analyze::AnalyzeArgs),

    /// Load the lexicon resources and report their sizes
    Validate(validate::ValidateArgs),

    /// Write a commented configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: list::ListCommands,
    },
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Analyze(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}

/// Where to find the configuration and lexicon resources
#[derive(Debug, Clone, Default, Args)]
pub struct ResourceArgs {
    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding StopWords/, MasterDictionary/ and textfile/
    #[arg(long, value_name = "DIR", env = "LEXMETRICS_DATA_ROOT")]
    pub data_root: Option<PathBuf>,
}

impl ResourceArgs {
    /// Load the configuration file, or defaults, then apply `--data-root`
    pub fn load_config(&self) -> Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => EngineConfig::default(),
        };

        if let Some(root) = &self.data_root {
            config = config.with_data_root(root);
        }

        Ok(config)
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        _ => "trace",
    };

    // A second initialisation (e.g. in tests) keeps the first logger
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}
