//! Analyze command implementation

use super::{init_logging, ResourceArgs};
use crate::input::{resolve_patterns, FileReader};
use crate::output::{create_formatter, BoxedWriter, OutputFormat};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use lexmetrics_engine::{
    load_corpus, AnalysisOrchestrator, BatchReport, EngineConfig, ExecutionMode, RawDocument,
};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub resources: ResourceArgs,

    /// Input files or patterns (supports glob); default is the configured corpus
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Execution mode (default: from configuration)
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Worker threads for parallel mode (0 = one per CPU)
    #[arg(short = 't', long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Execution mode as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ModeArg {
    /// Analyse documents one after another
    Sequential,
    /// Analyse documents on a worker pool
    Parallel,
    /// Go parallel once the batch is large enough
    Adaptive,
}

impl From<ModeArg> for ExecutionMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Sequential => ExecutionMode::Sequential,
            ModeArg::Parallel => ExecutionMode::Parallel,
            ModeArg::Adaptive => ExecutionMode::Adaptive,
        }
    }
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting analysis");
        log::debug!("Arguments: {:?}", self);

        let config = self.effective_config()?;
        let orchestrator = AnalysisOrchestrator::from_config(&config)
            .context("Failed to load lexicon resources")?;

        let documents = self.load_documents(&config)?;
        if documents.is_empty() {
            log::warn!("no documents to analyse");
        }

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_documents(documents.len() as u64);
        let report = orchestrator
            .analyze_batch_with_progress(&documents, |id| progress.document_completed(id))?;
        progress.finish();

        self.write_report(&report)?;

        for failure in &report.failures {
            eprintln!("✗ Document {}: {}", failure.id, failure.error);
        }
        log::info!(
            "{} documents analysed, {} failed",
            report.success_count(),
            report.failure_count()
        );

        Ok(())
    }

    /// Configuration with the command-line overrides applied
    fn effective_config(&self) -> Result<EngineConfig> {
        let mut config = self.resources.load_config()?;
        if let Some(mode) = self.mode {
            config = config.with_mode(mode.into());
        }
        if let Some(threads) = self.threads {
            config = config.with_threads(threads);
        }
        config.validate()?;
        Ok(config)
    }

    fn load_documents(&self, config: &EngineConfig) -> Result<Vec<RawDocument>> {
        let fallback = config.fallback_encoding()?;

        if self.input.is_empty() {
            let dir = config.corpus_path();
            return load_corpus(&dir, fallback)
                .with_context(|| format!("Failed to load corpus {}", dir.display()));
        }

        let paths = resolve_patterns(&self.input)?;
        log::info!("Found {} files to analyse", paths.len());
        FileReader::read_all(&paths, fallback)
    }

    fn write_report(&self, report: &BatchReport) -> Result<()> {
        let writer: BoxedWriter = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        let mut formatter = create_formatter(self.format, writer);
        for (id, record) in &report.records {
            formatter.format_record(id, record)?;
        }
        formatter.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_data_root(root: &Path) {
        fs::create_dir_all(root.join("StopWords")).unwrap();
        fs::write(root.join("StopWords/StopWords_Generic.txt"), "ABOUT\n").unwrap();
        fs::create_dir_all(root.join("MasterDictionary")).unwrap();
        fs::write(root.join("MasterDictionary/positive-words.txt"), "good\n").unwrap();
        fs::write(root.join("MasterDictionary/negative-words.txt"), "bad\n").unwrap();
        fs::create_dir_all(root.join("textfile")).unwrap();
        fs::write(root.join("textfile/1.txt"), "Good news. Bad weather.").unwrap();
    }

    fn args_for(root: &Path) -> AnalyzeArgs {
        AnalyzeArgs {
            resources: ResourceArgs {
                config: None,
                data_root: Some(root.to_path_buf()),
            },
            input: Vec::new(),
            output: Some(root.join("out.json")),
            format: OutputFormat::Json,
            mode: None,
            threads: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_mode_arg_maps_to_execution_mode() {
        assert_eq!(
            ExecutionMode::from(ModeArg::Sequential),
            ExecutionMode::Sequential
        );
        assert_eq!(ExecutionMode::from(ModeArg::Parallel), ExecutionMode::Parallel);
        assert_eq!(ExecutionMode::from(ModeArg::Adaptive), ExecutionMode::Adaptive);
    }

    #[test]
    fn test_overrides_applied() {
        let temp_dir = TempDir::new().unwrap();
        let mut args = args_for(temp_dir.path());
        args.mode = Some(ModeArg::Sequential);
        args.threads = Some(2);

        let config = args.effective_config().unwrap();
        assert_eq!(config.execution.mode, ExecutionMode::Sequential);
        assert_eq!(config.execution.threads, 2);
        assert_eq!(config.resources.data_root, temp_dir.path());
    }

    #[test]
    fn test_too_many_threads_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let mut args = args_for(temp_dir.path());
        args.threads = Some(lexmetrics_engine::config::MAX_THREADS + 1);
        assert!(args.effective_config().is_err());
    }

    #[test]
    fn test_execute_writes_output_file() {
        let temp_dir = TempDir::new().unwrap();
        write_data_root(temp_dir.path());
        let args = args_for(temp_dir.path());

        args.execute().unwrap();

        let content = fs::read_to_string(temp_dir.path().join("out.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["1"]["POSITIVE SCORE"], 1);
        assert_eq!(value["1"]["NEGATIVE SCORE"], 1);
        assert_eq!(value["1"]["POLARITY SCORE"], 0.0);
    }

    #[test]
    fn test_execute_missing_corpus_fails() {
        let temp_dir = TempDir::new().unwrap();
        write_data_root(temp_dir.path());
        fs::remove_dir_all(temp_dir.path().join("textfile")).unwrap();

        let err = args_for(temp_dir.path()).execute().unwrap_err();
        assert!(err.to_string().contains("Failed to load corpus"));
    }
}
