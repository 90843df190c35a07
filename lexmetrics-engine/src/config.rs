//! Engine configuration
//!
//! Every resource location lives in one explicit [`EngineConfig`], loaded
//! from TOML or built in code. Relative paths resolve against
//! `resources.data_root`; when the config comes from a file, a relative
//! `data_root` resolves against that file's directory.

use crate::error::{EngineError, Result};
use crate::orchestrator::ExecutionMode;
use encoding_rs::Encoding;
use lexmetrics_core::StopWordMatch;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Upper bound accepted for `execution.threads`
pub const MAX_THREADS: usize = 1024;

/// Full engine configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Lexicon and stop-word locations
    pub resources: ResourceConfig,
    /// Document corpus location
    pub corpus: CorpusConfig,
    /// Batch execution settings
    pub execution: ExecutionConfig,
}

/// Where the stop words and master dictionaries live
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceConfig {
    /// Base directory for every relative path
    pub data_root: PathBuf,
    /// Directory of stop-word source files
    pub stop_words_dir: PathBuf,
    /// Directory holding the positive and negative master lists
    pub master_dictionary_dir: PathBuf,
    /// Positive master list file name
    pub positive_file: String,
    /// Negative master list file name
    pub negative_file: String,
    /// Optional general stop-word file; empty selects the embedded English list
    pub general_stop_words: PathBuf,
    /// How dictionary words are matched against the stop words
    pub stop_word_match: StopWordMatch,
    /// Encoding label used when a source file is not valid UTF-8
    pub fallback_encoding: String,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            data_root: PathBuf::from("."),
            stop_words_dir: PathBuf::from("StopWords"),
            master_dictionary_dir: PathBuf::from("MasterDictionary"),
            positive_file: "positive-words.txt".to_string(),
            negative_file: "negative-words.txt".to_string(),
            general_stop_words: PathBuf::new(),
            stop_word_match: StopWordMatch::Fragment,
            fallback_encoding: "windows-1252".to_string(),
        }
    }
}

/// Where the documents to analyse live
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// Directory with one text file per document
    pub dir: PathBuf,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("textfile"),
        }
    }
}

/// Batch execution settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutionConfig {
    /// Execution mode selector
    pub mode: ExecutionMode,
    /// Worker threads for parallel execution (0 = one per CPU)
    pub threads: usize,
    /// Minimum batch size, in documents, for adaptive mode to go parallel
    pub parallel_threshold: usize,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            mode: ExecutionMode::Adaptive,
            threads: 0,
            parallel_threshold: 8,
        }
    }
}

impl EngineConfig {
    /// Load and validate a configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            EngineError::Config(format!("Failed to read file '{}': {e}", path.display()))
        })?;

        let mut config: EngineConfig = toml::from_str(&content).map_err(|e| {
            EngineError::Config(format!(
                "Failed to parse TOML from '{}': {e}",
                path.display()
            ))
        })?;

        if config.resources.data_root.is_relative() {
            if let Some(parent) = path.parent() {
                config.resources.data_root = parent.join(&config.resources.data_root);
            }
        }

        config.validate()?;
        log::info!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse a configuration from TOML text without touching the file system
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(content)
            .map_err(|e| EngineError::Config(format!("Failed to parse TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialise to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| EngineError::Config(format!("Failed to serialise TOML: {e}")))
    }

    /// Check values that deserialisation alone cannot
    pub fn validate(&self) -> Result<()> {
        let resources = &self.resources;

        if resources.positive_file.trim().is_empty() {
            return Err(EngineError::Config(
                "resources.positive_file must not be empty".to_string(),
            ));
        }
        if resources.negative_file.trim().is_empty() {
            return Err(EngineError::Config(
                "resources.negative_file must not be empty".to_string(),
            ));
        }
        if resources.stop_words_dir.as_os_str().is_empty() {
            return Err(EngineError::Config(
                "resources.stop_words_dir must not be empty".to_string(),
            ));
        }
        if resources.master_dictionary_dir.as_os_str().is_empty() {
            return Err(EngineError::Config(
                "resources.master_dictionary_dir must not be empty".to_string(),
            ));
        }
        self.fallback_encoding()?;

        if self.execution.parallel_threshold == 0 {
            return Err(EngineError::Config(
                "execution.parallel_threshold must be at least 1".to_string(),
            ));
        }
        if self.execution.threads > MAX_THREADS {
            return Err(EngineError::Config(format!(
                "execution.threads must be at most {MAX_THREADS}, got {}",
                self.execution.threads
            )));
        }

        Ok(())
    }

    /// Replace the data root
    pub fn with_data_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.resources.data_root = root.into();
        self
    }

    /// Set the execution mode
    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.execution.mode = mode;
        self
    }

    /// Set the worker thread count (0 = one per CPU)
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.execution.threads = threads;
        self
    }

    /// Set the adaptive parallel threshold in documents
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.execution.parallel_threshold = threshold;
        self
    }

    /// Set the stop-word match mode
    pub fn with_stop_word_match(mut self, mode: StopWordMatch) -> Self {
        self.resources.stop_word_match = mode;
        self
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.resources.data_root.join(path)
    }

    /// Resolved stop-word source directory
    pub fn stop_words_path(&self) -> PathBuf {
        self.resolve(&self.resources.stop_words_dir)
    }

    /// Resolved master dictionary directory
    pub fn master_dictionary_path(&self) -> PathBuf {
        self.resolve(&self.resources.master_dictionary_dir)
    }

    /// Resolved positive master list
    pub fn positive_path(&self) -> PathBuf {
        self.master_dictionary_path()
            .join(&self.resources.positive_file)
    }

    /// Resolved negative master list
    pub fn negative_path(&self) -> PathBuf {
        self.master_dictionary_path()
            .join(&self.resources.negative_file)
    }

    /// Resolved general stop-word file, `None` for the embedded list
    pub fn general_stop_words_path(&self) -> Option<PathBuf> {
        let path = &self.resources.general_stop_words;
        (!path.as_os_str().is_empty()).then(|| self.resolve(path))
    }

    /// Resolved corpus directory
    pub fn corpus_path(&self) -> PathBuf {
        self.resolve(&self.corpus.dir)
    }

    /// Encoding for source files that are not valid UTF-8
    pub fn fallback_encoding(&self) -> Result<&'static Encoding> {
        let label = &self.resources.fallback_encoding;
        Encoding::for_label(label.as_bytes())
            .ok_or_else(|| EngineError::Config(format!("Unknown encoding: {label}")))
    }
}
