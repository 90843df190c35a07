//! Engine error types

use lexmetrics_core::CoreError;
use std::path::PathBuf;
use thiserror::Error;

/// Engine-level errors (application layer)
#[derive(Error, Debug)]
pub enum EngineError {
    /// A stop-word directory or master dictionary could not be loaded
    #[error("failed to load lexicon resource '{}': {reason}", path.display())]
    LexiconLoad {
        /// The resource path
        path: PathBuf,
        /// Why loading failed
        reason: String,
    },

    /// Configuration error
    #[error("invalid configuration: {0}")]
    Config(String),

    /// I/O error outside resource loading
    #[error("I/O error: {0}")]
    Io(String),

    /// Core algorithm error
    #[error("core algorithm error: {0}")]
    Core(#[from] CoreError),

    /// The worker pool could not be created
    #[error("thread pool error: {0}")]
    ThreadPool(String),
}

impl EngineError {
    pub(crate) fn lexicon_load(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        EngineError::LexiconLoad {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::Io(err.to_string())
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
