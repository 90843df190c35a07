//! Application layer for lexmetrics
//!
//! This crate loads the analysis resources described by an [`EngineConfig`],
//! reads document corpora and runs batches through the scorers of
//! `lexmetrics-core`, sequentially or on a rayon worker pool.

#![warn(missing_docs)]

pub mod config;
pub mod document;
pub mod error;
pub mod orchestrator;
pub mod resources;

// Re-export key types
pub use config::{CorpusConfig, EngineConfig, ExecutionConfig, ResourceConfig};
pub use document::{corpus_files, load_corpus, DocumentId, RawDocument};
pub use error::{EngineError, Result};
pub use orchestrator::{
    auto_select, AnalysisOrchestrator, BatchReport, DocumentFailure, ExecutionMode,
};
pub use resources::{
    load_general_stop_words, load_master_list, read_source, Resources, StopWordCatalog,
};

// Re-export from core for convenience
pub use lexmetrics_core::{CoreError, MetricName, MetricValue, MetricsRecord, StopWordMatch};
