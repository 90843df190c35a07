//! Batch analysis over shared resources
//!
//! Every document is analysed independently. A document whose metrics cannot
//! be computed is recorded as a failure and never aborts the batch.

use crate::config::EngineConfig;
use crate::document::{DocumentId, RawDocument};
#[cfg(feature = "parallel")]
use crate::error::EngineError;
use crate::error::Result;
use crate::resources::Resources;
use lexmetrics_core::{CoreError, MetricsRecord, ReadabilityScorer, SentimentScorer, Tokenizer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Execution mode selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// One tokenizer, documents in order
    Sequential,
    /// Worker pool with one tokenizer per task
    Parallel,
    /// Parallel once the batch reaches the configured threshold
    #[default]
    Adaptive,
}

impl ExecutionMode {
    /// Lower-case name as used in configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionMode::Sequential => "sequential",
            ExecutionMode::Parallel => "parallel",
            ExecutionMode::Adaptive => "adaptive",
        }
    }
}

/// Pick sequential or parallel for a batch of `documents`
pub fn auto_select(documents: usize, threshold: usize) -> ExecutionMode {
    if documents < 2 || documents < threshold {
        ExecutionMode::Sequential
    } else {
        #[cfg(feature = "parallel")]
        return ExecutionMode::Parallel;

        #[cfg(not(feature = "parallel"))]
        ExecutionMode::Sequential
    }
}

/// A document whose metrics could not be computed
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentFailure {
    /// The failed document
    pub id: DocumentId,
    /// Why it failed
    pub error: CoreError,
}

/// Outcome of a batch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    /// Metrics per successfully analysed document, ordered by id
    pub records: BTreeMap<DocumentId, MetricsRecord>,
    /// Documents that failed, in input order
    pub failures: Vec<DocumentFailure>,
}

impl BatchReport {
    fn push(&mut self, id: DocumentId, outcome: std::result::Result<MetricsRecord, CoreError>) {
        match outcome {
            Ok(record) => {
                if self.records.insert(id.clone(), record).is_some() {
                    log::warn!("document {id} appears more than once; keeping the last");
                }
            }
            Err(error) => {
                log::warn!("document {id} failed: {error}");
                self.failures.push(DocumentFailure { id, error });
            }
        }
    }

    /// Number of analysed documents
    pub fn success_count(&self) -> usize {
        self.records.len()
    }

    /// Number of failed documents
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// Whether the batch produced nothing at all
    pub fn is_empty(&self) -> bool {
        self.records.is_empty() && self.failures.is_empty()
    }
}

/// Runs the scorers over documents with shared, read-only resources
#[derive(Debug, Clone)]
pub struct AnalysisOrchestrator {
    resources: Resources,
    mode: ExecutionMode,
    threads: usize,
    parallel_threshold: usize,
}

impl AnalysisOrchestrator {
    /// Create with default execution settings
    pub fn new(resources: Resources) -> Self {
        let defaults = EngineConfig::default().execution;
        Self {
            resources,
            mode: defaults.mode,
            threads: defaults.threads,
            parallel_threshold: defaults.parallel_threshold,
        }
    }

    /// Load resources and execution settings from a configuration
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        config.validate()?;
        let resources = Resources::load(config)?;
        Ok(Self::new(resources)
            .with_mode(config.execution.mode)
            .with_threads(config.execution.threads)
            .with_parallel_threshold(config.execution.parallel_threshold))
    }

    /// Set the execution mode
    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the worker thread count (0 = one per CPU)
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Set the adaptive threshold in documents
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold.max(1);
        self
    }

    /// The shared resources
    pub fn resources(&self) -> &Resources {
        &self.resources
    }

    /// The configured mode
    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    /// The configured worker thread count
    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Analyse one document with a caller-owned tokenizer
    ///
    /// The text is lower-cased before tokenization.
    pub fn analyze_document(
        &self,
        tokenizer: &mut Tokenizer,
        document: &RawDocument,
    ) -> std::result::Result<MetricsRecord, CoreError> {
        tokenizer.bind_text(document.text.to_lowercase());

        let sentiment = SentimentScorer::new(tokenizer, self.resources.lexicon());
        let readability =
            ReadabilityScorer::new(tokenizer, self.resources.general_stop_words());
        let record = MetricsRecord::from_scorers(&sentiment, &readability)?;

        log::info!("analysed document {}", document.id);
        Ok(record)
    }

    /// Analyse a batch
    pub fn analyze_batch(&self, documents: &[RawDocument]) -> Result<BatchReport> {
        self.analyze_batch_with_progress(documents, |_| {})
    }

    /// Analyse a batch, calling `progress` after each document
    ///
    /// The report is identical whichever mode runs it. `progress` may be
    /// called from worker threads and in any order.
    pub fn analyze_batch_with_progress<F>(
        &self,
        documents: &[RawDocument],
        progress: F,
    ) -> Result<BatchReport>
    where
        F: Fn(&DocumentId) + Sync + Send,
    {
        let mode = self.resolve_mode(documents.len());
        log::info!(
            "analysing {} documents ({} mode)",
            documents.len(),
            mode.as_str()
        );

        let outcomes = match mode {
            #[cfg(feature = "parallel")]
            ExecutionMode::Parallel => self.run_parallel(documents, &progress)?,
            _ => self.run_sequential(documents, &progress),
        };

        let mut report = BatchReport::default();
        for (id, outcome) in outcomes {
            report.push(id, outcome);
        }
        log::info!(
            "batch finished: {} analysed, {} failed",
            report.success_count(),
            report.failure_count()
        );
        Ok(report)
    }

    fn resolve_mode(&self, documents: usize) -> ExecutionMode {
        match self.mode {
            ExecutionMode::Adaptive => auto_select(documents, self.parallel_threshold),
            #[cfg(not(feature = "parallel"))]
            ExecutionMode::Parallel => {
                log::warn!("built without parallel support; running sequentially");
                ExecutionMode::Sequential
            }
            mode => mode,
        }
    }

    fn run_sequential<F>(&self, documents: &[RawDocument], progress: &F) -> Vec<Outcome>
    where
        F: Fn(&DocumentId),
    {
        let mut tokenizer = Tokenizer::new();
        documents
            .iter()
            .map(|doc| {
                let outcome = self.analyze_document(&mut tokenizer, doc);
                progress(&doc.id);
                (doc.id.clone(), outcome)
            })
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn run_parallel<F>(&self, documents: &[RawDocument], progress: &F) -> Result<Vec<Outcome>>
    where
        F: Fn(&DocumentId) + Sync + Send,
    {
        use rayon::prelude::*;

        let threads = if self.threads == 0 {
            num_cpus::get()
        } else {
            self.threads
        };
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("lexmetrics-{i}"))
            .build()
            .map_err(|e| EngineError::ThreadPool(e.to_string()))?;
        log::debug!("parallel analysis on {threads} threads");

        Ok(pool.install(|| {
            documents
                .par_iter()
                .map_init(Tokenizer::new, |tokenizer, doc| {
                    let outcome = self.analyze_document(tokenizer, doc);
                    progress(&doc.id);
                    (doc.id.clone(), outcome)
                })
                .collect()
        }))
    }
}

type Outcome = (DocumentId, std::result::Result<MetricsRecord, CoreError>);

#[cfg(test)]
mod tests {
    use super::*;
    use lexmetrics_core::{GeneralStopWords, SentimentLexicon, StopWordSet};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn orchestrator() -> AnalysisOrchestrator {
        let stop_words = StopWordSet::from_sources(["the\nand\n"]);
        let lexicon = SentimentLexicon::builder(&stop_words)
            .positive_words("good\ngreat\n")
            .negative_words("bad\n")
            .build();
        AnalysisOrchestrator::new(Resources::new(
            stop_words,
            lexicon,
            GeneralStopWords::english(),
        ))
    }

    fn batch() -> Vec<RawDocument> {
        vec![
            RawDocument::new(3i64, "A GOOD year. Great returns!"),
            RawDocument::new(1i64, "Bad weather hurt sales."),
            RawDocument::new(2i64, ""),
            RawDocument::new("notes", "We expect good things."),
        ]
    }

    #[test]
    fn test_auto_select() {
        assert_eq!(auto_select(1, 1), ExecutionMode::Sequential);
        assert_eq!(auto_select(5, 8), ExecutionMode::Sequential);

        #[cfg(feature = "parallel")]
        assert_eq!(auto_select(8, 8), ExecutionMode::Parallel);
    }

    #[test]
    fn test_document_text_is_lowercased() {
        let orchestrator = orchestrator();
        let mut tokenizer = Tokenizer::new();
        let record = orchestrator
            .analyze_document(&mut tokenizer, &RawDocument::new(1i64, "GOOD GOOD Bad"))
            .unwrap();

        assert_eq!(record.positive_score, 2);
        assert_eq!(record.negative_score, 1);
        assert_eq!(tokenizer.text(), Some("good good bad"));
    }

    #[test]
    fn test_empty_document_is_reported_not_fatal() {
        let report = orchestrator()
            .with_mode(ExecutionMode::Sequential)
            .analyze_batch(&batch())
            .unwrap();

        assert_eq!(report.success_count(), 3);
        assert_eq!(report.failure_count(), 1);
        assert_eq!(report.failures[0].id, DocumentId::Numeric(2));
        assert!(matches!(report.failures[0].error, CoreError::Scoring(_)));

        let ids: Vec<String> = report.records.keys().map(ToString::to_string).collect();
        assert_eq!(ids, ["1", "3", "notes"]);
    }

    #[test]
    fn test_sequential_and_parallel_agree() {
        let docs: Vec<RawDocument> = batch()
            .into_iter()
            .cycle()
            .take(40)
            .enumerate()
            .map(|(i, doc)| RawDocument::new(i as i64, doc.text))
            .collect();

        let sequential = orchestrator()
            .with_mode(ExecutionMode::Sequential)
            .analyze_batch(&docs)
            .unwrap();
        let parallel = orchestrator()
            .with_mode(ExecutionMode::Parallel)
            .with_threads(4)
            .analyze_batch(&docs)
            .unwrap();
        let adaptive = orchestrator()
            .with_parallel_threshold(2)
            .analyze_batch(&docs)
            .unwrap();

        assert_eq!(sequential, parallel);
        assert_eq!(sequential, adaptive);
        assert_eq!(sequential.failure_count(), 10);
    }

    #[test]
    fn test_progress_called_per_document() {
        let calls = AtomicUsize::new(0);
        let docs = batch();
        orchestrator()
            .with_mode(ExecutionMode::Parallel)
            .analyze_batch_with_progress(&docs, |_| {
                calls.fetch_add(1, Ordering::SeqCst);
            })
            .unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), docs.len());
    }

    #[test]
    fn test_duplicate_ids_keep_last() {
        let docs = vec![
            RawDocument::new(7i64, "good"),
            RawDocument::new(7i64, "bad bad"),
        ];
        let report = orchestrator().analyze_batch(&docs).unwrap();
        assert_eq!(report.success_count(), 1);
        assert_eq!(report.records[&DocumentId::Numeric(7)].negative_score, 2);
    }

    #[test]
    fn test_empty_batch() {
        let report = orchestrator().analyze_batch(&[]).unwrap();
        assert!(report.is_empty());
    }
}
