//! Core error types (deterministic only)

use thiserror::Error;

/// Failures while segmenting the bound text into words or sentences
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenizationError {
    /// No text has been bound to the tokenizer yet
    #[error("no text bound to tokenizer")]
    Unbound,

    /// Bound bytes are not valid UTF-8
    #[error("invalid UTF-8 at byte {position}")]
    InvalidUtf8 {
        /// Byte offset of the first invalid sequence
        position: usize,
    },
}

/// Failures while computing a metric
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoringError {
    /// A formula's denominator is zero for this document
    #[error("{metric}: {denominator} is zero")]
    ZeroDenominator {
        /// Metric being computed
        metric: &'static str,
        /// Name of the quantity used as denominator
        denominator: &'static str,
    },
}

/// Errors raised by the analytics core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Tokenization failed
    #[error("tokenization failed: {0}")]
    Tokenization(#[from] TokenizationError),

    /// Scoring failed
    #[error("scoring failed: {0}")]
    Scoring(#[from] ScoringError),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
