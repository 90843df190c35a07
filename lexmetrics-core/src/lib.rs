//! Lexicon-based sentiment and readability scoring
//!
//! This crate holds the deterministic part of the analytics engine: it never
//! touches the file system. Callers load the stop-word sources and master
//! dictionaries themselves (see `lexmetrics-engine`) and hand the texts in.
//!
//! # Architecture
//!
//! - [`Tokenizer`]: word and sentence segmentation, cached per bound text
//! - [`stopwords`]: stop-word cleanup and the general English list
//! - [`SentimentLexicon`]: positive and negative word sets, stop words removed
//! - [`SentimentScorer`] / [`ReadabilityScorer`]: metric formulas over a tokenizer
//! - [`MetricsRecord`]: the 13 named metrics of one document
//!
//! # Example
//!
//! ```rust
//! use lexmetrics_core::{
//!     GeneralStopWords, MetricsRecord, ReadabilityScorer, SentimentLexicon,
//!     SentimentScorer, StopWordSet, Tokenizer,
//! };
//!
//! let stop_words = StopWordSet::from_sources(["the\na\nan\n"]);
//! let lexicon = SentimentLexicon::builder(&stop_words)
//!     .positive_words("good\ngreat\n")
//!     .negative_words("bad\n")
//!     .build();
//! let general = GeneralStopWords::english();
//!
//! let tokenizer = Tokenizer::with_text("a good start. a great finish!");
//! let record = MetricsRecord::from_scorers(
//!     &SentimentScorer::new(&tokenizer, &lexicon),
//!     &ReadabilityScorer::new(&tokenizer, &general),
//! )
//! .unwrap();
//!
//! assert_eq!(record.positive_score, 2);
//! assert_eq!(record.polarity_score, 1.0);
//! ```

pub mod error;
pub mod lexicon;
pub mod metrics;
pub mod readability;
pub mod sentiment;
pub mod stopwords;
pub mod tokenizer;

pub use error::{CoreError, Result, ScoringError, TokenizationError};
pub use lexicon::{dictionary_words, LexiconBuilder, SentimentLexicon};
pub use metrics::{round2, MetricName, MetricValue, MetricsRecord};
pub use readability::ReadabilityScorer;
pub use sentiment::SentimentScorer;
pub use stopwords::{clean_stop_word_text, GeneralStopWords, StopWordMatch, StopWordSet};
pub use tokenizer::{TokenizedDocument, Tokenizer};
