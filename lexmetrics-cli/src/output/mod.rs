//! Output formatting module

use anyhow::Result;
use lexmetrics_core::MetricsRecord;
use lexmetrics_engine::DocumentId;
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the metrics of one document
    fn format_record(&mut self, id: &DocumentId, record: &MetricsRecord) -> Result<()>;

    /// Finalize output (e.g., close the JSON object)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One block of metrics per document
    Text,
    /// JSON object keyed by document id
    Json,
    /// Markdown table, one row per document
    Markdown,
}

/// Writer target shared by every formatter
pub type BoxedWriter = Box<dyn Write + Send + Sync>;

/// Build the formatter for `format` over `writer`
pub fn create_formatter(format: OutputFormat, writer: BoxedWriter) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}

#[cfg(test)]
pub(crate) fn sample_record() -> MetricsRecord {
    MetricsRecord {
        positive_score: 3,
        negative_score: 1,
        polarity_score: 0.5,
        subjectivity_score: 0.13,
        avg_sentence_length: 15.0,
        percentage_of_complex_words: 0.21,
        fog_index: 6.084,
        avg_words_per_sentence: 15.0,
        complex_word_count: 6,
        word_count: 18,
        syllable_per_word: 9,
        personal_pronouns: 2,
        avg_word_length: 4.87,
    }
}
