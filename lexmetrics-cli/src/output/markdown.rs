//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use lexmetrics_core::{MetricName, MetricsRecord};
use lexmetrics_engine::DocumentId;
use std::io::Write;

/// Markdown formatter - outputs a table with one row per document
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    document_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            document_count: 0,
        }
    }

    fn write_header(&mut self) -> Result<()> {
        let names: Vec<&str> = MetricName::ALL.iter().map(MetricName::as_str).collect();
        writeln!(self.writer, "| ID | {} |", names.join(" | "))?;
        writeln!(self.writer, "|---|{}", "---:|".repeat(names.len()))?;
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_record(&mut self, id: &DocumentId, record: &MetricsRecord) -> Result<()> {
        if self.document_count == 0 {
            self.write_header()?;
        }
        self.document_count += 1;

        let cells: Vec<String> = record.values().map(|(_, value)| value.to_string()).collect();
        writeln!(self.writer, "| {id} | {} |", cells.join(" | "))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total documents: {}*", self.document_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
