//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use lexmetrics_core::MetricsRecord;
use lexmetrics_engine::DocumentId;
use std::io::Write;

/// Plain text formatter - one block of `NAME: value` lines per document
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_record(&mut self, id: &DocumentId, record: &MetricsRecord) -> Result<()> {
        writeln!(self.writer, "Document {id}")?;
        for (name, value) in record.values() {
            writeln!(self.writer, "  {name}: {value}")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
