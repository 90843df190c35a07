//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use lexmetrics_core::MetricsRecord;
use lexmetrics_engine::DocumentId;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::io::Write;

/// JSON formatter - outputs one object keyed by document id
///
/// Documents and metric fields keep their emission order.
pub struct JsonFormatter<W: Write> {
    writer: W,
    records: Vec<(String, MetricsRecord)>,
}

struct Records<'a>(&'a [(String, MetricsRecord)]);

impl Serialize for Records<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (id, record) in self.0 {
            map.serialize_entry(id, record)?;
        }
        map.end()
    }
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            records: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_record(&mut self, id: &DocumentId, record: &MetricsRecord) -> Result<()> {
        self.records.push((id.to_string(), record.clone()));
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &Records(&self.records))?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::sample_record;

    #[test]
    fn test_object_keyed_by_id() {
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer);
            formatter
                .format_record(&DocumentId::Numeric(37), &sample_record())
                .unwrap();
            formatter
                .format_record(&DocumentId::Name("notes".to_string()), &sample_record())
                .unwrap();
            formatter.finish().unwrap();
        }

        let text = String::from_utf8(buffer).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["37"]["POSITIVE SCORE"], 3);
        assert_eq!(value["notes"]["AVG WORD LENGTH"], 4.87);

        // Emission order is preserved
        assert!(text.find("\"37\"").unwrap() < text.find("\"notes\"").unwrap());
        assert!(text.find("POSITIVE SCORE").unwrap() < text.find("FOG INDEX").unwrap());
    }

    #[test]
    fn test_empty_output_is_empty_object() {
        let mut buffer = Vec::new();
        JsonFormatter::new(&mut buffer).finish().unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "{}\n");
    }
}
