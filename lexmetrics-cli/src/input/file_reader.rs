//! Document file reading

use crate::error::CliError;
use anyhow::{Context, Result};
use encoding_rs::Encoding;
use lexmetrics_engine::RawDocument;
use std::path::Path;

/// Reads explicitly named documents
pub struct FileReader;

impl FileReader {
    /// Read one document, decoding non-UTF-8 bytes with `fallback`
    pub fn read_document(path: &Path, fallback: &'static Encoding) -> Result<RawDocument> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }

        RawDocument::from_file(path, fallback)
            .with_context(|| format!("Failed to read file: {}", path.display()))
    }

    /// Read every path, failing on the first unreadable one
    pub fn read_all(
        paths: &[impl AsRef<Path>],
        fallback: &'static Encoding,
    ) -> Result<Vec<RawDocument>> {
        paths
            .iter()
            .map(|path| Self::read_document(path.as_ref(), fallback))
            .collect()
    }
}
