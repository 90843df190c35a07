//! Input documents and corpus loading

use crate::error::{EngineError, Result};
use crate::resources::read_source;
use encoding_rs::Encoding;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Identifier of one document
///
/// Numeric identifiers sort numerically and before any name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocumentId {
    /// Identifier that parses as an integer
    Numeric(i64),
    /// Any other identifier
    Name(String),
}

impl DocumentId {
    /// Parse an identifier, preferring the numeric form
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.parse::<i64>() {
            Ok(n) => DocumentId::Numeric(n),
            Err(_) => DocumentId::Name(trimmed.to_string()),
        }
    }

    /// Identifier derived from a file stem
    pub fn from_path(path: &Path) -> Option<Self> {
        path.file_stem()
            .map(|stem| Self::parse(&stem.to_string_lossy()))
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentId::Numeric(n) => write!(f, "{n}"),
            DocumentId::Name(name) => f.write_str(name),
        }
    }
}

impl From<i64> for DocumentId {
    fn from(n: i64) -> Self {
        DocumentId::Numeric(n)
    }
}

impl From<&str> for DocumentId {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

/// One document to analyse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    /// Document identifier
    pub id: DocumentId,
    /// Raw text, as extracted upstream
    pub text: String,
}

impl RawDocument {
    /// Create a document
    pub fn new(id: impl Into<DocumentId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }

    /// Read a document file; the identifier is the file stem
    pub fn from_file(path: impl AsRef<Path>, fallback: &'static Encoding) -> Result<Self> {
        let path = path.as_ref();
        let id = DocumentId::from_path(path)
            .ok_or_else(|| EngineError::Io(format!("'{}' has no file name", path.display())))?;
        let text = read_source(path, fallback).map_err(|e| {
            EngineError::Io(format!("Failed to read '{}': {e}", path.display()))
        })?;
        Ok(Self { id, text })
    }
}

/// List the document files of a corpus directory, sorted by path
pub fn corpus_files(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir).map_err(|e| {
        EngineError::Io(format!("Failed to read corpus '{}': {e}", dir.display()))
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Load every document of a corpus directory
///
/// A missing directory is an error; an unreadable file is logged and skipped.
pub fn load_corpus(
    dir: impl AsRef<Path>,
    fallback: &'static Encoding,
) -> Result<Vec<RawDocument>> {
    let dir = dir.as_ref();
    let mut documents = Vec::new();

    for path in corpus_files(dir)? {
        match RawDocument::from_file(&path, fallback) {
            Ok(doc) => documents.push(doc),
            Err(e) => log::warn!("skipping document {}: {e}", path.display()),
        }
    }

    log::info!("loaded {} documents from {}", documents.len(), dir.display());
    Ok(documents)
}
