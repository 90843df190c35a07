//! Loading stop words and master dictionaries from disk
//!
//! Resources are read once, before any document is analysed, and shared
//! read-only through [`Resources`].

use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use encoding_rs::Encoding;
use lexmetrics_core::{GeneralStopWords, SentimentLexicon, StopWordMatch, StopWordSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Read a text file as UTF-8, decoding with `fallback` when that fails
pub fn read_source(path: &Path, fallback: &'static Encoding) -> std::io::Result<String> {
    let bytes = fs::read(path)?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => {
            log::debug!(
                "{} is not valid UTF-8, decoding as {}",
                path.display(),
                fallback.name()
            );
            let (text, _, _) = fallback.decode(err.as_bytes());
            Ok(text.into_owned())
        }
    }
}

/// The stop-word source files of one directory
#[derive(Debug, Clone)]
pub struct StopWordCatalog {
    sources: Vec<PathBuf>,
    encoding: &'static Encoding,
}

impl StopWordCatalog {
    /// Enumerate every non-directory entry of `dir`, in file-name order
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let entries = fs::read_dir(dir).map_err(|e| EngineError::lexicon_load(dir, e))?;

        let mut sources = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| EngineError::lexicon_load(dir, e))?;
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            if !is_dir {
                sources.push(entry.path());
            }
        }
        sources.sort();

        log::info!(
            "found {} stop-word sources in {}",
            sources.len(),
            dir.display()
        );
        Ok(Self {
            sources,
            encoding: encoding_rs::WINDOWS_1252,
        })
    }

    /// Use `encoding` for sources that are not valid UTF-8
    pub fn with_fallback_encoding(mut self, encoding: &'static Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Source files in concatenation order
    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    /// Concatenate every readable source
    ///
    /// A source that cannot be read is logged and skipped.
    pub fn build_stop_word_text(&self) -> String {
        let mut text = String::new();
        for path in &self.sources {
            match read_source(path, self.encoding) {
                Ok(content) => text.push_str(&content),
                Err(e) => log::warn!("skipping stop-word source {}: {e}", path.display()),
            }
        }
        text
    }

    /// Concatenate, clean and lower-case the sources
    pub fn cleaned_stop_words(&self) -> StopWordSet {
        let set = StopWordSet::from_raw(&self.build_stop_word_text());
        log::info!("stop words cleaned: {} entries", set.len());
        set
    }
}

/// Read one master dictionary file
///
/// An unreadable file aborts initialisation; an empty set is never substituted.
pub fn load_master_list(path: impl AsRef<Path>, fallback: &'static Encoding) -> Result<String> {
    let path = path.as_ref();
    let text = read_source(path, fallback).map_err(|e| EngineError::lexicon_load(path, e))?;
    log::info!("loaded master dictionary {}", path.display());
    Ok(text)
}

/// Load the general stop-word list, or the embedded English list for `None`
pub fn load_general_stop_words(
    path: Option<&Path>,
    fallback: &'static Encoding,
) -> Result<GeneralStopWords> {
    match path {
        None => Ok(GeneralStopWords::english()),
        Some(path) => {
            let text =
                read_source(path, fallback).map_err(|e| EngineError::lexicon_load(path, e))?;
            let words = GeneralStopWords::from_text(&text);
            log::info!(
                "loaded {} general stop words from {}",
                words.len(),
                path.display()
            );
            Ok(words)
        }
    }
}

/// Immutable analysis resources shared by every document
#[derive(Debug, Clone)]
pub struct Resources {
    stop_words: Arc<StopWordSet>,
    lexicon: Arc<SentimentLexicon>,
    general_stop_words: Arc<GeneralStopWords>,
}

impl Resources {
    /// Assemble from prepared parts
    pub fn new(
        stop_words: StopWordSet,
        lexicon: SentimentLexicon,
        general_stop_words: GeneralStopWords,
    ) -> Self {
        Self {
            stop_words: Arc::new(stop_words),
            lexicon: Arc::new(lexicon),
            general_stop_words: Arc::new(general_stop_words),
        }
    }

    /// Load everything the configuration points at
    pub fn load(config: &EngineConfig) -> Result<Self> {
        let encoding = config.fallback_encoding()?;

        let stop_words = StopWordCatalog::from_dir(config.stop_words_path())?
            .with_fallback_encoding(encoding)
            .cleaned_stop_words();

        let positive = load_master_list(config.positive_path(), encoding)?;
        let negative = load_master_list(config.negative_path(), encoding)?;
        let lexicon = build_lexicon(
            &stop_words,
            config.resources.stop_word_match,
            &positive,
            &negative,
        );

        let general =
            load_general_stop_words(config.general_stop_words_path().as_deref(), encoding)?;

        Ok(Self::new(stop_words, lexicon, general))
    }

    /// Cleaned stop words used to filter the dictionaries
    pub fn stop_words(&self) -> &StopWordSet {
        &self.stop_words
    }

    /// Positive and negative word sets
    pub fn lexicon(&self) -> &SentimentLexicon {
        &self.lexicon
    }

    /// General stop words for the readability word count
    pub fn general_stop_words(&self) -> &GeneralStopWords {
        &self.general_stop_words
    }
}

fn build_lexicon(
    stop_words: &StopWordSet,
    mode: StopWordMatch,
    positive: &str,
    negative: &str,
) -> SentimentLexicon {
    SentimentLexicon::builder(stop_words)
        .match_mode(mode)
        .positive_words(positive)
        .negative_words(negative)
        .build()
}
