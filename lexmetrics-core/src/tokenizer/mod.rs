//! Word and sentence tokenization
//!
//! A [`Tokenizer`] is bound to one text at a time. Words and sentences are
//! computed lazily on first request and cached until the next bind, so every
//! scorer reading from the same tokenizer sees a consistent view of the most
//! recently bound text.
//!
//! The caches use [`OnceCell`], which makes a tokenizer `!Sync`: concurrent
//! analyses each need their own instance.

mod sentences;
mod words;

use crate::error::TokenizationError;
use std::cell::OnceCell;
use std::ops::Range;

/// Owned snapshot of a tokenized text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenizedDocument {
    /// Alphabetic word tokens, case as supplied
    pub words: Vec<String>,
    /// Sentences with surrounding whitespace removed
    pub sentences: Vec<String>,
}

#[derive(Debug, Default)]
struct Cache {
    spans: OnceCell<Vec<Range<usize>>>,
    words: OnceCell<Vec<String>>,
    sentences: OnceCell<Vec<String>>,
}

/// Splits bound text into word and sentence tokens
#[derive(Debug, Default)]
pub struct Tokenizer {
    text: Option<String>,
    cache: Cache,
}

impl Tokenizer {
    /// Create a tokenizer with no text bound
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tokenizer bound to `text`
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut tokenizer = Self::new();
        tokenizer.bind_text(text);
        tokenizer
    }

    /// Replace the bound text, discarding cached tokens
    pub fn bind_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
        self.cache = Cache::default();
    }

    /// Replace the bound text with UTF-8 decoded `bytes`
    ///
    /// On invalid UTF-8 the tokenizer is left unbound.
    pub fn bind_bytes(&mut self, bytes: Vec<u8>) -> Result<(), TokenizationError> {
        self.text = None;
        self.cache = Cache::default();
        let text = String::from_utf8(bytes).map_err(|e| TokenizationError::InvalidUtf8 {
            position: e.utf8_error().valid_up_to(),
        })?;
        self.bind_text(text);
        Ok(())
    }

    /// The currently bound text
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Alphabetic word tokens of the bound text, in order
    ///
    /// Tokens containing any non-alphabetic character are dropped whole.
    pub fn words(&self) -> Result<&[String], TokenizationError> {
        let text = self.bound()?;
        let spans = self.spans(text);
        let words = self.cache.words.get_or_init(|| {
            let words: Vec<String> = spans
                .iter()
                .flat_map(|span| words::split_sentence(text[span.clone()].trim()))
                .filter(|token| words::is_word(token))
                .map(str::to_string)
                .collect();
            log::debug!("tokenized {} words", words.len());
            words
        });
        Ok(words)
    }

    /// Sentences of the bound text, trimmed
    pub fn sentences(&self) -> Result<&[String], TokenizationError> {
        let text = self.bound()?;
        let spans = self.spans(text);
        let sentences = self.cache.sentences.get_or_init(|| {
            let sentences: Vec<String> = spans
                .iter()
                .map(|span| text[span.clone()].trim().to_string())
                .collect();
            log::debug!("tokenized {} sentences", sentences.len());
            sentences
        });
        Ok(sentences)
    }

    /// Owned copy of the current words and sentences
    pub fn document(&self) -> Result<TokenizedDocument, TokenizationError> {
        Ok(TokenizedDocument {
            words: self.words()?.to_vec(),
            sentences: self.sentences()?.to_vec(),
        })
    }

    fn bound(&self) -> Result<&str, TokenizationError> {
        self.text.as_deref().ok_or(TokenizationError::Unbound)
    }

    fn spans(&self, text: &str) -> &[Range<usize>] {
        self.cache
            .spans
            .get_or_init(|| sentences::sentence_spans(text))
    }
}
