//! Positive and negative sentiment dictionaries

use crate::stopwords::{StopWordMatch, StopWordSet};
use crate::tokenizer::Tokenizer;
use std::collections::HashSet;

/// Tokenize a master word list and drop stop words
///
/// The result is a set, so it is identical for identical inputs regardless
/// of iteration order.
pub fn dictionary_words(
    master_text: &str,
    stop_words: &StopWordSet,
    mode: StopWordMatch,
) -> HashSet<String> {
    let tokenizer = Tokenizer::with_text(master_text);
    // An explicitly bound tokenizer cannot report `Unbound`
    let words = tokenizer.words().unwrap_or_default();

    words
        .iter()
        .filter(|word| !stop_words.matches(word, mode))
        .cloned()
        .collect()
}

/// The pair of sentiment word sets used for scoring
///
/// Built once and shared read-only. A word listed in both master files stays
/// in both sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentimentLexicon {
    positive: HashSet<String>,
    negative: HashSet<String>,
}

impl SentimentLexicon {
    /// Create from prepared word sets
    pub fn new(positive: HashSet<String>, negative: HashSet<String>) -> Self {
        Self { positive, negative }
    }

    /// Start building a lexicon filtered against `stop_words`
    pub fn builder(stop_words: &StopWordSet) -> LexiconBuilder<'_> {
        LexiconBuilder {
            stop_words,
            mode: StopWordMatch::default(),
            positive: HashSet::new(),
            negative: HashSet::new(),
        }
    }

    /// Whether `word` is in the positive set
    pub fn is_positive(&self, word: &str) -> bool {
        self.positive.contains(word)
    }

    /// Whether `word` is in the negative set
    pub fn is_negative(&self, word: &str) -> bool {
        self.negative.contains(word)
    }

    /// The positive set
    pub fn positive(&self) -> &HashSet<String> {
        &self.positive
    }

    /// The negative set
    pub fn negative(&self) -> &HashSet<String> {
        &self.negative
    }
}

/// Builder for [`SentimentLexicon`]
#[derive(Debug)]
pub struct LexiconBuilder<'a> {
    stop_words: &'a StopWordSet,
    mode: StopWordMatch,
    positive: HashSet<String>,
    negative: HashSet<String>,
}

impl LexiconBuilder<'_> {
    /// Set how words are matched against the stop words
    ///
    /// Applies to word lists added after this call.
    pub fn match_mode(mut self, mode: StopWordMatch) -> Self {
        self.mode = mode;
        self
    }

    /// Add the positive master list
    pub fn positive_words(mut self, master_text: &str) -> Self {
        self.positive
            .extend(dictionary_words(master_text, self.stop_words, self.mode));
        self
    }

    /// Add the negative master list
    pub fn negative_words(mut self, master_text: &str) -> Self {
        self.negative
            .extend(dictionary_words(master_text, self.stop_words, self.mode));
        self
    }

    /// Finish the lexicon
    pub fn build(self) -> SentimentLexicon {
        log::info!(
            "sentiment lexicon built: {} positive, {} negative",
            self.positive.len(),
            self.negative.len()
        );
        SentimentLexicon::new(self.positive, self.negative)
    }
}
