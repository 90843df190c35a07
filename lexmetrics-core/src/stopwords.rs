//! Stop-word handling
//!
//! Two independent lists live here:
//! - [`StopWordSet`]: the cleaned concatenation of the stop-word source files,
//!   used to filter the sentiment dictionaries.
//! - [`GeneralStopWords`]: a general-purpose English list used by the
//!   readability word count.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::OnceLock;

/// Administrative surname block embedded in the name lists
fn surname_block() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)Surnames.*?\.last").expect("surname pattern is valid"))
}

/// URL-shaped substrings embedded in the source headers
fn url_like() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"http[s]?:(/)*([a-z.]+)*(/[a-z]+)*(/[A-z]+.?)([a-z]+.)([a-z]+)?")
            .expect("url pattern is valid")
    })
}

/// Clean raw stop-word source text
///
/// Removes the surname block, then URL-shaped substrings, then lower-cases.
/// The surname marker is matched case-sensitively, so the order matters.
pub fn clean_stop_word_text(raw: &str) -> String {
    let without_block = surname_block().replace_all(raw, "");
    let without_urls = url_like().replace_all(&without_block, "");
    without_urls.to_lowercase()
}

/// How a dictionary word is tested against the stop-word text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopWordMatch {
    /// The word occurs anywhere inside the cleaned stop-word text
    #[default]
    Fragment,
    /// The word equals one whitespace-separated stop-word entry
    Token,
}

/// Cleaned, lower-cased stop words built from the source files
#[derive(Debug, Clone, Default)]
pub struct StopWordSet {
    text: String,
    entries: HashSet<String>,
}

impl StopWordSet {
    /// Build from raw source texts, concatenated in the given order
    pub fn from_sources<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let raw: String = sources.into_iter().fold(String::new(), |mut acc, s| {
            acc.push_str(s.as_ref());
            acc
        });
        Self::from_raw(&raw)
    }

    /// Build from one raw concatenated text
    pub fn from_raw(raw: &str) -> Self {
        let text = clean_stop_word_text(raw);
        let entries = text.split_whitespace().map(str::to_string).collect();
        Self { text, entries }
    }

    /// The cleaned, lower-cased text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of distinct whitespace-separated entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `word` is a whole stop-word entry
    pub fn contains_token(&self, word: &str) -> bool {
        self.entries.contains(&word.to_lowercase())
    }

    /// Whether `word` occurs anywhere in the cleaned text
    pub fn contains_fragment(&self, word: &str) -> bool {
        !word.is_empty() && self.text.contains(&word.to_lowercase())
    }

    /// Test `word` with the given match mode
    pub fn matches(&self, word: &str, mode: StopWordMatch) -> bool {
        match mode {
            StopWordMatch::Fragment => self.contains_fragment(word),
            StopWordMatch::Token => self.contains_token(word),
        }
    }
}

/// General-purpose English stop words (the NLTK English list)
const ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// Stop words excluded from the readability word count
#[derive(Debug, Clone)]
pub struct GeneralStopWords {
    words: HashSet<String>,
}

impl Default for GeneralStopWords {
    fn default() -> Self {
        Self::english()
    }
}

impl GeneralStopWords {
    /// The embedded English list
    pub fn english() -> Self {
        Self::from_list(ENGLISH)
    }

    /// Build from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Build from whitespace-separated text, one or more words per line
    pub fn from_text(text: &str) -> Self {
        Self {
            words: text.split_whitespace().map(str::to_lowercase).collect(),
        }
    }

    /// Check if a word is a stop word, ignoring case
    pub fn is_stopword(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Number of stop words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
