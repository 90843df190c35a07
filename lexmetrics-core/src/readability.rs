//! Readability metrics
//!
//! Two syllable heuristics coexist here and must stay separate:
//! - vowel runs (`[aeiou]+`) classify a single word as complex or not;
//! - the syllable pattern is summed over all words for the syllable metric.

use crate::error::{Result, ScoringError};
use crate::metrics::round2;
use crate::stopwords::GeneralStopWords;
use crate::tokenizer::Tokenizer;
use regex::Regex;
use std::sync::OnceLock;

/// Weight of the Gunning-Fog composition
pub const FOG_WEIGHT: f64 = 0.4;

fn vowel_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[aeiou]+").expect("vowel pattern is valid"))
}

/// Word ending in `es`, `ed`, `e` or consonant + `le` after at least one character
///
/// Applied to one whitespace-free word this yields at most one match, the
/// same count as the look-around form
/// `\b\w+(?:es|ed|e|[^aeiouy]le|[^aeiouy][aeiouy](?!$))+(?!\S)`.
fn syllable_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b\w+(?:es|ed|e|[^aeiouy]le|[^aeiouy][aeiouy])*(?:es|ed|e|[^aeiouy]le)$")
            .expect("syllable pattern is valid")
    })
}

fn pronoun_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\b(?:I|we|my|our|ours|us)\b").expect("pronoun pattern is valid")
    })
}

fn country_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\bUS\b").expect("country pattern is valid"))
}

/// Number of vowel runs in the lower-cased word
pub fn vowel_runs(word: &str) -> usize {
    vowel_run().find_iter(&word.to_lowercase()).count()
}

/// Whether a word is complex: at least 3 characters and more than 2 vowel runs
pub fn is_complex_word(word: &str) -> bool {
    word.chars().count() >= 3 && vowel_runs(word) > 2
}

/// Syllable pattern matches in the lower-cased word
pub fn syllable_matches(word: &str) -> usize {
    syllable_pattern().find_iter(&word.to_lowercase()).count()
}

fn zero(metric: &'static str, denominator: &'static str) -> crate::error::CoreError {
    ScoringError::ZeroDenominator {
        metric,
        denominator,
    }
    .into()
}

/// Readability metrics over the text bound to a tokenizer
#[derive(Debug, Clone, Copy)]
pub struct ReadabilityScorer<'a> {
    tokenizer: &'a Tokenizer,
    stop_words: &'a GeneralStopWords,
}

impl<'a> ReadabilityScorer<'a> {
    /// Create a scorer reading from `tokenizer`
    ///
    /// `stop_words` only affects [`word_count`](Self::word_count).
    pub fn new(tokenizer: &'a Tokenizer, stop_words: &'a GeneralStopWords) -> Self {
        Self {
            tokenizer,
            stop_words,
        }
    }

    fn words_per_sentence(&self, metric: &'static str) -> Result<f64> {
        let words = self.tokenizer.words()?.len();
        let sentences = self.tokenizer.sentences()?.len();
        if sentences == 0 {
            return Err(zero(metric, "sentence count"));
        }
        Ok(round2(words as f64 / sentences as f64))
    }

    /// Words per sentence, rounded to 2 places
    pub fn average_sentence_length(&self) -> Result<f64> {
        self.words_per_sentence("AVG SENTENCE LENGTH")
    }

    /// Number of complex words
    pub fn complex_word_count(&self) -> Result<usize> {
        let words = self.tokenizer.words()?;
        Ok(words.iter().filter(|w| is_complex_word(w)).count())
    }

    /// Complex words over all words, rounded to 2 places
    pub fn percent_complex_words(&self) -> Result<f64> {
        let total = self.tokenizer.words()?.len();
        if total == 0 {
            return Err(zero("PERCENTAGE OF COMPLEX WORDS", "word count"));
        }
        let complex = self.complex_word_count()?;
        Ok(round2(complex as f64 / total as f64))
    }

    /// Gunning-Fog index: `0.4 × (average sentence length + percent complex words)`
    pub fn fog_index(&self) -> Result<f64> {
        let sentence_length = self.average_sentence_length()?;
        let complex = self.percent_complex_words()?;
        Ok(FOG_WEIGHT * (sentence_length + complex))
    }

    /// Words per sentence; same value as [`average_sentence_length`](Self::average_sentence_length)
    pub fn average_words_per_sentence(&self) -> Result<f64> {
        self.words_per_sentence("AVG NUMBER OF WORDS PER SENTENCE")
    }

    /// Words that are not general stop words
    pub fn word_count(&self) -> Result<usize> {
        let words = self.tokenizer.words()?;
        Ok(words
            .iter()
            .filter(|w| !self.stop_words.is_stopword(w))
            .count())
    }

    /// Syllable pattern matches summed over all words
    pub fn syllable_per_word(&self) -> Result<usize> {
        let words = self.tokenizer.words()?;
        Ok(words.iter().map(|w| syllable_matches(w)).sum())
    }

    /// First-person pronouns, excluding the upper-case country abbreviation `US`
    pub fn personal_pronouns(&self) -> Result<usize> {
        let joined = self.tokenizer.words()?.join(" ");
        let pronouns = pronoun_pattern().find_iter(&joined).count();
        let country = country_pattern().find_iter(&joined).count();
        Ok(pronouns.saturating_sub(country))
    }

    /// Characters per word token, rounded to 2 places
    ///
    /// Divides by the raw token count, not the stop-word-filtered count.
    pub fn average_word_length(&self) -> Result<f64> {
        let words = self.tokenizer.words()?;
        if words.is_empty() {
            return Err(zero("AVG WORD LENGTH", "word count"));
        }
        let chars: usize = words.iter().map(|w| w.chars().count()).sum();
        Ok(round2(chars as f64 / words.len() as f64))
    }
}
