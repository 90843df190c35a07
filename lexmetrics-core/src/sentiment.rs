//! Lexicon-based sentiment scoring

use crate::error::{Result, ScoringError};
use crate::lexicon::SentimentLexicon;
use crate::metrics::round2;
use crate::tokenizer::Tokenizer;

/// Guards the polarity denominator when a text has no sentiment words
pub const POLARITY_EPSILON: f64 = 0.000001;

/// Sentiment scores over the text bound to a tokenizer
///
/// Every call re-reads the tokenizer, so results always reflect the most
/// recently bound text.
#[derive(Debug, Clone, Copy)]
pub struct SentimentScorer<'a> {
    tokenizer: &'a Tokenizer,
    lexicon: &'a SentimentLexicon,
}

impl<'a> SentimentScorer<'a> {
    /// Create a scorer reading from `tokenizer`
    pub fn new(tokenizer: &'a Tokenizer, lexicon: &'a SentimentLexicon) -> Self {
        Self { tokenizer, lexicon }
    }

    /// Occurrences of positive dictionary words
    pub fn positive_score(&self) -> Result<usize> {
        let words = self.tokenizer.words()?;
        let score = words
            .iter()
            .filter(|w| self.lexicon.is_positive(w))
            .count();
        log::debug!("positive score {score}");
        Ok(score)
    }

    /// Occurrences of negative dictionary words, as a positive count
    pub fn negative_score(&self) -> Result<usize> {
        let words = self.tokenizer.words()?;
        let score = words
            .iter()
            .filter(|w| self.lexicon.is_negative(w))
            .count();
        log::debug!("negative score {score}");
        Ok(score)
    }

    /// `(positive - negative) / (positive + negative + ε)`, rounded to 2 places
    ///
    /// Lies in [-1, 1] and is 0 when the text has no sentiment words.
    pub fn polarity_score(&self) -> Result<f64> {
        let positive = self.positive_score()? as f64;
        let negative = self.negative_score()? as f64;
        Ok(round2(
            (positive - negative) / (positive + negative + POLARITY_EPSILON),
        ))
    }

    /// `(positive + negative) / total words`, rounded to 2 places
    pub fn subjectivity_score(&self) -> Result<f64> {
        let total = self.tokenizer.words()?.len();
        if total == 0 {
            return Err(ScoringError::ZeroDenominator {
                metric: "SUBJECTIVITY SCORE",
                denominator: "word count",
            }
            .into());
        }
        let charged = self.positive_score()? + self.negative_score()?;
        Ok(round2(charged as f64 / total as f64))
    }
}
