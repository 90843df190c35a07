//! Per-document metrics record and rounding

use crate::error::Result;
use crate::readability::ReadabilityScorer;
use crate::sentiment::SentimentScorer;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Round to two decimal places, ties to even, on the exact binary value
///
/// The decision is made on the exact value of `value` rather than on
/// `value * 100.0`, whose own rounding error can move a result across the
/// midpoint (`0.025` is slightly above 0.025 and rounds to `0.03`).
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() || value == 0.0 {
        return value;
    }

    let bits = value.abs().to_bits();
    let biased_exponent = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if biased_exponent == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased_exponent - 1075)
    };

    // value = mantissa * 2^exponent; integral values need no rounding
    if exponent >= 0 {
        return value;
    }

    let shift = exponent.unsigned_abs();
    let scaled = u128::from(mantissa) * 100;
    let (quotient, versus_half) = if shift >= 127 {
        (0, Ordering::Less)
    } else {
        let remainder = scaled & ((1u128 << shift) - 1);
        (scaled >> shift, remainder.cmp(&(1u128 << (shift - 1))))
    };

    let hundredths = match versus_half {
        Ordering::Less => quotient,
        Ordering::Greater => quotient + 1,
        Ordering::Equal if quotient % 2 == 0 => quotient,
        Ordering::Equal => quotient + 1,
    };

    let rounded = hundredths as f64 / 100.0;
    if value.is_sign_negative() {
        -rounded
    } else {
        rounded
    }
}

/// Names of the metrics in a [`MetricsRecord`], in output order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricName {
    /// Count of positive dictionary words
    PositiveScore,
    /// Count of negative dictionary words
    NegativeScore,
    /// Normalised positive-minus-negative strength
    PolarityScore,
    /// Share of words carrying sentiment
    SubjectivityScore,
    /// Words per sentence
    AvgSentenceLength,
    /// Complex words over all words
    PercentageOfComplexWords,
    /// Gunning-Fog index
    FogIndex,
    /// Words per sentence, reported separately
    AvgNumberOfWordsPerSentence,
    /// Words with more than two vowel runs
    ComplexWordCount,
    /// Words that are not general stop words
    WordCount,
    /// Total syllable pattern matches
    SyllablePerWord,
    /// First-person pronoun count
    PersonalPronouns,
    /// Characters per word
    AvgWordLength,
}

impl MetricName {
    /// Every metric, in output order
    pub const ALL: [MetricName; 13] = [
        MetricName::PositiveScore,
        MetricName::NegativeScore,
        MetricName::PolarityScore,
        MetricName::SubjectivityScore,
        MetricName::AvgSentenceLength,
        MetricName::PercentageOfComplexWords,
        MetricName::FogIndex,
        MetricName::AvgNumberOfWordsPerSentence,
        MetricName::ComplexWordCount,
        MetricName::WordCount,
        MetricName::SyllablePerWord,
        MetricName::PersonalPronouns,
        MetricName::AvgWordLength,
    ];

    /// Output field name
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricName::PositiveScore => "POSITIVE SCORE",
            MetricName::NegativeScore => "NEGATIVE SCORE",
            MetricName::PolarityScore => "POLARITY SCORE",
            MetricName::SubjectivityScore => "SUBJECTIVITY SCORE",
            MetricName::AvgSentenceLength => "AVG SENTENCE LENGTH",
            MetricName::PercentageOfComplexWords => "PERCENTAGE OF COMPLEX WORDS",
            MetricName::FogIndex => "FOG INDEX",
            MetricName::AvgNumberOfWordsPerSentence => "AVG NUMBER OF WORDS PER SENTENCE",
            MetricName::ComplexWordCount => "COMPLEX WORD COUNT",
            MetricName::WordCount => "WORD COUNT",
            MetricName::SyllablePerWord => "SYLLABLE PER WORD",
            MetricName::PersonalPronouns => "PERSONAL PRONOUNS",
            MetricName::AvgWordLength => "AVG WORD LENGTH",
        }
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single metric value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    /// Integral count
    Count(usize),
    /// Ratio or composite score
    Ratio(f64),
}

impl MetricValue {
    /// Value as a float
    pub fn as_f64(&self) -> f64 {
        match self {
            MetricValue::Count(n) => *n as f64,
            MetricValue::Ratio(x) => *x,
        }
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Count(n) => write!(f, "{n}"),
            MetricValue::Ratio(x) => write!(f, "{x}"),
        }
    }
}

/// All metrics for one document
///
/// Serialises with the exact upper-case field names consumed downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    #[serde(rename = "POSITIVE SCORE")]
    pub positive_score: usize,
    #[serde(rename = "NEGATIVE SCORE")]
    pub negative_score: usize,
    #[serde(rename = "POLARITY SCORE")]
    pub polarity_score: f64,
    #[serde(rename = "SUBJECTIVITY SCORE")]
    pub subjectivity_score: f64,
    #[serde(rename = "AVG SENTENCE LENGTH")]
    pub avg_sentence_length: f64,
    #[serde(rename = "PERCENTAGE OF COMPLEX WORDS")]
    pub percentage_of_complex_words: f64,
    #[serde(rename = "FOG INDEX")]
    pub fog_index: f64,
    #[serde(rename = "AVG NUMBER OF WORDS PER SENTENCE")]
    pub avg_words_per_sentence: f64,
    #[serde(rename = "COMPLEX WORD COUNT")]
    pub complex_word_count: usize,
    #[serde(rename = "WORD COUNT")]
    pub word_count: usize,
    #[serde(rename = "SYLLABLE PER WORD")]
    pub syllable_per_word: usize,
    #[serde(rename = "PERSONAL PRONOUNS")]
    pub personal_pronouns: usize,
    #[serde(rename = "AVG WORD LENGTH")]
    pub avg_word_length: f64,
}

impl MetricsRecord {
    /// Run every scorer operation and collect the results
    ///
    /// Fails on the first metric that cannot be computed; a partial record is
    /// never returned.
    pub fn from_scorers(
        sentiment: &SentimentScorer<'_>,
        readability: &ReadabilityScorer<'_>,
    ) -> Result<Self> {
        Ok(Self {
            positive_score: sentiment.positive_score()?,
            negative_score: sentiment.negative_score()?,
            polarity_score: sentiment.polarity_score()?,
            subjectivity_score: sentiment.subjectivity_score()?,
            avg_sentence_length: readability.average_sentence_length()?,
            percentage_of_complex_words: readability.percent_complex_words()?,
            fog_index: readability.fog_index()?,
            avg_words_per_sentence: readability.average_words_per_sentence()?,
            complex_word_count: readability.complex_word_count()?,
            word_count: readability.word_count()?,
            syllable_per_word: readability.syllable_per_word()?,
            personal_pronouns: readability.personal_pronouns()?,
            avg_word_length: readability.average_word_length()?,
        })
    }

    /// Value of one metric
    pub fn get(&self, name: MetricName) -> MetricValue {
        use MetricValue::{Count, Ratio};
        match name {
            MetricName::PositiveScore => Count(self.positive_score),
            MetricName::NegativeScore => Count(self.negative_score),
            MetricName::PolarityScore => Ratio(self.polarity_score),
            MetricName::SubjectivityScore => Ratio(self.subjectivity_score),
            MetricName::AvgSentenceLength => Ratio(self.avg_sentence_length),
            MetricName::PercentageOfComplexWords => Ratio(self.percentage_of_complex_words),
            MetricName::FogIndex => Ratio(self.fog_index),
            MetricName::AvgNumberOfWordsPerSentence => Ratio(self.avg_words_per_sentence),
            MetricName::ComplexWordCount => Count(self.complex_word_count),
            MetricName::WordCount => Count(self.word_count),
            MetricName::SyllablePerWord => Count(self.syllable_per_word),
            MetricName::PersonalPronouns => Count(self.personal_pronouns),
            MetricName::AvgWordLength => Ratio(self.avg_word_length),
        }
    }

    /// All metrics in output order
    pub fn values(&self) -> impl Iterator<Item = (MetricName, MetricValue)> + '_ {
        MetricName::ALL.into_iter().map(|name| (name, self.get(name)))
    }
}
