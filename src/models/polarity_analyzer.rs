use crate::constants::{
    POLARITY_INTENSIFIERS, POLARITY_LEXICON, POLARITY_NEGATIONS, POLARITY_NEGATION_FACTOR,
};
use crate::types::SentimentScore;
use crate::Error;
use std::collections::{HashMap, HashSet};

/// Scores the polarity of a piece of text in `[-1.0, 1.0]`.
pub trait PolarityAnalyzer {
    /// # Errors
    /// Implementations return `Error::PolarityError` for input they cannot
    /// score, such as empty text.
    fn polarity(&self, text: &str) -> Result<SentimentScore, Error>;
}

/// Lexicon-based polarity: the mean of the polarities of every lexicon word in
/// the text, where a preceding intensifier scales a word and a preceding
/// negation flips and dampens it.
pub struct LexiconPolarityAnalyzer {
    lexicon: HashMap<&'static str, f64>,
    intensifiers: HashMap<&'static str, f64>,
    negations: HashSet<&'static str>,
}

impl Default for LexiconPolarityAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconPolarityAnalyzer {
    pub fn new() -> Self {
        LexiconPolarityAnalyzer {
            lexicon: POLARITY_LEXICON.iter().copied().collect(),
            intensifiers: POLARITY_INTENSIFIERS.iter().copied().collect(),
            negations: POLARITY_NEGATIONS.iter().copied().collect(),
        }
    }

    /// Lowercased words, keeping inner apostrophes so that contractions
    /// such as `don't` survive.
    fn words(text: &str) -> Vec<String> {
        text.split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '\u{2019}'))
            .map(|word| {
                word.trim_matches(|c: char| c == '\'' || c == '\u{2019}')
                    .replace('\u{2019}', "'")
                    .to_lowercase()
            })
            .filter(|word| !word.is_empty())
            .collect()
    }
}

impl PolarityAnalyzer for LexiconPolarityAnalyzer {
    fn polarity(&self, text: &str) -> Result<SentimentScore, Error> {
        let words = Self::words(text);

        if words.is_empty() {
            return Err(Error::PolarityError(
                "Cannot score text without words".to_string(),
            ));
        }

        let mut assessments = Vec::new();

        for (index, word) in words.iter().enumerate() {
            let Some(&word_polarity) = self.lexicon.get(word.as_str()) else {
                continue;
            };

            let mut polarity = word_polarity;
            let mut modifier_index = index;

            if let Some(previous) = index.checked_sub(1).map(|i| words[i].as_str()) {
                if let Some(&intensity) = self.intensifiers.get(previous) {
                    polarity *= intensity;
                    modifier_index = index - 1;
                }
            }

            if let Some(previous) = modifier_index.checked_sub(1).map(|i| words[i].as_str()) {
                if self.negations.contains(previous) {
                    polarity *= POLARITY_NEGATION_FACTOR;
                }
            }

            assessments.push(polarity.clamp(-1.0, 1.0));
        }

        if assessments.is_empty() {
            return Ok(0.0);
        }

        let mean = assessments.iter().sum::<f64>() / assessments.len() as f64;

        Ok(mean.clamp(-1.0, 1.0))
    }
}

/// VADER compound score as polarity.
#[cfg(feature = "vader")]
pub struct VaderPolarityAnalyzer {
    analyzer: vader_sentiment::SentimentIntensityAnalyzer<'static>,
}

#[cfg(feature = "vader")]
impl Default for VaderPolarityAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "vader")]
impl VaderPolarityAnalyzer {
    pub fn new() -> Self {
        VaderPolarityAnalyzer {
            analyzer: vader_sentiment::SentimentIntensityAnalyzer::new(),
        }
    }
}

#[cfg(feature = "vader")]
impl PolarityAnalyzer for VaderPolarityAnalyzer {
    fn polarity(&self, text: &str) -> Result<SentimentScore, Error> {
        if text.trim().is_empty() {
            return Err(Error::PolarityError(
                "Cannot score text without words".to_string(),
            ));
        }

        let scores = self.analyzer.polarity_scores(text);

        scores
            .get("compound")
            .copied()
            .ok_or_else(|| Error::PolarityError("Missing compound score".to_string()))
    }
}
