use crate::models::{ContextSentimentConfig, PolarityAnalyzer};
use crate::types::SentimentScore;
use crate::utils::contains_any;
use log::debug;

/// The score of one context window, with the factors which produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredContext {
    pub base_polarity: SentimentScore,
    pub keyword_multiplier: f64,
    pub reputation_multiplier: f64,
    pub score: SentimentScore,
}

/// Scores context windows as `base polarity × keyword multiplier × reputation multiplier`.
pub struct SentimentScorer<'a, P: PolarityAnalyzer> {
    polarity_analyzer: &'a P,
    config: &'a ContextSentimentConfig,
}

impl<'a, P: PolarityAnalyzer> SentimentScorer<'a, P> {
    pub fn new(polarity_analyzer: &'a P, config: &'a ContextSentimentConfig) -> Self {
        SentimentScorer {
            polarity_analyzer,
            config,
        }
    }

    /// Polarity of `text`, with analyzer failures treated as no signal.
    pub fn base_polarity(&self, text: &str) -> SentimentScore {
        match self.polarity_analyzer.polarity(text) {
            Ok(polarity) => polarity,
            Err(err) => {
                debug!("Treating unscorable context as neutral: {}", err);
                0.0
            }
        }
    }

    /// Boosts windows which use explicit sentiment keywords.
    pub fn keyword_multiplier(&self, lowercased_text: &str) -> f64 {
        if contains_any(lowercased_text, self.config.sentiment_keywords) {
            self.config.sentiment_keyword_multiplier
        } else {
            1.0
        }
    }

    /// Rewards "quality" signals: one reward per indicator category present,
    /// one more for long windows, capped at `max_reputation_multiplier`.
    pub fn reputation_multiplier(&self, text: &str) -> f64 {
        let lowercased_text = text.to_lowercase();

        let mut multiplier = 1.0;

        for indicators in self.config.quality_indicator_categories {
            if contains_any(&lowercased_text, indicators) {
                multiplier += self.config.quality_indicator_reward;
            }
        }

        if text.split_whitespace().count() > self.config.long_context_word_threshold {
            multiplier += self.config.long_context_reward;
        }

        multiplier.min(self.config.max_reputation_multiplier)
    }

    pub fn score(&self, text: &str) -> ScoredContext {
        let base_polarity = self.base_polarity(text);
        let keyword_multiplier = self.keyword_multiplier(&text.to_lowercase());
        let reputation_multiplier = self.reputation_multiplier(text);

        ScoredContext {
            base_polarity,
            keyword_multiplier,
            reputation_multiplier,
            score: base_polarity * keyword_multiplier * reputation_multiplier,
        }
    }
}
