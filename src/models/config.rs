use crate::types::SentimentScore;

/// Mean-score cut-offs between sentiment labels. All comparisons are strict.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentLabelThresholds {
    pub very_bullish: SentimentScore,
    pub bullish: SentimentScore,
    pub very_bearish: SentimentScore,
    pub bearish: SentimentScore,
}

/// Tuning knobs of the `ContextSentimentAggregator`.
///
/// The default values live in `DEFAULT_CONTEXT_SENTIMENT_CONFIG`.
#[derive(Debug, Clone, Copy)]
pub struct ContextSentimentConfig {
    /// Number of neighboring sentences taken on each side of a matched sentence.
    pub context_radius: usize,
    pub sentiment_keywords: &'static [&'static str],
    pub sentiment_keyword_multiplier: f64,
    pub quality_indicator_categories: &'static [&'static [&'static str]],
    pub quality_indicator_reward: f64,
    /// Windows with strictly more words than this earn `long_context_reward`.
    pub long_context_word_threshold: usize,
    pub long_context_reward: f64,
    pub max_reputation_multiplier: f64,
    /// Samples are retained only when their absolute final score is strictly greater.
    pub min_abs_sample_score: SentimentScore,
    pub max_representative_contexts: usize,
    pub label_thresholds: SentimentLabelThresholds,
}
