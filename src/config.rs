use crate::constants::{QUALITY_INDICATOR_CATEGORIES, SENTIMENT_KEYWORDS};
use crate::models::{ContextSentimentConfig, SentimentLabelThresholds};

pub const DEFAULT_SENTIMENT_LABEL_THRESHOLDS: SentimentLabelThresholds =
    SentimentLabelThresholds {
        very_bullish: 0.2,
        bullish: 0.05,
        very_bearish: -0.2,
        bearish: -0.05,
    };

pub const DEFAULT_CONTEXT_SENTIMENT_CONFIG: ContextSentimentConfig = ContextSentimentConfig {
    context_radius: 1,
    sentiment_keywords: SENTIMENT_KEYWORDS,
    sentiment_keyword_multiplier: 1.5,
    quality_indicator_categories: QUALITY_INDICATOR_CATEGORIES,
    quality_indicator_reward: 0.1,
    long_context_word_threshold: 100,
    long_context_reward: 0.1,
    max_reputation_multiplier: 1.5,
    min_abs_sample_score: 0.1,
    max_representative_contexts: 3,
    label_thresholds: DEFAULT_SENTIMENT_LABEL_THRESHOLDS,
};
