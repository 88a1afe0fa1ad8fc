use crate::models::SentimentLabelThresholds;
use crate::types::SentimentScore;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentimentLabel {
    VeryBullish,
    Bullish,
    Neutral,
    Bearish,
    VeryBearish,
}

impl SentimentLabel {
    /// Labels a mean score. Every threshold is exclusive, so a mean of exactly
    /// `very_bullish` is only `Bullish`.
    pub fn from_score(score: SentimentScore, thresholds: &SentimentLabelThresholds) -> Self {
        if score > thresholds.very_bullish {
            SentimentLabel::VeryBullish
        } else if score > thresholds.bullish {
            SentimentLabel::Bullish
        } else if score < thresholds.very_bearish {
            SentimentLabel::VeryBearish
        } else if score < thresholds.bearish {
            SentimentLabel::Bearish
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn is_bullish(&self) -> bool {
        matches!(self, SentimentLabel::VeryBullish | SentimentLabel::Bullish)
    }

    pub fn is_bearish(&self) -> bool {
        matches!(self, SentimentLabel::VeryBearish | SentimentLabel::Bearish)
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SentimentLabel::VeryBullish => "Very Bullish",
            SentimentLabel::Bullish => "Bullish",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Bearish => "Bearish",
            SentimentLabel::VeryBearish => "Very Bearish",
        };

        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_SENTIMENT_LABEL_THRESHOLDS;

    fn label(score: SentimentScore) -> SentimentLabel {
        SentimentLabel::from_score(score, &DEFAULT_SENTIMENT_LABEL_THRESHOLDS)
    }

    #[test]
    fn test_label_thresholds_are_exclusive() {
        assert_eq!(label(0.2), SentimentLabel::Bullish);
        assert_eq!(label(0.2000001), SentimentLabel::VeryBullish);
        assert_eq!(label(0.05), SentimentLabel::Neutral);
        assert_eq!(label(-0.05), SentimentLabel::Neutral);
        assert_eq!(label(-0.0500001), SentimentLabel::Bearish);
        assert_eq!(label(-0.2), SentimentLabel::Bearish);
        assert_eq!(label(-0.2000001), SentimentLabel::VeryBearish);
        assert_eq!(label(0.0), SentimentLabel::Neutral);
    }

    #[test]
    fn test_display() {
        assert_eq!(SentimentLabel::VeryBearish.to_string(), "Very Bearish");
        assert_eq!(SentimentLabel::Bullish.to_string(), "Bullish");
    }
}
