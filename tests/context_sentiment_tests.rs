use ticker_sentiment::{
    analyze_sentiment, AliasResolver, AliasTable, ContextSentimentAggregator, Error,
    PolarityAnalyzer, PositionType, RiskLevel, SentimentLabel, SentimentScore, TradingStrategy,
    DEFAULT_CONTEXT_SENTIMENT_CONFIG, DEFAULT_SENTIMENT_LABEL_THRESHOLDS,
};

/// Returns the same polarity for every window.
struct FixedPolarityAnalyzer(SentimentScore);

impl PolarityAnalyzer for FixedPolarityAnalyzer {
    fn polarity(&self, _text: &str) -> Result<SentimentScore, Error> {
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "Expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_nvda_moon_calls_scenario() {
        let results =
            analyze_sentiment("Comment 1:\nNVDA is going to the moon, calls to $150\n---\n")
                .unwrap();

        assert_eq!(results.len(), 1);

        let nvda = &results[0];
        assert_eq!(nvda.ticker_symbol, "NVDA");
        assert_eq!(nvda.sample_count, 1);
        assert_close(nvda.average_score, 0.75);
        assert_eq!(nvda.label, SentimentLabel::VeryBullish);

        let trading_detail = &nvda.contexts[0].trading_detail;
        assert_eq!(trading_detail.price_targets, vec!["150".to_string()]);
        assert_eq!(trading_detail.position_type, Some(PositionType::Long));
        assert_eq!(trading_detail.strategy, Some(TradingStrategy::Options));
    }

    #[test]
    fn test_tsla_two_comment_scenario() {
        let text = "Thread Title: Daily\n\nComment 1:\nTSLA puts, very bearish, high risk YOLO\n---\nComment 2:\nTesla bullish fundamentals, growth guidance raised\n---\n";

        let results = analyze_sentiment(text).unwrap();

        assert_eq!(results.len(), 1);

        let tsla = &results[0];
        assert_eq!(tsla.ticker_symbol, "TSLA");
        assert_eq!(tsla.sample_count, 2);
        assert_close(tsla.average_score, (-1.17 + 0.66) / 2.0);
        assert_eq!(tsla.label, SentimentLabel::VeryBearish);

        // The bearish comment has the stronger base polarity
        assert_eq!(
            tsla.contexts[0].trading_detail.risk_level,
            Some(RiskLevel::High)
        );
        assert_eq!(
            tsla.contexts[0].trading_detail.position_type,
            Some(PositionType::Short)
        );
    }

    #[test]
    fn test_retention_threshold_is_exclusive() {
        let alias_table = AliasTable::new(vec![("ACME", Vec::<&str>::new())]).unwrap();
        let alias_resolver = AliasResolver::new(&alias_table).unwrap();
        let text = "Comment 1:\nACME reported today.\n---\n";

        let at_threshold = FixedPolarityAnalyzer(0.1);
        let aggregator = ContextSentimentAggregator::new(
            &alias_resolver,
            &at_threshold,
            &DEFAULT_CONTEXT_SENTIMENT_CONFIG,
        );
        assert!(aggregator.analyze(text).is_empty());

        let above_threshold = FixedPolarityAnalyzer(0.11);
        let aggregator = ContextSentimentAggregator::new(
            &alias_resolver,
            &above_threshold,
            &DEFAULT_CONTEXT_SENTIMENT_CONFIG,
        );
        let results = aggregator.analyze(text);
        assert_eq!(results.len(), 1);
        assert_close(results[0].average_score, 0.11);
    }

    #[test]
    fn test_label_boundaries() {
        let alias_table = AliasTable::new(vec![("ACME", Vec::<&str>::new())]).unwrap();
        let alias_resolver = AliasResolver::new(&alias_table).unwrap();

        let analyzer = FixedPolarityAnalyzer(0.2);
        let aggregator = ContextSentimentAggregator::new(
            &alias_resolver,
            &analyzer,
            &DEFAULT_CONTEXT_SENTIMENT_CONFIG,
        );
        let results = aggregator.analyze("Comment 1:\nACME reported today.\n---\n");
        assert_eq!(results[0].label, SentimentLabel::Bullish);

        assert_eq!(
            SentimentLabel::from_score(-0.05, &DEFAULT_SENTIMENT_LABEL_THRESHOLDS),
            SentimentLabel::Neutral
        );
        assert_eq!(
            SentimentLabel::from_score(-0.0501, &DEFAULT_SENTIMENT_LABEL_THRESHOLDS),
            SentimentLabel::Bearish
        );
    }

    #[test]
    fn test_document_without_comment_markers_has_no_sentiment() {
        let results = analyze_sentiment("NVDA to the moon! Tesla bearish, dump it.").unwrap();

        assert!(results.is_empty());
    }

    #[test]
    fn test_analyze_sentiment_is_idempotent() {
        let text = "Comment 1:\nNvidia is great.\n---\nComment 2:\nTesla is terrible.\n---\n";

        assert_eq!(
            analyze_sentiment(text).unwrap(),
            analyze_sentiment(text).unwrap()
        );
    }
}
