#![cfg(feature = "vader")]

use ticker_sentiment::{
    generate_report_with_polarity_analyzer, AliasTable, AnalysisStatus, VaderPolarityAnalyzer,
    DEFAULT_CONTEXT_SENTIMENT_CONFIG,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_report_with_vader() {
        let alias_table = AliasTable::from_embedded_csv().unwrap();
        let analyzer = VaderPolarityAnalyzer::new();

        let report = generate_report_with_polarity_analyzer(
            "Comment 1:\nNVDA is going to the moon, calls to $150\n---\nComment 2:\nTesla is great.\n---\n",
            &alias_table,
            &DEFAULT_CONTEXT_SENTIMENT_CONFIG,
            &analyzer,
        )
        .unwrap();

        let nvda = report.row("NVDA").unwrap();
        assert_eq!(nvda.mention_count, 1);
        assert_eq!(nvda.status, AnalysisStatus::NoRetainedSamples);

        let tsla = report.row("TSLA").unwrap();
        assert_eq!(tsla.status, AnalysisStatus::Scored);
        assert!(tsla.label.is_bullish());
    }
}
