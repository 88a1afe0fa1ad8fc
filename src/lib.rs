mod config;
pub use config::{DEFAULT_CONTEXT_SENTIMENT_CONFIG, DEFAULT_SENTIMENT_LABEL_THRESHOLDS};
mod constants;
pub mod models;
pub use models::report_builder::{render_sentiment_details, synthesize_key_context};
pub use models::{
    AliasResolver, AliasTable, AnalysisStatus, Comment, ContextSentimentAggregator,
    ContextSentimentConfig, ContextSummary, ContextWindow, DocumentSegmenter, Error,
    KeyObservation, LexiconPolarityAnalyzer, MentionCounter, PolarityAnalyzer, PositionType,
    PunctuationSentenceSplitter, ReportBuilder, RiskLevel, SentenceSplitter, SentimentLabel,
    SentimentLabelThresholds, SentimentReport, TickerReport, TickerSentiment, TradingDetail,
    TradingStrategy,
};
#[cfg(feature = "vader")]
pub use models::VaderPolarityAnalyzer;
pub mod types;
mod utils;
pub use types::{Alias, SentimentScore, TickerSymbol, TickerSymbolFrequencyMap};
pub use utils::sort_results;

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Counts raw mentions of every ticker of the bundled alias table.
pub fn count_mentions(text: &str) -> Result<TickerSymbolFrequencyMap, Error> {
    let alias_table = AliasTable::from_embedded_csv()?;

    count_mentions_with_alias_table(text, &alias_table)
}

pub fn count_mentions_with_alias_table(
    text: &str,
    alias_table: &AliasTable,
) -> Result<TickerSymbolFrequencyMap, Error> {
    let alias_resolver = AliasResolver::new(alias_table)?;

    Ok(MentionCounter::new(&alias_resolver).count(text))
}

/// Scores the context sentiment of every ticker of the bundled alias table.
pub fn analyze_sentiment(text: &str) -> Result<Vec<TickerSentiment>, Error> {
    let alias_table = AliasTable::from_embedded_csv()?;

    analyze_sentiment_with_custom_config(text, &alias_table, &DEFAULT_CONTEXT_SENTIMENT_CONFIG)
}

pub fn analyze_sentiment_with_custom_config(
    text: &str,
    alias_table: &AliasTable,
    config: &ContextSentimentConfig,
) -> Result<Vec<TickerSentiment>, Error> {
    analyze_sentiment_with_polarity_analyzer(
        text,
        alias_table,
        config,
        &LexiconPolarityAnalyzer::new(),
    )
}

/// Like `analyze_sentiment_with_custom_config`, scoring windows with `polarity_analyzer`.
pub fn analyze_sentiment_with_polarity_analyzer<P: PolarityAnalyzer>(
    text: &str,
    alias_table: &AliasTable,
    config: &ContextSentimentConfig,
    polarity_analyzer: &P,
) -> Result<Vec<TickerSentiment>, Error> {
    let alias_resolver = AliasResolver::new(alias_table)?;

    let aggregator = ContextSentimentAggregator::new(&alias_resolver, polarity_analyzer, config);

    Ok(aggregator.analyze(text))
}

/// Counts mentions, scores context sentiment and merges both into a ranked report.
pub fn generate_report(text: &str) -> Result<SentimentReport, Error> {
    let alias_table = AliasTable::from_embedded_csv()?;

    generate_report_with_custom_config(text, &alias_table, &DEFAULT_CONTEXT_SENTIMENT_CONFIG)
}

pub fn generate_report_with_custom_config(
    text: &str,
    alias_table: &AliasTable,
    config: &ContextSentimentConfig,
) -> Result<SentimentReport, Error> {
    generate_report_with_polarity_analyzer(
        text,
        alias_table,
        config,
        &LexiconPolarityAnalyzer::new(),
    )
}

pub fn generate_report_with_polarity_analyzer<P: PolarityAnalyzer>(
    text: &str,
    alias_table: &AliasTable,
    config: &ContextSentimentConfig,
    polarity_analyzer: &P,
) -> Result<SentimentReport, Error> {
    let alias_resolver = AliasResolver::new(alias_table)?;

    let mention_counts = MentionCounter::new(&alias_resolver).count(text);
    let ticker_sentiments =
        ContextSentimentAggregator::new(&alias_resolver, polarity_analyzer, config).analyze(text);

    Ok(ReportBuilder::new().build(&mention_counts, &ticker_sentiments))
}
