pub mod alias_resolver;
pub use alias_resolver::AliasResolver;

pub mod alias_table;
pub use alias_table::AliasTable;

pub mod config;
pub use config::{ContextSentimentConfig, SentimentLabelThresholds};

pub mod context_sentiment_aggregator;
pub use context_sentiment_aggregator::{
    ContextSentimentAggregator, ContextSummary, SentimentSample, TickerSentiment,
};

pub mod context_window;
pub use context_window::ContextWindow;

pub mod document_segmenter;
pub use document_segmenter::{
    split_comment_texts, Comment, DocumentSegmenter, PunctuationSentenceSplitter,
    SentenceSplitter,
};

pub mod error;
pub use error::Error;

pub mod mention_counter;
pub use mention_counter::MentionCounter;

pub mod polarity_analyzer;
#[cfg(feature = "vader")]
pub use polarity_analyzer::VaderPolarityAnalyzer;
pub use polarity_analyzer::{LexiconPolarityAnalyzer, PolarityAnalyzer};

pub mod report_builder;
pub use report_builder::{AnalysisStatus, KeyObservation, ReportBuilder, SentimentReport, TickerReport};

pub mod sentiment_label;
pub use sentiment_label::SentimentLabel;

pub mod sentiment_scorer;
pub use sentiment_scorer::{ScoredContext, SentimentScorer};

pub mod trading_detail;
pub use trading_detail::{PositionType, RiskLevel, TradingDetail, TradingStrategy};
