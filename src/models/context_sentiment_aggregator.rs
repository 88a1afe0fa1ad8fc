use crate::models::{
    ContextSentimentConfig, ContextWindow, DocumentSegmenter, PolarityAnalyzer,
    PunctuationSentenceSplitter, SentenceSplitter, SentimentLabel, SentimentScorer, TradingDetail,
};
use crate::types::{SentimentScore, TickerSymbol};
use crate::AliasResolver;
use log::{debug, info};

/// One retained, scored context window.
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentSample {
    pub window: ContextWindow,
    pub base_polarity: SentimentScore,
    pub score: SentimentScore,
    pub trading_detail: TradingDetail,
}

/// A representative context of a ticker, as shown in reports.
#[derive(Debug, Clone, PartialEq)]
pub struct ContextSummary {
    pub text: String,
    pub base_polarity: SentimentScore,
    pub score: SentimentScore,
    pub trading_detail: TradingDetail,
}

impl From<&SentimentSample> for ContextSummary {
    fn from(sample: &SentimentSample) -> Self {
        ContextSummary {
            text: sample.window.text(),
            base_polarity: sample.base_polarity,
            score: sample.score,
            trading_detail: sample.trading_detail.clone(),
        }
    }
}

/// Aggregated context sentiment of one ticker.
#[derive(Debug, Clone, PartialEq)]
pub struct TickerSentiment {
    pub ticker_symbol: TickerSymbol,
    pub label: SentimentLabel,
    pub average_score: SentimentScore,
    /// Number of retained samples. Not to be confused with the raw mention count.
    pub sample_count: usize,
    /// Strongest contexts by absolute base polarity, ties in scan order.
    pub contexts: Vec<ContextSummary>,
}

/// Scores the local sentence context of every alias match in a thread and
/// aggregates the results per ticker symbol.
pub struct ContextSentimentAggregator<'a, P: PolarityAnalyzer, S: SentenceSplitter> {
    alias_resolver: &'a AliasResolver,
    config: &'a ContextSentimentConfig,
    scorer: SentimentScorer<'a, P>,
    segmenter: DocumentSegmenter<S>,
}

impl<'a, P: PolarityAnalyzer> ContextSentimentAggregator<'a, P, PunctuationSentenceSplitter> {
    pub fn new(
        alias_resolver: &'a AliasResolver,
        polarity_analyzer: &'a P,
        config: &'a ContextSentimentConfig,
    ) -> Self {
        Self::with_sentence_splitter(
            alias_resolver,
            polarity_analyzer,
            config,
            PunctuationSentenceSplitter,
        )
    }
}

impl<'a, P: PolarityAnalyzer, S: SentenceSplitter> ContextSentimentAggregator<'a, P, S> {
    pub fn with_sentence_splitter(
        alias_resolver: &'a AliasResolver,
        polarity_analyzer: &'a P,
        config: &'a ContextSentimentConfig,
        sentence_splitter: S,
    ) -> Self {
        ContextSentimentAggregator {
            alias_resolver,
            config,
            scorer: SentimentScorer::new(polarity_analyzer, config),
            segmenter: DocumentSegmenter::new(sentence_splitter),
        }
    }

    /// Collects retained samples per ticker symbol, in scan order.
    ///
    /// Scan order is comment, then ticker and alias in table order, then
    /// sentence. A sentence which matches several aliases of the same ticker
    /// yields one sample per alias.
    pub fn collect_samples(&self, text: &str) -> Vec<(TickerSymbol, Vec<SentimentSample>)> {
        let comments = self.segmenter.segment(text);
        let mut samples_by_ticker: Vec<(TickerSymbol, Vec<SentimentSample>)> = Vec::new();

        for (comment_index, comment) in comments.iter().enumerate() {
            let uppercased_sentences: Vec<String> = comment
                .sentences
                .iter()
                .map(|sentence| sentence.to_uppercase())
                .collect();

            for (ticker_symbol, alias, pattern) in self.alias_resolver.alias_patterns() {
                for (sentence_index, sentence) in uppercased_sentences.iter().enumerate() {
                    if !pattern.is_match(sentence) {
                        continue;
                    }

                    let window = ContextWindow::around(
                        ticker_symbol,
                        comment_index,
                        &comment.sentences,
                        sentence_index,
                        self.config.context_radius,
                    );
                    let window_text = window.text();
                    let scored = self.scorer.score(&window_text);

                    if scored.score.abs() <= self.config.min_abs_sample_score {
                        debug!(
                            "Dropping {} context matched by {} (score {:.3})",
                            ticker_symbol, alias, scored.score
                        );
                        continue;
                    }

                    let sample = SentimentSample {
                        trading_detail: TradingDetail::extract(&window_text),
                        window,
                        base_polarity: scored.base_polarity,
                        score: scored.score,
                    };

                    match samples_by_ticker
                        .iter_mut()
                        .find(|(existing, _)| existing == ticker_symbol)
                    {
                        Some((_, samples)) => samples.push(sample),
                        None => samples_by_ticker.push((ticker_symbol.clone(), vec![sample])),
                    }
                }
            }
        }

        samples_by_ticker
    }

    /// Aggregates a thread into per-ticker sentiment, strongest mean first.
    ///
    /// Tickers without any retained sample are omitted.
    pub fn analyze(&self, text: &str) -> Vec<TickerSentiment> {
        let mut ticker_sentiments: Vec<TickerSentiment> = self
            .collect_samples(text)
            .into_iter()
            .map(|(ticker_symbol, samples)| self.aggregate(ticker_symbol, &samples))
            .collect();

        ticker_sentiments.sort_by(|a, b| {
            b.average_score
                .abs()
                .partial_cmp(&a.average_score.abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        info!(
            "Aggregated context sentiment for {} ticker symbols",
            ticker_sentiments.len()
        );

        ticker_sentiments
    }

    fn aggregate(&self, ticker_symbol: TickerSymbol, samples: &[SentimentSample]) -> TickerSentiment {
        let average_score = if samples.is_empty() {
            0.0
        } else {
            samples.iter().map(|sample| sample.score).sum::<SentimentScore>() / samples.len() as f64
        };

        // Stable sort keeps scan order among equally strong contexts
        let mut ranked: Vec<&SentimentSample> = samples.iter().collect();
        ranked.sort_by(|a, b| {
            b.base_polarity
                .abs()
                .partial_cmp(&a.base_polarity.abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        TickerSentiment {
            ticker_symbol,
            label: SentimentLabel::from_score(average_score, &self.config.label_thresholds),
            average_score,
            sample_count: samples.len(),
            contexts: ranked
                .into_iter()
                .take(self.config.max_representative_contexts)
                .map(ContextSummary::from)
                .collect(),
        }
    }
}
