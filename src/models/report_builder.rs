use crate::constants::{KEY_CONTEXT_PLACEHOLDER, KEY_CONTEXT_SEPARATOR, KEY_OBSERVATION_LIMIT};
use crate::models::{ContextSummary, SentimentLabel, TickerSentiment};
use crate::types::{SentimentScore, TickerSymbol, TickerSymbolFrequency, TickerSymbolFrequencyMap};
use crate::utils::{most_common, sort_results};
use crate::Error;
use log::info;
use std::cmp::Ordering;
use std::fmt;
use std::io;

const TABLE_HEADERS: [&str; 5] = ["Company/Ticker", "Mentions", "Sentiment", "Score", "Key Context"];

const CSV_HEADERS: [&str; 7] = [
    "Ticker",
    "Mentions",
    "Sentiment Samples",
    "Sentiment",
    "Score",
    "Key Context",
    "Status",
];

const CONTEXT_PREVIEW_CHARS: usize = 100;

/// Why a ticker carries the sentiment it does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisStatus {
    /// At least one context sample was retained.
    Scored,
    /// Mentioned, but no context was strong enough to keep.
    NoRetainedSamples,
    /// Never mentioned in the document.
    NotMentioned,
}

impl fmt::Display for AnalysisStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisStatus::Scored => write!(f, "Scored"),
            AnalysisStatus::NoRetainedSamples => write!(f, "No retained samples"),
            AnalysisStatus::NotMentioned => write!(f, "Not mentioned"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TickerReport {
    pub ticker_symbol: TickerSymbol,
    /// Raw alias occurrences, from the mention counter.
    pub mention_count: TickerSymbolFrequency,
    /// Retained context samples, from the sentiment aggregator.
    pub sentiment_sample_count: usize,
    pub label: SentimentLabel,
    pub average_score: SentimentScore,
    pub contexts: Vec<ContextSummary>,
    pub key_context: String,
    pub status: AnalysisStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub enum KeyObservation {
    MostDiscussed(Vec<TickerSymbol>),
    MostBullish(Vec<TickerSymbol>),
    MostBearish(Vec<TickerSymbol>),
}

impl fmt::Display for KeyObservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyObservation::MostDiscussed(ticker_symbols) => {
                write!(f, "Most discussed: {}", ticker_symbols.join(", "))
            }
            KeyObservation::MostBullish(ticker_symbols) => {
                write!(f, "Most bullish: {}", ticker_symbols.join(", "))
            }
            KeyObservation::MostBearish(ticker_symbols) => {
                write!(f, "Most bearish: {}", ticker_symbols.join(", "))
            }
        }
    }
}

/// Per-ticker rows, ordered by mention count, plus the derived observations.
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentReport {
    pub rows: Vec<TickerReport>,
    pub observations: Vec<KeyObservation>,
}

impl SentimentReport {
    pub fn row(&self, ticker_symbol: &str) -> Option<&TickerReport> {
        self.rows.iter().find(|row| row.ticker_symbol == ticker_symbol)
    }

    /// Writes one CSV record per row, including both mention counts and the status.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), Error> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(CSV_HEADERS)?;

        for row in &self.rows {
            csv_writer.write_record([
                row.ticker_symbol.clone(),
                row.mention_count.to_string(),
                row.sentiment_sample_count.to_string(),
                row.label.to_string(),
                format!("{:.2}", row.average_score),
                row.key_context.clone(),
                row.status.to_string(),
            ])?;
        }

        csv_writer.flush()?;

        Ok(())
    }
}

impl fmt::Display for SentimentReport {
    /// Observation bullets followed by a pipe table.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Key Observations:")?;
        for observation in &self.observations {
            writeln!(f, "- {}", observation)?;
        }
        writeln!(f)?;

        let cells: Vec<[String; 5]> = self
            .rows
            .iter()
            .map(|row| {
                [
                    row.ticker_symbol.clone(),
                    row.mention_count.to_string(),
                    row.label.to_string(),
                    format!("{:.2}", row.average_score),
                    row.key_context.replace('|', "\\|"),
                ]
            })
            .collect();

        let mut widths = TABLE_HEADERS.map(|header| header.chars().count());
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        // Numeric columns are right-aligned
        let right_aligned = [false, true, false, true, false];

        let header_line: Vec<String> = TABLE_HEADERS
            .iter()
            .zip(widths.iter())
            .zip(right_aligned.iter())
            .map(|((header, width), right)| pad(header, *width, *right))
            .collect();
        writeln!(f, "| {} |", header_line.join(" | "))?;

        let separator_line: Vec<String> = widths
            .iter()
            .zip(right_aligned.iter())
            .map(|(width, right)| {
                if *right {
                    format!("{}:", "-".repeat(*width + 1))
                } else {
                    format!(":{}", "-".repeat(*width + 1))
                }
            })
            .collect();
        writeln!(f, "|{}|", separator_line.join("|"))?;

        for row in &cells {
            let line: Vec<String> = row
                .iter()
                .zip(widths.iter())
                .zip(right_aligned.iter())
                .map(|((cell, width), right)| pad(cell, *width, *right))
                .collect();
            writeln!(f, "| {} |", line.join(" | "))?;
        }

        Ok(())
    }
}

fn pad(cell: &str, width: usize, right_aligned: bool) -> String {
    if right_aligned {
        format!("{:>width$}", cell, width = width)
    } else {
        format!("{:<width$}", cell, width = width)
    }
}

/// Merges raw mention counts with context sentiment into a `SentimentReport`.
pub struct ReportBuilder {
    observation_limit: usize,
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportBuilder {
    pub fn new() -> Self {
        ReportBuilder {
            observation_limit: KEY_OBSERVATION_LIMIT,
        }
    }

    pub fn with_observation_limit(observation_limit: usize) -> Self {
        ReportBuilder { observation_limit }
    }

    pub fn build(
        &self,
        mention_counts: &TickerSymbolFrequencyMap,
        ticker_sentiments: &[TickerSentiment],
    ) -> SentimentReport {
        // Union of both inputs; sentiment-only tickers count as unmentioned
        let mut all_mention_counts = mention_counts.clone();
        for ticker_sentiment in ticker_sentiments {
            all_mention_counts
                .entry(ticker_sentiment.ticker_symbol.clone())
                .or_insert(0);
        }

        let rows: Vec<TickerReport> = sort_results(&all_mention_counts)
            .into_iter()
            .map(|(ticker_symbol, mention_count)| {
                let ticker_sentiment = ticker_sentiments
                    .iter()
                    .find(|ticker_sentiment| ticker_sentiment.ticker_symbol == ticker_symbol);

                Self::ticker_report(ticker_symbol, mention_count, ticker_sentiment)
            })
            .collect();

        let observations = self.key_observations(&rows);

        info!(
            "Built report with {} rows and {} observations",
            rows.len(),
            observations.len()
        );

        SentimentReport { rows, observations }
    }

    fn ticker_report(
        ticker_symbol: TickerSymbol,
        mention_count: TickerSymbolFrequency,
        ticker_sentiment: Option<&TickerSentiment>,
    ) -> TickerReport {
        match ticker_sentiment {
            Some(ticker_sentiment) => TickerReport {
                ticker_symbol,
                mention_count,
                sentiment_sample_count: ticker_sentiment.sample_count,
                label: ticker_sentiment.label,
                average_score: ticker_sentiment.average_score,
                key_context: synthesize_key_context(&ticker_sentiment.contexts),
                contexts: ticker_sentiment.contexts.clone(),
                status: AnalysisStatus::Scored,
            },
            None => TickerReport {
                ticker_symbol,
                mention_count,
                sentiment_sample_count: 0,
                label: SentimentLabel::Neutral,
                average_score: 0.0,
                contexts: Vec::new(),
                key_context: KEY_CONTEXT_PLACEHOLDER.to_string(),
                status: if mention_count > 0 {
                    AnalysisStatus::NoRetainedSamples
                } else {
                    AnalysisStatus::NotMentioned
                },
            },
        }
    }

    /// Expects `rows` already sorted by mention count.
    ///
    /// Most discussed only lists tickers with at least one mention, so a quiet
    /// thread yields fewer than `observation_limit` entries (or none) instead of
    /// padding the list with unmentioned tickers.
    fn key_observations(&self, rows: &[TickerReport]) -> Vec<KeyObservation> {
        let mut observations = Vec::new();

        let most_discussed: Vec<TickerSymbol> = rows
            .iter()
            .filter(|row| row.mention_count > 0)
            .take(self.observation_limit)
            .map(|row| row.ticker_symbol.clone())
            .collect();
        if !most_discussed.is_empty() {
            observations.push(KeyObservation::MostDiscussed(most_discussed));
        }

        let most_bullish = self.top_by_score(rows, |row| row.label.is_bullish(), |a, b| b.total_cmp(&a));
        if !most_bullish.is_empty() {
            observations.push(KeyObservation::MostBullish(most_bullish));
        }

        let most_bearish = self.top_by_score(rows, |row| row.label.is_bearish(), |a, b| a.total_cmp(&b));
        if !most_bearish.is_empty() {
            observations.push(KeyObservation::MostBearish(most_bearish));
        }

        observations
    }

    fn top_by_score(
        &self,
        rows: &[TickerReport],
        include: impl Fn(&TickerReport) -> bool,
        compare: impl Fn(SentimentScore, SentimentScore) -> Ordering,
    ) -> Vec<TickerSymbol> {
        let mut candidates: Vec<&TickerReport> = rows.iter().filter(|row| include(*row)).collect();
        candidates.sort_by(|a, b| compare(a.average_score, b.average_score));

        candidates
            .into_iter()
            .take(self.observation_limit)
            .map(|row| row.ticker_symbol.clone())
            .collect()
    }
}

/// Folds the trading details of `contexts` into one line, e.g.
/// `Price targets: $150, $200 | Position: Long | Strategy: Options | Risk: High`.
///
/// Pieces without any observed value are left out; without any piece the
/// placeholder is returned.
pub fn synthesize_key_context(contexts: &[ContextSummary]) -> String {
    let mut price_targets: Vec<&str> = Vec::new();
    let mut position_types = Vec::new();
    let mut strategies = Vec::new();
    let mut risk_levels = Vec::new();

    for context in contexts {
        let detail = &context.trading_detail;

        for price_target in &detail.price_targets {
            if !price_targets
                .iter()
                .any(|existing| same_price(existing, price_target))
            {
                price_targets.push(price_target);
            }
        }
        position_types.extend(detail.position_type);
        strategies.extend(detail.strategy);
        risk_levels.extend(detail.risk_level);
    }

    price_targets.sort_by(|a, b| {
        let a = a.parse::<f64>().unwrap_or(f64::MAX);
        let b = b.parse::<f64>().unwrap_or(f64::MAX);
        a.total_cmp(&b)
    });

    let mut parts = Vec::new();

    if !price_targets.is_empty() {
        parts.push(format!("Price targets: ${}", price_targets.join(", $")));
    }
    if let Some(position_type) = most_common(&position_types) {
        parts.push(format!("Position: {}", position_type));
    }
    if let Some(strategy) = most_common(&strategies) {
        parts.push(format!("Strategy: {}", strategy));
    }
    if let Some(risk_level) = most_common(&risk_levels) {
        parts.push(format!("Risk: {}", risk_level));
    }

    if parts.is_empty() {
        KEY_CONTEXT_PLACEHOLDER.to_string()
    } else {
        parts.join(KEY_CONTEXT_SEPARATOR)
    }
}

/// Prices compare by value when both parse, so `150` and `150.00` are one target.
fn same_price(a: &str, b: &str) -> bool {
    match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// Renders aggregator output the way a per-ticker console listing reads:
/// label, score, sample count, then up to three example contexts.
pub fn render_sentiment_details(ticker_sentiments: &[TickerSentiment]) -> String {
    let mut output = String::new();

    for ticker_sentiment in ticker_sentiments {
        output.push_str(&format!(
            "\n{} - {}\n",
            ticker_sentiment.ticker_symbol, ticker_sentiment.label
        ));
        output.push_str(&format!(
            "Sentiment Score: {:.2}\n",
            ticker_sentiment.average_score
        ));
        output.push_str(&format!("Sample Count: {}\n", ticker_sentiment.sample_count));

        if ticker_sentiment.contexts.is_empty() {
            continue;
        }

        output.push_str("Example contexts:\n");
        for context in &ticker_sentiment.contexts {
            let preview: String = context.text.chars().take(CONTEXT_PREVIEW_CHARS).collect();
            output.push_str(&format!("- Text: {}...\n", preview));

            let detail = &context.trading_detail;
            if !detail.price_targets.is_empty() {
                output.push_str(&format!(
                    "  Price targets: ${}\n",
                    detail.price_targets.join(", $")
                ));
            }
            if let Some(position_type) = detail.position_type {
                output.push_str(&format!("  Position: {}\n", position_type));
            }
            if let Some(strategy) = detail.strategy {
                output.push_str(&format!("  Strategy: {}\n", strategy));
            }
            if let Some(risk_level) = detail.risk_level {
                output.push_str(&format!("  Risk: {}\n", risk_level));
            }
        }
    }

    output
}
