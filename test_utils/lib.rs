#![allow(dead_code)] // Not every test binary uses every helper

use std::collections::HashMap;
use std::{fs, path::Path};
use ticker_sentiment::{generate_report, TickerSymbol};

const EXPECTED_PREFIX: &str = "EXPECTED:";
const EXPECTED_SENTIMENT_PREFIX: &str = "EXPECTED_SENTIMENT:";
const COMMENT_PREFIX: &str = "COMMENT:";

/// Outcome of comparing a report against the annotations of a test file.
#[derive(Debug, Default)]
pub struct EvaluationResult {
    pub missing_tickers: Vec<TickerSymbol>,
    pub unexpected_tickers: Vec<TickerSymbol>,
    /// `(ticker, expected, actual)`
    pub count_mismatches: Vec<(TickerSymbol, usize, usize)>,
    /// `(ticker, expected, actual)`
    pub label_mismatches: Vec<(TickerSymbol, String, String)>,
}

impl EvaluationResult {
    pub fn error_count(&self) -> usize {
        self.missing_tickers.len()
            + self.unexpected_tickers.len()
            + self.count_mismatches.len()
            + self.label_mismatches.len()
    }
}

/// Parses `PREFIX TICKER=value` annotation lines.
fn get_annotations(content: &str, prefix: &str) -> Vec<(TickerSymbol, String)> {
    content
        .lines()
        .filter_map(|line| line.trim().strip_prefix(prefix))
        .filter_map(|annotation| annotation.split_once('='))
        .map(|(ticker_symbol, value)| (ticker_symbol.trim().to_string(), value.trim().to_string()))
        .collect()
}

// Helper function to get the expected mention counts from the text file
pub fn get_expected_mentions(file_path: &Path) -> HashMap<TickerSymbol, usize> {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    get_annotations(&content, EXPECTED_PREFIX)
        .into_iter()
        .map(|(ticker_symbol, count)| {
            let count = count
                .parse()
                .unwrap_or_else(|_| panic!("Invalid expected count for {}", ticker_symbol));
            (ticker_symbol, count)
        })
        .collect()
}

// Helper function to get the expected sentiment labels from the text file
pub fn get_expected_sentiments(file_path: &Path) -> HashMap<TickerSymbol, String> {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    get_annotations(&content, EXPECTED_SENTIMENT_PREFIX)
        .into_iter()
        .collect()
}

/// Strips annotation lines, leaving the thread text.
pub fn filter_annotation_lines(raw_text: &str) -> String {
    raw_text
        .lines()
        .filter(|line| {
            let line = line.trim_start();
            !line.starts_with(EXPECTED_PREFIX)
                && !line.starts_with(EXPECTED_SENTIMENT_PREFIX)
                && !line.starts_with(COMMENT_PREFIX)
        })
        .collect::<Vec<&str>>()
        .join("\n")
}

// Helper function to run the test for each file in the directory
pub fn run_test_for_file(test_file_path: &Path, use_assertions: bool) -> EvaluationResult {
    let raw_text = fs::read_to_string(test_file_path).expect("Failed to read test file");
    let filtered_text = filter_annotation_lines(&raw_text);

    eprintln!("Testing file: {}", test_file_path.display());

    let report = generate_report(&filtered_text).expect("Failed to generate report");

    let expected_mentions = get_expected_mentions(test_file_path);
    let expected_sentiments = get_expected_sentiments(test_file_path);

    let mut evaluation_result = EvaluationResult::default();

    for (ticker_symbol, expected_count) in &expected_mentions {
        match report.row(ticker_symbol) {
            Some(row) if row.mention_count == 0 => {
                evaluation_result.missing_tickers.push(ticker_symbol.clone())
            }
            Some(row) if row.mention_count != *expected_count => evaluation_result
                .count_mismatches
                .push((ticker_symbol.clone(), *expected_count, row.mention_count)),
            Some(_) => {}
            None => evaluation_result.missing_tickers.push(ticker_symbol.clone()),
        }
    }

    for row in &report.rows {
        if row.mention_count > 0 && !expected_mentions.contains_key(&row.ticker_symbol) {
            evaluation_result
                .unexpected_tickers
                .push(row.ticker_symbol.clone());
        }
    }

    for (ticker_symbol, expected_label) in &expected_sentiments {
        let actual_label = report
            .row(ticker_symbol)
            .map(|row| row.label.to_string())
            .unwrap_or_default();

        if &actual_label != expected_label {
            evaluation_result.label_mismatches.push((
                ticker_symbol.clone(),
                expected_label.clone(),
                actual_label,
            ));
        }
    }

    if use_assertions {
        assert!(
            evaluation_result.missing_tickers.is_empty(),
            "{} - Missing expected tickers: {:?}",
            test_file_path.display(),
            evaluation_result.missing_tickers
        );
        assert!(
            evaluation_result.unexpected_tickers.is_empty(),
            "{} - Unexpected tickers found: {:?}",
            test_file_path.display(),
            evaluation_result.unexpected_tickers
        );
        assert!(
            evaluation_result.count_mismatches.is_empty(),
            "{} - Mention count mismatches (ticker, expected, actual): {:?}",
            test_file_path.display(),
            evaluation_result.count_mismatches
        );
        assert!(
            evaluation_result.label_mismatches.is_empty(),
            "{} - Sentiment mismatches (ticker, expected, actual): {:?}",
            test_file_path.display(),
            evaluation_result.label_mismatches
        );
    }

    evaluation_result
}
