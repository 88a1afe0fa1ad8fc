use crate::types::{TickerSymbol, TickerSymbolFrequency, TickerSymbolFrequencyMap};

/// Sorts a mapping of ticker symbols to their frequencies.
///
/// ### Sorting Order:
/// - **Primary:** Sorts by frequency in descending order (higher frequency first).
/// - **Secondary:** If two symbols have the same frequency, sorts by ticker
///   symbol in ascending lexicographical order for deterministic ordering.
///
/// ### Example:
/// ```rust
/// use std::collections::HashMap;
/// use ticker_sentiment::types::TickerSymbolFrequencyMap;
/// use ticker_sentiment::sort_results;
///
/// let mut results: TickerSymbolFrequencyMap = HashMap::new();
/// results.insert("AAPL".to_string(), 10);
/// results.insert("TSLA".to_string(), 15);
/// results.insert("GOOGL".to_string(), 10);
///
/// let sorted = sort_results(&results);
/// assert_eq!(sorted, vec![
///     ("TSLA".to_string(), 15),
///     ("AAPL".to_string(), 10),
///     ("GOOGL".to_string(), 10)
/// ]);
/// ```
pub fn sort_results(
    results: &TickerSymbolFrequencyMap,
) -> Vec<(TickerSymbol, TickerSymbolFrequency)> {
    let mut sorted_results: Vec<(TickerSymbol, TickerSymbolFrequency)> = results
        .iter()
        .map(|(ticker_symbol, frequency)| (ticker_symbol.to_owned(), *frequency))
        .collect();

    sorted_results.sort_by(|a, b| {
        b.1.cmp(&a.1) // Sort by frequency (descending)
            .then_with(|| a.0.cmp(&b.0)) // Secondary sort by ticker symbol (ascending)
    });

    sorted_results
}
