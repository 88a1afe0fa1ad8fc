use crate::types::{TickerSymbolFrequency, TickerSymbolFrequencyMap};
use crate::AliasResolver;
use log::info;

/// Counts raw alias occurrences per ticker symbol.
///
/// Unlike `AliasResolver::resolve`, every known ticker symbol is present in the
/// result, carrying `default_frequency` when it was not mentioned.
pub struct MentionCounter<'a> {
    alias_resolver: &'a AliasResolver,
    default_frequency: TickerSymbolFrequency,
}

impl<'a> MentionCounter<'a> {
    pub fn new(alias_resolver: &'a AliasResolver) -> Self {
        Self::with_default_frequency(alias_resolver, 0)
    }

    pub fn with_default_frequency(
        alias_resolver: &'a AliasResolver,
        default_frequency: TickerSymbolFrequency,
    ) -> Self {
        MentionCounter {
            alias_resolver,
            default_frequency,
        }
    }

    pub fn count(&self, text: &str) -> TickerSymbolFrequencyMap {
        let mut frequencies: TickerSymbolFrequencyMap = self
            .alias_resolver
            .ticker_symbols()
            .map(|ticker_symbol| (ticker_symbol.clone(), self.default_frequency))
            .collect();

        if text.trim().is_empty() {
            return frequencies;
        }

        for (ticker_symbol, frequency) in self.alias_resolver.resolve(text) {
            frequencies.insert(ticker_symbol, frequency);
        }

        info!(
            "Counted {} mentions across {} ticker symbols",
            frequencies.values().sum::<usize>(),
            frequencies.len()
        );

        frequencies
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AliasTable;

    fn alias_resolver() -> AliasResolver {
        let table = AliasTable::new(vec![("TSLA", vec!["Tesla"]), ("AAPL", vec!["Apple"])]).unwrap();

        AliasResolver::new(&table).unwrap()
    }

    #[test]
    fn test_count_includes_unmentioned_tickers() {
        let alias_resolver = alias_resolver();
        let results = MentionCounter::new(&alias_resolver).count("Tesla and TSLA");

        assert_eq!(results.get("TSLA"), Some(&2));
        assert_eq!(results.get("AAPL"), Some(&0));
    }

    #[test]
    fn test_whitespace_document_yields_defaults() {
        let alias_resolver = alias_resolver();
        let results = MentionCounter::with_default_frequency(&alias_resolver, 0).count(" \n\t ");

        assert_eq!(results.len(), 2);
        assert!(results.values().all(|&frequency| frequency == 0));
    }

    #[test]
    fn test_count_is_idempotent() {
        let alias_resolver = alias_resolver();
        let counter = MentionCounter::new(&alias_resolver);
        let text = "apple, Apple, APPLE and a tesla";

        assert_eq!(counter.count(text), counter.count(text));
    }
}
