use crate::types::{Alias, TickerSymbol, TickerSymbolFrequencyMap};
use crate::{AliasTable, Error};
use log::debug;
use regex::Regex;

struct CompiledAlias {
    alias: Alias,
    pattern: Regex,
}

/// Resolves free text to canonical ticker symbols using whole-word,
/// case-insensitive alias matching.
///
/// Both the text and every alias are uppercased before matching, and a match
/// must be bounded by non-word characters on both sides, so `NVDAX` never
/// counts as `NVDA`.
///
/// Note: Aliases are not disambiguated. If two tickers list the same alias,
/// an occurrence of that alias counts towards both.
pub struct AliasResolver {
    compiled_entries: Vec<(TickerSymbol, Vec<CompiledAlias>)>,
}

impl AliasResolver {
    /// Compiles a word-bounded pattern for every alias of the table.
    ///
    /// # Errors
    /// Returns `Error::PatternError` if a pattern fails to compile.
    pub fn new(alias_table: &AliasTable) -> Result<Self, Error> {
        let mut compiled_entries = Vec::with_capacity(alias_table.len());

        for (ticker_symbol, aliases) in alias_table.iter() {
            let compiled_aliases = aliases
                .iter()
                .map(|alias| -> Result<CompiledAlias, Error> {
                    let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(alias)))?;

                    Ok(CompiledAlias {
                        alias: alias.clone(),
                        pattern,
                    })
                })
                .collect::<Result<Vec<_>, Error>>()?;

            compiled_entries.push((ticker_symbol.clone(), compiled_aliases));
        }

        debug!(
            "Compiled alias patterns for {} ticker symbols",
            compiled_entries.len()
        );

        Ok(AliasResolver { compiled_entries })
    }

    /// Counts every alias occurrence in `text`, folded into its ticker symbol.
    ///
    /// Only tickers with at least one match are present in the result; empty
    /// text yields an empty map.
    pub fn resolve(&self, text: &str) -> TickerSymbolFrequencyMap {
        let mut frequencies = TickerSymbolFrequencyMap::new();

        if text.is_empty() {
            return frequencies;
        }

        let uppercased_text = text.to_uppercase();

        for (ticker_symbol, compiled_aliases) in &self.compiled_entries {
            let count: usize = compiled_aliases
                .iter()
                .map(|compiled| compiled.pattern.find_iter(&uppercased_text).count())
                .sum();

            if count > 0 {
                *frequencies.entry(ticker_symbol.clone()).or_insert(0) += count;
            }
        }

        frequencies
    }

    /// Lists every `(ticker, alias)` pair which occurs at least once in `text`,
    /// in table order.
    pub fn matching_aliases<'a>(&'a self, text: &str) -> Vec<(&'a TickerSymbol, &'a Alias)> {
        let uppercased_text = text.to_uppercase();

        self.compiled_entries
            .iter()
            .flat_map(|(ticker_symbol, compiled_aliases)| {
                compiled_aliases
                    .iter()
                    .map(move |compiled| (ticker_symbol, compiled))
            })
            .filter(|(_, compiled)| compiled.pattern.is_match(&uppercased_text))
            .map(|(ticker_symbol, compiled)| (ticker_symbol, &compiled.alias))
            .collect()
    }

    /// Iterates every `(ticker, alias, pattern)` triple in table order.
    ///
    /// Patterns expect uppercased input.
    pub fn alias_patterns(&self) -> impl Iterator<Item = (&TickerSymbol, &Alias, &Regex)> {
        self.compiled_entries
            .iter()
            .flat_map(|(ticker_symbol, compiled_aliases)| {
                compiled_aliases
                    .iter()
                    .map(move |compiled| (ticker_symbol, &compiled.alias, &compiled.pattern))
            })
    }

    pub fn ticker_symbols(&self) -> impl Iterator<Item = &TickerSymbol> {
        self.compiled_entries.iter().map(|(ticker_symbol, _)| ticker_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> AliasResolver {
        let table = AliasTable::new(vec![
            ("NVDA", vec!["Nvidia"]),
            ("AMD", vec!["Advanced Micro Devices"]),
            ("IWM", vec!["Russell 2000"]),
        ])
        .unwrap();

        AliasResolver::new(&table).unwrap()
    }

    #[test]
    fn test_resolve_folds_aliases_into_ticker() {
        let results = resolver().resolve("nvidia beat again, NVDA to 200. Nvidia!");

        assert_eq!(results.get("NVDA"), Some(&3));
        assert_eq!(results.get("AMD"), None);
    }

    #[test]
    fn test_resolve_requires_word_boundaries() {
        let results = resolver().resolve("NVDAX and XNVDA and nvda_calls are not NVDA");

        assert_eq!(results.get("NVDA"), Some(&1));
    }

    #[test]
    fn test_resolve_multi_word_aliases() {
        let results =
            resolver().resolve("Advanced micro devices and the russell 2000 both ripped");

        assert_eq!(results.get("AMD"), Some(&1));
        assert_eq!(results.get("IWM"), Some(&1));
    }

    #[test]
    fn test_resolve_empty_text() {
        assert!(resolver().resolve("").is_empty());
    }

    #[test]
    fn test_shared_alias_counts_for_each_ticker() {
        let table = AliasTable::new(vec![("GOOGL", vec!["Alphabet"]), ("GOOG", vec!["Alphabet"])])
            .unwrap();
        let results = AliasResolver::new(&table).unwrap().resolve("Alphabet");

        assert_eq!(results.get("GOOGL"), Some(&1));
        assert_eq!(results.get("GOOG"), Some(&1));
    }

    #[test]
    fn test_matching_aliases_in_table_order() {
        let resolver = resolver();
        let matches = resolver.matching_aliases("Russell 2000 down, nvidia and NVDA up");

        assert_eq!(
            matches,
            vec![
                (&"NVDA".to_string(), &"NVDA".to_string()),
                (&"NVDA".to_string(), &"NVIDIA".to_string()),
                (&"IWM".to_string(), &"RUSSELL 2000".to_string()),
            ]
        );
    }

    #[test]
    fn test_alias_patterns_expect_uppercase() {
        let resolver = resolver();
        let (ticker_symbol, alias, pattern) = resolver.alias_patterns().nth(1).unwrap();

        assert_eq!(ticker_symbol, "NVDA");
        assert_eq!(alias, "NVIDIA");
        assert!(pattern.is_match("I LIKE NVIDIA."));
        assert!(!pattern.is_match("I like Nvidia."));
    }
}
