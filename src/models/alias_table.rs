use crate::types::{Alias, TickerSymbol};
use crate::Error;
use csv::ReaderBuilder;
use flate2::read::GzDecoder;
use log::warn;
use std::io::Read;

// Gzipped `data/alias_table.csv`, written by `build.rs`
const COMPRESSED_ALIAS_TABLE_BYTES: &[u8] =
    include_bytes!(concat!(env!("OUT_DIR"), "/alias_table.csv.gz"));

const SYMBOL_HEADER: &str = "Symbol";
const ALIAS_HEADER: &str = "Alias";

/// An immutable mapping of canonical ticker symbols to the aliases which resolve to them.
///
/// Entries keep their insertion order, which is also the order in which the
/// resolver reports matches. Every ticker always lists itself as an alias.
#[derive(Debug, Clone, PartialEq)]
pub struct AliasTable {
    entries: Vec<(TickerSymbol, Vec<Alias>)>,
}

impl AliasTable {
    /// Builds a table from `(ticker, aliases)` pairs.
    ///
    /// Tickers and aliases are uppercased. Repeated tickers are merged and
    /// repeated aliases dropped.
    ///
    /// # Errors
    /// Returns `Error::ConfigError` for an empty ticker or alias.
    pub fn new<I, T, A>(entries: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (T, Vec<A>)>,
        T: AsRef<str>,
        A: AsRef<str>,
    {
        let mut table = AliasTable {
            entries: Vec::new(),
        };

        for (ticker_symbol, aliases) in entries {
            let ticker_symbol = normalize(ticker_symbol.as_ref());
            if ticker_symbol.is_empty() {
                return Err(Error::ConfigError("Ticker symbol cannot be empty".to_string()));
            }

            // The ticker itself always resolves to the ticker
            table.insert(&ticker_symbol, &ticker_symbol);

            for alias in aliases {
                let alias = normalize(alias.as_ref());
                if alias.is_empty() {
                    return Err(Error::ConfigError(format!(
                        "Empty alias for ticker symbol {}",
                        ticker_symbol
                    )));
                }
                table.insert(&ticker_symbol, &alias);
            }
        }

        Ok(table)
    }

    /// Reads a `Symbol,Alias` CSV, one alias per row.
    ///
    /// Rows with a blank symbol are skipped with a warning.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?
            .clone();

        let symbol_position = headers
            .iter()
            .position(|h| h == SYMBOL_HEADER)
            .ok_or_else(|| Error::ParserError(format!("Missing '{}' column", SYMBOL_HEADER)))?;
        let alias_position = headers.iter().position(|h| h == ALIAS_HEADER);

        let mut rows: Vec<(String, Vec<String>)> = Vec::new();

        for record in reader.records() {
            let record =
                record.map_err(|e| Error::ParserError(format!("Failed to read record: {}", e)))?;

            let symbol = record.get(symbol_position).unwrap_or_default();
            if symbol.is_empty() {
                warn!("Skipping row without a symbol: {:?}", record);
                continue;
            }

            let aliases = alias_position
                .and_then(|position| record.get(position))
                .filter(|alias| !alias.is_empty())
                .map(|alias| vec![alias.to_string()])
                .unwrap_or_default();

            rows.push((symbol.to_string(), aliases));
        }

        Self::new(rows)
    }

    /// Loads the alias table which ships with the crate.
    pub fn from_embedded_csv() -> Result<Self, Error> {
        let mut decoder = GzDecoder::new(COMPRESSED_ALIAS_TABLE_BYTES);
        let mut csv = String::new();
        decoder.read_to_string(&mut csv)?;

        Self::from_csv_reader(csv.as_bytes())
    }

    /// Iterates `(ticker, aliases)` entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&TickerSymbol, &[Alias])> {
        self.entries
            .iter()
            .map(|(ticker_symbol, aliases)| (ticker_symbol, aliases.as_slice()))
    }

    pub fn ticker_symbols(&self) -> impl Iterator<Item = &TickerSymbol> {
        self.entries.iter().map(|(ticker_symbol, _)| ticker_symbol)
    }

    pub fn aliases(&self, ticker_symbol: &str) -> Option<&[Alias]> {
        let ticker_symbol = normalize(ticker_symbol);

        self.entries
            .iter()
            .find(|(existing, _)| *existing == ticker_symbol)
            .map(|(_, aliases)| aliases.as_slice())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, ticker_symbol: &str, alias: &str) {
        let position = match self
            .entries
            .iter()
            .position(|(existing, _)| existing == ticker_symbol)
        {
            Some(position) => position,
            None => {
                self.entries.push((ticker_symbol.to_string(), Vec::new()));
                self.entries.len() - 1
            }
        };

        let aliases = &mut self.entries[position].1;
        if !aliases.iter().any(|existing| existing == alias) {
            aliases.push(alias.to_string());
        }
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_uppercase()
}
