use std::collections::HashMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a ticker symbol (e.g., stock ticker) as an owned `String`.
pub type TickerSymbol = String;

/// Any text form (company name or ticker spelling) which resolves to a ticker symbol.
pub type Alias = String;

/// Represents the total number occurrences of a ticker symbol within a text document.
pub type TickerSymbolFrequency = usize;

/// Represents a map of ticker symbols to their frequency counts within a text document.
/// The key is the `TickerSymbol`, and the value is the `TickerSymbolFrequency`.
pub type TickerSymbolFrequencyMap = HashMap<TickerSymbol, TickerSymbolFrequency>;

/// A polarity or sentiment score. Polarity lives in `[-1.0, 1.0]`; final
/// sample scores may reach roughly `[-2.25, 2.25]` once multipliers apply.
pub type SentimentScore = f64;

/// A single sentence of a comment.
pub type Sentence = String;

/// Position of a comment within the source document.
pub type CommentIndex = usize;

/// Position of a sentence within its comment.
pub type SentenceIndex = usize;

/// A price target as it appeared in the text, stripped of currency symbols.
pub type PriceTarget = String;
