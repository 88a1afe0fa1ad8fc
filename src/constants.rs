/// Prefix of the line which opens a new comment block (`Comment 12:`).
pub const COMMENT_MARKER_PREFIX: &str = "Comment ";

/// Prefix of the line which separates comment blocks.
pub const COMMENT_SEPARATOR_PREFIX: &str = "---";

/// Prefix of the thread title line which precedes all comments.
pub const THREAD_TITLE_PREFIX: &str = "Thread Title:";

/// Key context used when no trading details are available for a ticker.
pub const KEY_CONTEXT_PLACEHOLDER: &str = "Limited meaningful discussion";

/// Separator between the pieces of a key context string.
pub const KEY_CONTEXT_SEPARATOR: &str = " | ";

/// Number of tickers listed per key observation.
pub const KEY_OBSERVATION_LIMIT: usize = 3;

pub const SENTIMENT_KEYWORDS: &[&str] = &[
    "bullish", "bearish", "calls", "puts", "moon", "dump", "pump", "crash",
];

pub const TECHNICAL_ANALYSIS_INDICATORS: &[&str] = &[
    "rsi",
    "macd",
    "moving average",
    "support",
    "resistance",
    "volume",
];

pub const FUNDAMENTAL_ANALYSIS_INDICATORS: &[&str] =
    &["earnings", "revenue", "growth", "market share", "guidance"];

pub const DETAILED_REASONING_INDICATORS: &[&str] =
    &["because", "due to", "based on", "analysis shows"];

pub const POSITION_DISCLOSURE_INDICATORS: &[&str] = &["position:", "holding:", "bought", "sold"];

pub const QUALITY_INDICATOR_CATEGORIES: &[&[&str]] = &[
    TECHNICAL_ANALYSIS_INDICATORS,
    FUNDAMENTAL_ANALYSIS_INDICATORS,
    DETAILED_REASONING_INDICATORS,
    POSITION_DISCLOSURE_INDICATORS,
];

pub const LONG_POSITION_INDICATORS: &[&str] =
    &["calls", "long", "buy", "buying", "bullish", "moon"];

pub const SHORT_POSITION_INDICATORS: &[&str] =
    &["puts", "short", "sell", "selling", "bearish", "dump"];

pub const SWING_STRATEGY_KEYWORDS: &[&str] = &["swing", "weekly", "monthly"];
pub const DAY_STRATEGY_KEYWORDS: &[&str] = &["day trade", "scalp", "intraday"];
pub const OPTIONS_STRATEGY_KEYWORDS: &[&str] = &["call", "put", "strike", "expiry"];
pub const VALUE_STRATEGY_KEYWORDS: &[&str] = &["undervalued", "oversold", "fundamental"];
pub const MOMENTUM_STRATEGY_KEYWORDS: &[&str] = &["trend", "breakout", "momentum"];

pub const HIGH_RISK_KEYWORDS: &[&str] = &["yolo", "all in", "lottery", "0dte", "fd"];
pub const MEDIUM_RISK_KEYWORDS: &[&str] = &["risky", "volatile", "leverage"];
pub const LOW_RISK_KEYWORDS: &[&str] = &["safe", "conservative", "hedge", "small position"];

/// Dollar-amount-like numbers: `$450`, `450$`, `450.5`, `450 dollars`, `450USD`.
pub const PRICE_TARGET_PATTERN: &str = r"\$?\d+\.?\d*\$?|\$?\d+\.?\d*\s?(?:dollars?|USD)";

/// Lowercase words (without the trailing period) after which a period does
/// not end a sentence.
pub const SENTENCE_ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "inc", "corp", "co", "ltd", "vs", "etc", "e.g",
    "i.e", "approx", "est", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct",
    "nov", "dec", "u.s",
];

/// Word-level polarity lexicon used by `LexiconPolarityAnalyzer`. Covers general
/// opinion adjectives plus the trading-forum slang they would otherwise miss.
pub const POLARITY_LEXICON: &[(&str, f64)] = &[
    // Positive
    ("good", 0.7),
    ("great", 0.8),
    ("excellent", 1.0),
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("best", 1.0),
    ("better", 0.5),
    ("strong", 0.43),
    ("solid", 0.3),
    ("nice", 0.6),
    ("love", 0.5),
    ("happy", 0.8),
    ("impressive", 1.0),
    ("positive", 0.23),
    ("profitable", 0.5),
    ("profit", 0.3),
    ("profits", 0.3),
    ("gain", 0.4),
    ("gains", 0.4),
    ("win", 0.8),
    ("winning", 0.5),
    ("growth", 0.2),
    ("upside", 0.4),
    ("outperform", 0.5),
    ("undervalued", 0.3),
    ("bullish", 0.6),
    ("moon", 0.5),
    ("mooning", 0.6),
    ("rocket", 0.5),
    ("rally", 0.4),
    ("surge", 0.4),
    ("soar", 0.5),
    ("tendies", 0.6),
    ("printing", 0.4),
    ("green", 0.3),
    // Negative
    ("bad", -0.7),
    ("terrible", -1.0),
    ("awful", -1.0),
    ("worst", -1.0),
    ("worse", -0.4),
    ("weak", -0.375),
    ("poor", -0.4),
    ("ugly", -0.7),
    ("hate", -0.8),
    ("scared", -0.5),
    ("fear", -0.4),
    ("negative", -0.3),
    ("disappointing", -0.6),
    ("loss", -0.4),
    ("losses", -0.4),
    ("losing", -0.4),
    ("downside", -0.4),
    ("overvalued", -0.4),
    ("bankrupt", -0.8),
    ("collapse", -0.6),
    ("scam", -0.8),
    ("fraud", -0.7),
    ("bearish", -0.6),
    ("crash", -0.6),
    ("crashing", -0.6),
    ("dump", -0.5),
    ("dumping", -0.5),
    ("tank", -0.5),
    ("tanking", -0.5),
    ("plunge", -0.5),
    ("bagholder", -0.5),
    ("bagholding", -0.5),
    ("rekt", -0.7),
    ("red", -0.2),
];

/// Multipliers applied to the polarity of the word which follows them.
pub const POLARITY_INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.2),
    ("extremely", 1.5),
    ("super", 1.3),
    ("incredibly", 1.4),
    ("absolutely", 1.3),
    ("totally", 1.2),
    ("massively", 1.4),
];

/// Words which flip (and dampen) the polarity of the assessment that follows.
pub const POLARITY_NEGATIONS: &[&str] = &[
    "not", "no", "never", "don't", "dont", "isn't", "isnt", "won't", "wont", "can't", "cant",
    "doesn't", "didn't", "aren't",
];

/// Polarity of a negated assessment is multiplied by this factor.
pub const POLARITY_NEGATION_FACTOR: f64 = -0.5;
