use crate::constants::{
    DAY_STRATEGY_KEYWORDS, HIGH_RISK_KEYWORDS, LONG_POSITION_INDICATORS, LOW_RISK_KEYWORDS,
    MEDIUM_RISK_KEYWORDS, MOMENTUM_STRATEGY_KEYWORDS, OPTIONS_STRATEGY_KEYWORDS,
    PRICE_TARGET_PATTERN, SHORT_POSITION_INDICATORS, SWING_STRATEGY_KEYWORDS,
    VALUE_STRATEGY_KEYWORDS,
};
use crate::types::PriceTarget;
use crate::utils::contains_any;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static PRICE_TARGET_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(PRICE_TARGET_PATTERN).expect("price target pattern is a valid regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PositionType {
    Long,
    Short,
}

impl PositionType {
    /// `Long` wins when indicators of both sides are present.
    pub fn detect(lowercased_text: &str) -> Option<Self> {
        if contains_any(lowercased_text, LONG_POSITION_INDICATORS) {
            Some(PositionType::Long)
        } else if contains_any(lowercased_text, SHORT_POSITION_INDICATORS) {
            Some(PositionType::Short)
        } else {
            None
        }
    }
}

impl fmt::Display for PositionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionType::Long => write!(f, "Long"),
            PositionType::Short => write!(f, "Short"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TradingStrategy {
    Swing,
    Day,
    Options,
    Value,
    Momentum,
}

impl TradingStrategy {
    /// Strategies in detection priority order.
    pub const PRIORITY: [TradingStrategy; 5] = [
        TradingStrategy::Swing,
        TradingStrategy::Day,
        TradingStrategy::Options,
        TradingStrategy::Value,
        TradingStrategy::Momentum,
    ];

    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            TradingStrategy::Swing => SWING_STRATEGY_KEYWORDS,
            TradingStrategy::Day => DAY_STRATEGY_KEYWORDS,
            TradingStrategy::Options => OPTIONS_STRATEGY_KEYWORDS,
            TradingStrategy::Value => VALUE_STRATEGY_KEYWORDS,
            TradingStrategy::Momentum => MOMENTUM_STRATEGY_KEYWORDS,
        }
    }

    pub fn detect(lowercased_text: &str) -> Option<Self> {
        Self::PRIORITY
            .into_iter()
            .find(|strategy| contains_any(lowercased_text, strategy.keywords()))
    }
}

impl fmt::Display for TradingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TradingStrategy::Swing => "Swing",
            TradingStrategy::Day => "Day",
            TradingStrategy::Options => "Options",
            TradingStrategy::Value => "Value",
            TradingStrategy::Momentum => "Momentum",
        };

        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    /// Risk levels in detection priority order.
    pub const PRIORITY: [RiskLevel; 3] = [RiskLevel::High, RiskLevel::Medium, RiskLevel::Low];

    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            RiskLevel::High => HIGH_RISK_KEYWORDS,
            RiskLevel::Medium => MEDIUM_RISK_KEYWORDS,
            RiskLevel::Low => LOW_RISK_KEYWORDS,
        }
    }

    pub fn detect(lowercased_text: &str) -> Option<Self> {
        Self::PRIORITY
            .into_iter()
            .find(|risk_level| contains_any(lowercased_text, risk_level.keywords()))
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::High => write!(f, "High"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::Low => write!(f, "Low"),
        }
    }
}

/// Trading signals heuristically extracted from a context window.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TradingDetail {
    pub price_targets: Vec<PriceTarget>,
    pub position_type: Option<PositionType>,
    pub strategy: Option<TradingStrategy>,
    pub risk_level: Option<RiskLevel>,
}

impl TradingDetail {
    pub fn extract(text: &str) -> Self {
        let lowercased_text = text.to_lowercase();

        TradingDetail {
            price_targets: extract_price_targets(text),
            position_type: PositionType::detect(&lowercased_text),
            strategy: TradingStrategy::detect(&lowercased_text),
            risk_level: RiskLevel::detect(&lowercased_text),
        }
    }
}

/// Every dollar-amount-like number in `text`, trimmed of `$`, spaces and a
/// sentence-ending period.
pub fn extract_price_targets(text: &str) -> Vec<PriceTarget> {
    PRICE_TARGET_REGEX
        .find_iter(text)
        .map(|price| {
            price
                .as_str()
                .trim_matches(|c: char| c == '$' || c == ' ')
                .trim_end_matches('.')
                .to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_price_targets() {
        assert_eq!(
            extract_price_targets("PT $450, maybe 500$ or 612.5 by Friday"),
            vec!["450", "500", "612.5"]
        );
        assert_eq!(extract_price_targets("no numbers here"), Vec::<String>::new());
    }

    #[test]
    fn test_extract_price_targets_drops_sentence_period() {
        assert_eq!(
            extract_price_targets("calls to $150. NVDA to 150 dollars."),
            vec!["150", "150"]
        );
    }

    #[test]
    fn test_long_wins_over_short() {
        assert_eq!(
            PositionType::detect("selling puts to buy calls"),
            Some(PositionType::Long)
        );
        assert_eq!(
            PositionType::detect("loaded up on puts"),
            Some(PositionType::Short)
        );
        assert_eq!(PositionType::detect("just watching"), None);
    }

    #[test]
    fn test_strategy_priority() {
        assert_eq!(
            TradingStrategy::detect("weekly call spreads on the breakout"),
            Some(TradingStrategy::Swing)
        );
        assert_eq!(
            TradingStrategy::detect("strike looks good, riding the trend"),
            Some(TradingStrategy::Options)
        );
        assert_eq!(
            TradingStrategy::detect("clear breakout"),
            Some(TradingStrategy::Momentum)
        );
        assert_eq!(TradingStrategy::detect("no idea"), None);
    }

    #[test]
    fn test_risk_priority() {
        assert_eq!(
            RiskLevel::detect("risky yolo into 0dte"),
            Some(RiskLevel::High)
        );
        assert_eq!(
            RiskLevel::detect("a volatile but small position"),
            Some(RiskLevel::Medium)
        );
        assert_eq!(
            RiskLevel::detect("conservative hedge"),
            Some(RiskLevel::Low)
        );
        assert_eq!(RiskLevel::detect("nothing"), None);
    }

    #[test]
    fn test_extract_trading_detail() {
        let detail = TradingDetail::extract("TSLA puts, very bearish, high risk YOLO");

        assert_eq!(
            detail,
            TradingDetail {
                price_targets: vec![],
                position_type: Some(PositionType::Short),
                strategy: Some(TradingStrategy::Options),
                risk_level: Some(RiskLevel::High),
            }
        );
    }
}
