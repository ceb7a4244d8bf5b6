use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Side of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BuySellIndicator {
    Buy,
    Sell,
}

impl fmt::Display for BuySellIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuySellIndicator::Buy => write!(f, "BUY"),
            BuySellIndicator::Sell => write!(f, "SELL"),
        }
    }
}

impl FromStr for BuySellIndicator {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BUY" => Ok(BuySellIndicator::Buy),
            "SELL" => Ok(BuySellIndicator::Sell),
            _ => Err(format!("Unknown buy/sell indicator: {s} (expected BUY or SELL)")),
        }
    }
}

// Accepts "buy", "Buy", "BUY" alike.
impl<'de> Deserialize<'de> for BuySellIndicator {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
