use crate::domain::entities::trade::Trade;
use crate::domain::error::DomainError;
use crate::domain::values::buy_sell::BuySellIndicator;
use chrono::{DateTime, Utc};

/// Structured filter criteria. Every field is optional; a trade matches when it
/// satisfies all of the criteria that are set. Range bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TradeFilter {
    pub asset_class: Option<String>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub trade_type: Option<BuySellIndicator>,
}

impl TradeFilter {
    pub fn is_empty(&self) -> bool {
        *self == TradeFilter::default()
    }

    pub fn matches(&self, trade: &Trade) -> bool {
        // A trade without an asset class never satisfies an asset class criterion.
        if let Some(asset_class) = &self.asset_class {
            if trade.asset_class.as_deref() != Some(asset_class.as_str()) {
                return false;
            }
        }
        if let Some(start) = self.start {
            if trade.trade_date_time < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if trade.trade_date_time > end {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            if trade.price() < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if trade.price() > max {
                return false;
            }
        }
        if let Some(side) = self.trade_type {
            if trade.side() != side {
                return false;
            }
        }
        true
    }
}

pub trait TradeRepository: Send + Sync {
    /// Appends a trade. Rejects an id that is already stored.
    fn add_trade(&self, trade: Trade) -> Result<Trade, DomainError>;
    fn get_trade(&self, id: &str) -> Option<Trade>;
    fn search_trades(&self, text: &str) -> Vec<Trade>;
    fn filter_trades(&self, filter: &TradeFilter) -> Vec<Trade>;
    fn list_trades(&self) -> Vec<Trade>;
    fn count(&self) -> usize;
}
