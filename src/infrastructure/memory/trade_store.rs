use crate::domain::entities::trade::Trade;
use crate::domain::error::DomainError;
use crate::domain::ports::trade_repository::*;
use parking_lot::RwLock;
use std::collections::HashMap;

#[derive(Debug, Default)]
struct Inner {
    trades: Vec<Trade>,
    by_id: HashMap<String, usize>,
}

/// Append-only trade store held in process memory.
///
/// Appends and index updates happen under a single write lock, so a reader
/// either sees a trade in both the sequence and the id index or in neither.
/// Queries clone matches out; nothing hands out references into the store.
#[derive(Debug, Default)]
pub struct InMemoryTradeStore {
    inner: RwLock<Inner>,
}

impl InMemoryTradeStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn collect_where<F>(&self, pred: F) -> Vec<Trade>
    where
        F: Fn(&Trade) -> bool,
    {
        self.inner
            .read()
            .trades
            .iter()
            .filter(|t| pred(t))
            .cloned()
            .collect()
    }
}

impl TradeRepository for InMemoryTradeStore {
    fn add_trade(&self, trade: Trade) -> Result<Trade, DomainError> {
        let mut inner = self.inner.write();
        if inner.by_id.contains_key(&trade.trade_id) {
            return Err(DomainError::DuplicateTrade(trade.trade_id));
        }
        let position = inner.trades.len();
        inner.by_id.insert(trade.trade_id.clone(), position);
        inner.trades.push(trade.clone());
        Ok(trade)
    }

    fn get_trade(&self, id: &str) -> Option<Trade> {
        let inner = self.inner.read();
        inner
            .by_id
            .get(id)
            .and_then(|&pos| inner.trades.get(pos))
            .cloned()
    }

    fn search_trades(&self, text: &str) -> Vec<Trade> {
        self.collect_where(|t| t.matches_text(text))
    }

    fn filter_trades(&self, filter: &TradeFilter) -> Vec<Trade> {
        if filter.is_empty() {
            return self.list_trades();
        }
        self.collect_where(|t| filter.matches(t))
    }

    fn list_trades(&self) -> Vec<Trade> {
        self.inner.read().trades.clone()
    }

    fn count(&self) -> usize {
        self.inner.read().trades.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::trade::TradeDetails;
    use crate::domain::values::buy_sell::BuySellIndicator;
    use chrono::{TimeZone, Utc};

    fn trade(id: &str, counterparty: Option<&str>) -> Trade {
        Trade {
            trade_id: id.into(),
            asset_class: None,
            counterparty: counterparty.map(String::from),
            instrument_id: "AAPL".into(),
            instrument_name: "Apple Inc".into(),
            trade_date_time: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
            trade_details: TradeDetails {
                buy_sell_indicator: BuySellIndicator::Buy,
                price: 1.0,
                quantity: 1,
            },
            trader: "Carol".into(),
        }
    }

    #[test]
    fn duplicate_id_leaves_store_unchanged() {
        let store = InMemoryTradeStore::new();
        store.add_trade(trade("T1", Some("Goldman"))).unwrap();
        let err = store.add_trade(trade("T1", Some("Citi"))).unwrap_err();
        assert!(matches!(err, DomainError::DuplicateTrade(id) if id == "T1"));
        assert_eq!(store.count(), 1);
        assert_eq!(
            store.get_trade("T1").unwrap().counterparty.as_deref(),
            Some("Goldman")
        );
    }

    #[test]
    fn index_tracks_insertion_position() {
        let store = InMemoryTradeStore::new();
        for i in 0..20 {
            store.add_trade(trade(&format!("T{i}"), None)).unwrap();
        }
        assert_eq!(store.get_trade("T13").unwrap().trade_id, "T13");
        assert!(store.get_trade("T20").is_none());
    }
}
