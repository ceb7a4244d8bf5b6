//! Shared test helpers.
#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use tradebook::domain::entities::trade::{NewTrade, TradeDetails};
use tradebook::domain::values::buy_sell::BuySellIndicator;
use tradebook::TradeBook;

pub fn setup() -> TradeBook {
    TradeBook::new()
}

pub fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

pub fn make_trade(id: &str, price: f64, side: BuySellIndicator, at: DateTime<Utc>) -> NewTrade {
    NewTrade {
        trade_id: Some(id.to_string()),
        asset_class: None,
        counterparty: None,
        instrument_id: format!("INS-{id}"),
        instrument_name: format!("Instrument {id}"),
        trade_date_time: at,
        trade_details: TradeDetails {
            buy_sell_indicator: side,
            price,
            quantity: 10,
        },
        trader: "Trader".to_string(),
    }
}

/// A(T1, 10, BUY, 2024-01-01) and B(T2, 50, SELL, 2024-06-01).
pub fn seed_pair(book: &TradeBook) {
    book.create(make_trade("T1", 10.0, BuySellIndicator::Buy, day(2024, 1, 1)))
        .unwrap();
    book.create(make_trade("T2", 50.0, BuySellIndicator::Sell, day(2024, 6, 1)))
        .unwrap();
}

pub fn ids(trades: &[tradebook::domain::entities::trade::Trade]) -> Vec<&str> {
    trades.iter().map(|t| t.trade_id.as_str()).collect()
}
