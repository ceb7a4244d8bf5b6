pub mod buy_sell;
pub mod timestamp;
