use crate::domain::entities::trade::Trade;
use crate::domain::ports::trade_repository::TradeRepository;
use std::sync::Arc;

/// Free-text search over counterparty, instrument id, instrument name and trader.
pub struct SearchUseCase {
    repo: Arc<dyn TradeRepository>,
}

impl SearchUseCase {
    pub fn new(repo: Arc<dyn TradeRepository>) -> Self {
        Self { repo }
    }

    /// Case-sensitive substring match. An empty string matches every trade.
    pub fn execute(&self, text: &str) -> Vec<Trade> {
        self.repo.search_trades(text)
    }
}
