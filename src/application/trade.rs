use crate::domain::entities::trade::{NewTrade, Trade};
use crate::domain::error::DomainError;
use crate::domain::ports::trade_repository::TradeRepository;
use std::sync::Arc;

pub struct TradeUseCase {
    repo: Arc<dyn TradeRepository>,
}

impl TradeUseCase {
    pub fn new(repo: Arc<dyn TradeRepository>) -> Self {
        Self { repo }
    }

    pub fn create(&self, input: NewTrade) -> Result<Trade, DomainError> {
        input.validate()?;
        let trade = self.repo.add_trade(input.into_trade())?;
        tracing::debug!(trade_id = %trade.trade_id, "trade stored");
        Ok(trade)
    }

    pub fn get(&self, id: &str) -> Result<Trade, DomainError> {
        self.repo
            .get_trade(id)
            .ok_or_else(|| DomainError::NotFound(format!("trade {id}")))
    }

    pub fn list(&self) -> Vec<Trade> {
        self.repo.list_trades()
    }

    pub fn count(&self) -> usize {
        self.repo.count()
    }
}
