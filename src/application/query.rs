use crate::domain::entities::trade::Trade;
use crate::domain::error::DomainError;
use crate::domain::ports::trade_repository::{TradeFilter, TradeRepository};
use std::sync::Arc;

pub struct QueryUseCase {
    repo: Arc<dyn TradeRepository>,
}

impl QueryUseCase {
    pub fn new(repo: Arc<dyn TradeRepository>) -> Self {
        Self { repo }
    }

    /// Inverted ranges are not an error, they just match nothing.
    pub fn execute(&self, filter: &TradeFilter) -> Result<Vec<Trade>, DomainError> {
        for (name, bound) in [("minPrice", filter.min_price), ("maxPrice", filter.max_price)] {
            if bound.is_some_and(f64::is_nan) {
                return Err(DomainError::InvalidInput(format!("{name} is not a number")));
            }
        }
        Ok(self.repo.filter_trades(filter))
    }
}
