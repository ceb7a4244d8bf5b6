use crate::application::trade::TradeUseCase;
use crate::domain::entities::trade::NewTrade;
use crate::domain::error::DomainError;
use crate::domain::ports::trade_repository::TradeRepository;
use std::path::Path;
use std::sync::Arc;

/// Loads a JSON array of trades into the store, in file order.
pub struct ImportUseCase {
    trades: TradeUseCase,
}

impl ImportUseCase {
    pub fn new(repo: Arc<dyn TradeRepository>) -> Self {
        Self {
            trades: TradeUseCase::new(repo),
        }
    }

    pub fn from_file(&self, path: &Path) -> Result<usize, DomainError> {
        let raw = std::fs::read_to_string(path)?;
        let count = self.from_json(&raw)?;
        tracing::info!(path = %path.display(), count, "imported seed trades");
        Ok(count)
    }

    /// Stops at the first bad record; records before it stay stored.
    pub fn from_json(&self, raw: &str) -> Result<usize, DomainError> {
        let records: Vec<serde_json::Value> = serde_json::from_str(raw)
            .map_err(|e| DomainError::Parse(format!("seed must be a JSON array of trades: {e}")))?;

        let total = records.len();
        for (index, record) in records.into_iter().enumerate() {
            serde_json::from_value::<NewTrade>(record)
                .map_err(|e| DomainError::Parse(e.to_string()))
                .and_then(|input| self.trades.create(input))
                .map_err(|e| e.context(format!("record {index}")))?;
        }
        Ok(total)
    }
}
