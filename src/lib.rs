pub mod api;
pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::import::ImportUseCase;
use crate::application::query::QueryUseCase;
use crate::application::search::SearchUseCase;
use crate::application::trade::TradeUseCase;
use crate::domain::entities::trade::{NewTrade, Trade};
use crate::domain::error::DomainError;
use crate::domain::ports::trade_repository::{TradeFilter, TradeRepository};
use crate::infrastructure::memory::trade_store::InMemoryTradeStore;
use std::path::Path;
use std::sync::Arc;

/// The trade book: one store plus the use cases that read and write it.
///
/// Construct one at startup and share it (it is `Send + Sync`); every clone of
/// the inner repository handle points at the same trades.
pub struct TradeBook {
    trade_uc: TradeUseCase,
    search_uc: SearchUseCase,
    query_uc: QueryUseCase,
    import_uc: ImportUseCase,
}

impl TradeBook {
    pub fn new() -> Self {
        Self::with_repository(Arc::new(InMemoryTradeStore::new()))
    }

    pub fn with_repository(repo: Arc<dyn TradeRepository>) -> Self {
        Self {
            trade_uc: TradeUseCase::new(repo.clone()),
            search_uc: SearchUseCase::new(repo.clone()),
            query_uc: QueryUseCase::new(repo.clone()),
            import_uc: ImportUseCase::new(repo),
        }
    }

    // Delegating methods
    pub fn create(&self, input: NewTrade) -> Result<Trade, DomainError> {
        self.trade_uc.create(input)
    }

    pub fn get(&self, id: &str) -> Result<Trade, DomainError> {
        self.trade_uc.get(id)
    }

    pub fn search(&self, text: &str) -> Vec<Trade> {
        self.search_uc.execute(text)
    }

    pub fn filter(&self, filter: &TradeFilter) -> Result<Vec<Trade>, DomainError> {
        self.query_uc.execute(filter)
    }

    pub fn list(&self) -> Vec<Trade> {
        self.trade_uc.list()
    }

    pub fn count(&self) -> usize {
        self.trade_uc.count()
    }

    pub fn import_file(&self, path: &Path) -> Result<usize, DomainError> {
        self.import_uc.from_file(path)
    }

    pub fn import_json(&self, raw: &str) -> Result<usize, DomainError> {
        self.import_uc.from_json(raw)
    }
}

impl Default for TradeBook {
    fn default() -> Self {
        Self::new()
    }
}
