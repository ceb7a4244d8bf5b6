use crate::domain::error::DomainError;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND: &str = "0.0.0.0:8000";

/// Process settings read from the environment at startup.
///
/// - `TRADEBOOK_BIND`: listen address for `serve` (default `0.0.0.0:8000`)
/// - `TRADEBOOK_SEED`: JSON file of trades loaded before serving or querying
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub bind: SocketAddr,
    pub seed: Option<PathBuf>,
}

impl Settings {
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_vars(
            std::env::var("TRADEBOOK_BIND").ok(),
            std::env::var("TRADEBOOK_SEED").ok(),
        )
    }

    pub fn from_vars(bind: Option<String>, seed: Option<String>) -> Result<Self, DomainError> {
        let bind = bind.unwrap_or_else(|| DEFAULT_BIND.into());
        let bind = bind
            .parse()
            .map_err(|e| DomainError::InvalidInput(format!("bad bind address {bind}: {e}")))?;
        Ok(Self {
            bind,
            seed: seed.filter(|s| !s.trim().is_empty()).map(PathBuf::from),
        })
    }

    /// CLI flags win over environment values.
    pub fn with_overrides(mut self, bind: Option<SocketAddr>, seed: Option<PathBuf>) -> Self {
        if let Some(bind) = bind {
            self.bind = bind;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }
}
