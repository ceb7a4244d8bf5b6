use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Trade already exists: {0}")]
    DuplicateTrade(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}


impl DomainError {
    /// Prefixes the message with `context`, keeping the variant.
    pub fn context(self, context: impl std::fmt::Display) -> Self {
        match self {
            DomainError::NotFound(m) => DomainError::NotFound(format!("{context}: {m}")),
            DomainError::InvalidInput(m) => DomainError::InvalidInput(format!("{context}: {m}")),
            DomainError::DuplicateTrade(m) => DomainError::DuplicateTrade(format!("{context}: {m}")),
            DomainError::Parse(m) => DomainError::Parse(format!("{context}: {m}")),
            DomainError::Io(e) => DomainError::Io(std::io::Error::new(e.kind(), format!("{context}: {e}"))),
        }
    }
}
