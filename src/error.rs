use thiserror::Error;

/// Convenience alias for results produced by the analytics components.
pub type CoreResult<T> = Result<T, CoreError>;

/// Recoverable failures reported by the analytics components.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A search found no record matching `query`.
    #[error("no record matches '{query}'")]
    NotFound { query: String },
    /// Removal was attempted on an empty ledger.
    #[error("ledger is empty")]
    Empty,
    /// An argument was outside the accepted domain.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl CoreError {
    pub fn not_found(query: impl Into<String>) -> Self {
        Self::NotFound {
            query: query.into(),
        }
    }

    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput(reason.into())
    }
}
