//! Domain error model.

use thiserror::Error;

/// Result type used across the stock domain.
pub type StockResult<T> = Result<T, StockError>;

/// Domain-level error for stock operations.
///
/// Keep this focused on deterministic business failures (duplicates, bounds,
/// lookups). Storage failures cross into it via `Repository`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StockError {
    /// A beer with the same name is already registered.
    #[error("beer '{0}' is already registered")]
    AlreadyRegistered(String),

    /// The requested beer does not exist.
    #[error("beer not found")]
    NotFound,

    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// Incrementing would push the quantity past the max capacity.
    #[error("stock of {current} plus {amount} exceeds the max capacity of {max}")]
    StockExceeded { current: u64, amount: u64, max: u64 },

    /// Decrementing would push the quantity below zero.
    #[error("stock of {current} minus {amount} would fall below zero")]
    InsufficientStock { current: u64, amount: u64 },

    /// The repository collaborator failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl StockError {
    pub fn already_registered(name: impl Into<String>) -> Self {
        Self::AlreadyRegistered(name.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}

/// Error reported by repository implementations at the storage boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The backing store rejected or failed the operation.
    #[error("storage failure: {0}")]
    Storage(String),

    /// A stored record could not be mapped back to the domain model.
    #[error("corrupt record: {0}")]
    Data(String),
}
