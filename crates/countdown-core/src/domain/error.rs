//! Domain Errors
//!
//! Every failure the core reports to its callers.

use thiserror::Error;

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Bad user input: empty title, unparsable date
    #[error("Invalid input: {0}")]
    Validation(String),
    /// Operation on an unknown countdown id
    #[error("Not found: {0}")]
    NotFound(String),
    /// Reorder sequence is not a permutation of the current ids
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
    /// Share token failed structural decoding
    #[error("Malformed share link: {0}")]
    MalformedToken(String),
    /// Share token decoded but held no usable countdowns
    #[error("No valid countdowns found in the shared link")]
    EmptyImport,
    /// Stored blob is corrupt or unparsable
    #[error("Failed to load saved countdowns: {0}")]
    PersistenceLoad(String),
}

impl DomainError {
    pub fn not_found(id: &str) -> Self {
        DomainError::NotFound(format!("countdown {}", id))
    }

    /// True for errors that abort only the import flow
    pub fn is_import_error(&self) -> bool {
        matches!(self, DomainError::MalformedToken(_) | DomainError::EmptyImport)
    }
}
