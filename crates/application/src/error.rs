//! Application-level error model.

use thiserror::Error;

use catalog_core::DomainError;

/// Failure reported by a persistence gateway.
///
/// Never a validation problem: use cases treat these as fatal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The backing store could not be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The write conflicts with stored state (e.g. duplicate id on create).
    #[error("conflict: {0}")]
    Conflict(String),

    #[error("{0}")]
    Other(String),
}

/// Result type returned by use cases.
pub type UseCaseResult<T> = Result<T, UseCaseError>;

/// Everything a use case can fail with.
///
/// `Domain` carries either the full validation report or a not-found error;
/// `Gateway` carries an infrastructure failure unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UseCaseError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl UseCaseError {
    /// Errors of a validation failure; empty for every other kind.
    pub fn errors(&self) -> &[catalog_core::Error] {
        match self {
            UseCaseError::Domain(err) => err.errors(),
            UseCaseError::Gateway(_) => &[],
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, UseCaseError::Domain(err) if err.is_not_found())
    }
}
