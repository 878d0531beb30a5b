//! Domain error model.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// A single validation problem, described by a human-readable message.
///
/// Errors are immutable once built. A sequence of them keeps the order in which
/// the rules discovered each problem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Error {
    message: String,
}

impl Error {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Domain-level error.
///
/// Only deterministic business failures live here. Persistence and transport
/// failures belong to the layers that own those collaborators.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or more rules were violated. `errors` keeps discovery order.
    #[error("{message}")]
    Validation { message: String, errors: Vec<Error> },

    /// A lookup by identifier produced nothing.
    #[error("{message}")]
    NotFound { message: String },
}

impl DomainError {
    pub fn validation(message: impl Into<String>, errors: Vec<Error>) -> Self {
        Self::Validation {
            message: message.into(),
            errors,
        }
    }

    /// Validation failure carrying a single error; the summary is the error's own message.
    pub fn from_error(error: Error) -> Self {
        Self::from_errors(vec![error])
    }

    /// Validation failure whose summary is taken from the first error.
    pub fn from_errors(errors: Vec<Error>) -> Self {
        let message = errors
            .first()
            .map(|e| e.message().to_string())
            .unwrap_or_else(|| "validation failed".to_string());
        Self::Validation { message, errors }
    }

    /// `"{kind} with ID {id} was not found"`.
    pub fn not_found(kind: &str, id: impl fmt::Display) -> Self {
        Self::NotFound {
            message: format!("{kind} with ID {id} was not found"),
        }
    }

    /// Errors carried by a validation failure; empty for every other kind.
    pub fn errors(&self) -> &[Error] {
        match self {
            DomainError::Validation { errors, .. } => errors,
            DomainError::NotFound { .. } => &[],
        }
    }

    pub fn first_error(&self) -> Option<&Error> {
        self.errors().first()
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound { .. })
    }
}
