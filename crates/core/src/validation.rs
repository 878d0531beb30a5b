//! Error-collection strategies.
//!
//! Rules are written once against [`ValidationHandler`] and the caller decides,
//! by picking the handler, whether it wants a complete report ([`Notification`])
//! or an immediate failure ([`FailFastHandler`]).

use serde::Serialize;

use crate::error::{DomainError, DomainResult, Error};

/// Sink for validation errors.
pub trait ValidationHandler {
    /// Record one error.
    ///
    /// Accumulating handlers always return `Ok`; fail-fast handlers return the
    /// error immediately as a [`DomainError::Validation`].
    fn append(&mut self, error: Error) -> DomainResult<()>;

    /// Take over every error already collected by `other`.
    fn append_all(&mut self, other: &dyn ValidationHandler) -> DomainResult<()>;

    /// Run `block`, routing any failure it returns through this handler.
    ///
    /// A [`DomainError::Validation`] contributes its own errors; any other
    /// failure contributes a single error built from its display message.
    /// Returns `Ok(None)` when an accumulating handler swallowed the failure.
    fn validate<T, E, F>(&mut self, block: F) -> DomainResult<Option<T>>
    where
        F: FnOnce() -> Result<T, E>,
        E: Into<anyhow::Error>,
        Self: Sized;

    /// Errors collected so far, in discovery order.
    fn errors(&self) -> &[Error];

    fn has_errors(&self) -> bool {
        !self.errors().is_empty()
    }

    fn first_error(&self) -> Option<&Error> {
        self.errors().first()
    }
}

/// Convert an arbitrary failure into the errors it should contribute.
fn errors_of(failure: anyhow::Error) -> Vec<Error> {
    match failure.downcast::<DomainError>() {
        Ok(DomainError::Validation { message, errors }) if errors.is_empty() => {
            vec![Error::new(message)]
        }
        Ok(DomainError::Validation { errors, .. }) => errors,
        Ok(other) => vec![Error::new(other.to_string())],
        Err(other) => vec![Error::new(other.to_string())],
    }
}

/// Accumulating handler: records every error and never fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Notification {
    errors: Vec<Error>,
}

impl Notification {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_error(error: Error) -> Self {
        Self {
            errors: vec![error],
        }
    }

    /// Infallible form of [`ValidationHandler::validate`].
    pub fn capture<T, E, F>(&mut self, block: F) -> Option<T>
    where
        F: FnOnce() -> Result<T, E>,
        E: Into<anyhow::Error>,
    {
        match block() {
            Ok(value) => Some(value),
            Err(failure) => {
                self.errors.extend(errors_of(failure.into()));
                None
            }
        }
    }

    pub fn push(&mut self, error: Error) -> &mut Self {
        self.errors.push(error);
        self
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    /// `Ok(())` when nothing was collected, otherwise a validation failure
    /// summarised by `message`.
    pub fn into_result(self, message: impl Into<String>) -> DomainResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(DomainError::validation(message, self.errors))
        }
    }
}

impl ValidationHandler for Notification {
    fn append(&mut self, error: Error) -> DomainResult<()> {
        self.errors.push(error);
        Ok(())
    }

    fn append_all(&mut self, other: &dyn ValidationHandler) -> DomainResult<()> {
        self.errors.extend_from_slice(other.errors());
        Ok(())
    }

    fn validate<T, E, F>(&mut self, block: F) -> DomainResult<Option<T>>
    where
        F: FnOnce() -> Result<T, E>,
        E: Into<anyhow::Error>,
    {
        Ok(self.capture(block))
    }

    fn errors(&self) -> &[Error] {
        &self.errors
    }
}

/// Fail-fast handler: the first error (or merge) becomes a failure.
///
/// It never accumulates, so [`ValidationHandler::errors`] is always empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FailFastHandler;

impl ValidationHandler for FailFastHandler {
    fn append(&mut self, error: Error) -> DomainResult<()> {
        Err(DomainError::from_error(error))
    }

    fn append_all(&mut self, other: &dyn ValidationHandler) -> DomainResult<()> {
        Err(DomainError::from_errors(other.errors().to_vec()))
    }

    fn validate<T, E, F>(&mut self, block: F) -> DomainResult<Option<T>>
    where
        F: FnOnce() -> Result<T, E>,
        E: Into<anyhow::Error>,
    {
        match block() {
            Ok(value) => Ok(Some(value)),
            Err(failure) => {
                let failure = failure.into();
                match failure.downcast::<DomainError>() {
                    Ok(err @ DomainError::Validation { .. }) => Err(err),
                    Ok(other) => Err(DomainError::from_error(Error::new(other.to_string()))),
                    Err(other) => Err(DomainError::from_error(Error::new(other.to_string()))),
                }
            }
        }
    }

    fn errors(&self) -> &[Error] {
        &[]
    }
}
