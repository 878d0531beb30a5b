//! Aggregate root trait for self-validating domain models.

use crate::error::DomainResult;
use crate::id::Identifier;
use crate::validation::{Notification, ValidationHandler};

/// Aggregate root marker + minimal interface.
///
/// An aggregate owns its rule set: `validate` reports every violated rule to the
/// handler it is given, and `self_validate` runs those rules against a fresh
/// [`Notification`] so that no invalid instance ever leaves a factory or a
/// mutation method.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Identifier;

    /// Name used in failure messages (e.g. `"Genre"`).
    const KIND: &'static str;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;

    /// Append one error per violated rule. Rules never short-circuit each other.
    fn validate(&self, handler: &mut dyn ValidationHandler) -> DomainResult<()>;

    /// Run every rule with an accumulating handler and fail with the full report.
    fn self_validate(&self) -> DomainResult<()> {
        let mut notification = Notification::new();
        self.validate(&mut notification)?;
        if notification.has_errors() {
            tracing::debug!(
                kind = Self::KIND,
                errors = notification.errors().len(),
                "aggregate failed self-validation"
            );
        }
        notification.into_result(format!("Failed to create a Aggregate {}", Self::KIND))
    }
}
