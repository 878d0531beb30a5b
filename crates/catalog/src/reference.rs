//! Reference reconciliation: checking that claimed foreign identifiers exist.

use std::collections::HashSet;

use catalog_core::validation::ValidationHandler;
use catalog_core::{DomainError, Error, Identifier};

use crate::category::CategoryId;

/// Claimed ids absent from `confirmed`, in claimed order.
///
/// Duplicates in `claimed` are kept: `[A, B, A]` against `[B]` yields `[A, A]`.
pub fn missing_ids<Id: Identifier>(claimed: &[Id], confirmed: &[Id]) -> Vec<Id> {
    let confirmed: HashSet<&Id> = confirmed.iter().collect();
    claimed
        .iter()
        .filter(|id| !confirmed.contains(id))
        .cloned()
        .collect()
}

/// Verify `claimed` against an existence oracle and report what is missing.
///
/// An empty `claimed` list returns immediately without consulting the oracle.
/// Otherwise at most one error is appended to `handler`:
/// `"Some {label} could not be found: {id1}, {id2}"`. Oracle failures are
/// returned unchanged.
pub fn reconcile<Id, E, F>(
    label: &str,
    claimed: &[Id],
    exists_by_ids: F,
    handler: &mut dyn ValidationHandler,
) -> Result<(), E>
where
    Id: Identifier,
    F: FnOnce(&[Id]) -> Result<Vec<Id>, E>,
    E: From<DomainError>,
{
    if claimed.is_empty() {
        return Ok(());
    }

    let confirmed = exists_by_ids(claimed)?;
    let missing = missing_ids(claimed, &confirmed);
    if missing.is_empty() {
        return Ok(());
    }

    let joined = missing
        .iter()
        .map(Identifier::value)
        .collect::<Vec<_>>()
        .join(", ");
    tracing::debug!(label, missing = missing.len(), "unresolved references");
    handler.append(Error::new(format!("Some {label} could not be found: {joined}")))?;
    Ok(())
}

/// [`reconcile`] for a genre's category references.
pub fn reconcile_categories<E, F>(
    claimed: &[CategoryId],
    exists_by_ids: F,
    handler: &mut dyn ValidationHandler,
) -> Result<(), E>
where
    F: FnOnce(&[CategoryId]) -> Result<Vec<CategoryId>, E>,
    E: From<DomainError>,
{
    reconcile("categories", claimed, exists_by_ids, handler)
}
