use chrono::{DateTime, Utc};

use catalog_core::validation::ValidationHandler;
use catalog_core::{AggregateRoot, DomainResult, clock, string_id};

use crate::validator::Validator;

string_id! {
    /// Category identifier.
    pub struct CategoryId;
}

/// Aggregate root: Category.
///
/// Active iff `deleted_at` is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    id: CategoryId,
    name: Option<String>,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl Category {
    /// Build a brand-new category and validate it.
    pub fn new_category(
        name: Option<String>,
        description: Option<String>,
        active: bool,
    ) -> DomainResult<Self> {
        let now = clock::now();
        let category = Self {
            id: CategoryId::unique(),
            name,
            description,
            created_at: now,
            updated_at: now,
            deleted_at: if active { None } else { Some(now) },
        };
        category.self_validate()?;
        Ok(category)
    }

    /// Rebuild a category from stored state. No validation is performed.
    pub fn with(
        id: CategoryId,
        name: impl Into<String>,
        description: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name: Some(name.into()),
            description,
            created_at,
            updated_at,
            deleted_at,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub(crate) fn name_value(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    /// Mark active. Always succeeds.
    pub fn activate(&mut self) -> &mut Self {
        self.deleted_at = None;
        self.updated_at = clock::now();
        self
    }

    /// Mark inactive. Keeps the original `deleted_at` when already inactive.
    pub fn deactivate(&mut self) -> &mut Self {
        let now = clock::now();
        if self.deleted_at.is_none() {
            self.deleted_at = Some(now);
        }
        self.updated_at = now;
        self
    }

    /// Replace name, description and active flag, then re-validate.
    ///
    /// On failure `self` is left exactly as it was.
    pub fn update(
        &mut self,
        name: Option<String>,
        description: Option<String>,
        active: bool,
    ) -> DomainResult<&mut Self> {
        let mut next = self.clone();
        if active {
            next.activate();
        } else {
            next.deactivate();
        }
        next.name = name;
        next.description = description;
        next.updated_at = clock::now();
        next.self_validate()?;

        *self = next;
        Ok(self)
    }
}

impl AggregateRoot for Category {
    type Id = CategoryId;

    const KIND: &'static str = "Category";

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn validate(&self, handler: &mut dyn ValidationHandler) -> DomainResult<()> {
        Validator::Category(self).validate(handler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::{DomainError, Error, FailFastHandler, Notification};
    use std::time::Duration;

    fn pause() {
        std::thread::sleep(Duration::from_millis(2));
    }

    fn filmes() -> Category {
        Category::new_category(
            Some("Filmes".to_string()),
            Some("A categoria mais assistida".to_string()),
            true,
        )
        .unwrap()
    }

    fn messages(err: &DomainError) -> Vec<&str> {
        err.errors().iter().map(Error::message).collect()
    }

    #[test]
    fn new_category_sets_fields_and_timestamps() {
        let category = filmes();

        assert!(!category.id().to_string().is_empty());
        assert_eq!(category.name(), "Filmes");
        assert_eq!(category.description(), Some("A categoria mais assistida"));
        assert!(category.is_active());
        assert_eq!(category.created_at(), category.updated_at());
        assert_eq!(category.deleted_at(), None);
    }

    #[test]
    fn new_inactive_category_has_deleted_at() {
        let category = Category::new_category(Some("Filmes".into()), None, false).unwrap();

        assert!(!category.is_active());
        assert_eq!(category.deleted_at(), Some(category.created_at()));
    }

    #[test]
    fn new_category_rejects_null_name() {
        let err = Category::new_category(None, None, true).unwrap_err();
        assert_eq!(messages(&err), vec!["'name' should not be null"]);
        assert_eq!(err.to_string(), "Failed to create a Aggregate Category");
    }

    #[test]
    fn new_category_rejects_blank_name() {
        let err = Category::new_category(Some("   ".into()), None, true).unwrap_err();
        assert_eq!(messages(&err), vec!["'name' should not be empty"]);
    }

    #[test]
    fn new_category_rejects_name_shorter_than_three_after_trim() {
        let err = Category::new_category(Some("Fi ".into()), None, true).unwrap_err();
        assert_eq!(
            messages(&err),
            vec!["'name' must be between 3 and 255 characters"]
        );
    }

    #[test]
    fn new_category_rejects_name_longer_than_255() {
        let err = Category::new_category(Some("x".repeat(256)), None, true).unwrap_err();
        assert_eq!(
            messages(&err),
            vec!["'name' must be between 3 and 255 characters"]
        );

        assert!(Category::new_category(Some("x".repeat(255)), None, true).is_ok());
    }

    #[test]
    fn valid_category_revalidates_clean() {
        let category = filmes();

        let mut notification = Notification::new();
        category.validate(&mut notification).unwrap();
        assert!(!notification.has_errors());

        category.validate(&mut FailFastHandler).unwrap();
    }

    #[test]
    fn deactivate_twice_keeps_first_timestamp() {
        let mut category = filmes();

        category.deactivate();
        let first = category.deleted_at();
        assert!(first.is_some());

        pause();
        category.deactivate();
        assert_eq!(category.deleted_at(), first);
        assert!(!category.is_active());
    }

    #[test]
    fn activate_after_deactivate_round_trips() {
        let mut category = filmes();
        let created_at = category.created_at();

        pause();
        category.deactivate();
        let deactivated_at = category.updated_at();

        pause();
        category.activate();

        assert!(category.is_active());
        assert_eq!(category.deleted_at(), None);
        assert_eq!(category.created_at(), created_at);
        assert!(category.updated_at() > deactivated_at);
    }

    #[test]
    fn update_replaces_fields_and_refreshes_updated_at() {
        let mut category = filmes();
        let before = category.clone();

        pause();
        category
            .update(Some("Series".into()), None, false)
            .unwrap();

        assert_eq!(category.id(), before.id());
        assert_eq!(category.name(), "Series");
        assert_eq!(category.description(), None);
        assert!(!category.is_active());
        assert_eq!(category.created_at(), before.created_at());
        assert!(category.updated_at() > before.updated_at());
    }

    #[test]
    fn failed_update_leaves_category_untouched() {
        let mut category = filmes();
        let before = category.clone();

        let err = category.update(Some(" ".into()), None, false).unwrap_err();

        assert_eq!(messages(&err), vec!["'name' should not be empty"]);
        assert_eq!(category, before);
    }

    #[test]
    fn with_rebuilds_without_new_identity() {
        let original = filmes();
        let copy = Category::with(
            original.id().clone(),
            original.name(),
            original.description().map(str::to_string),
            original.created_at(),
            original.updated_at(),
            original.deleted_at(),
        );

        assert_eq!(copy, original);
    }
}
