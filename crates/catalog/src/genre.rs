use chrono::{DateTime, Utc};

use catalog_core::validation::ValidationHandler;
use catalog_core::{AggregateRoot, DomainResult, clock, string_id};

use crate::category::CategoryId;
use crate::validator::Validator;

string_id! {
    /// Genre identifier.
    pub struct GenreId;
}

/// Aggregate root: Genre.
///
/// Holds an ordered list of category references. Duplicates are allowed here;
/// whether the referenced categories exist is checked by the caller through
/// [`crate::reference::reconcile_categories`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genre {
    id: GenreId,
    name: Option<String>,
    categories: Vec<CategoryId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl Genre {
    /// Build a brand-new genre with no categories and validate it.
    pub fn new_genre(name: Option<String>, active: bool) -> DomainResult<Self> {
        let now = clock::now();
        let genre = Self {
            id: GenreId::unique(),
            name,
            categories: Vec::new(),
            created_at: now,
            updated_at: now,
            deleted_at: if active { None } else { Some(now) },
        };
        genre.self_validate()?;
        Ok(genre)
    }

    /// Rebuild a genre from stored state. No validation is performed.
    pub fn with(
        id: GenreId,
        name: impl Into<String>,
        categories: Vec<CategoryId>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name: Some(name.into()),
            categories,
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

    pub fn categories(&self) -> &[CategoryId] {
        &self.categories
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

    pub fn activate(&mut self) -> &mut Self {
        self.deleted_at = None;
        self.updated_at = clock::now();
        self
    }

    pub fn deactivate(&mut self) -> &mut Self {
        let now = clock::now();
        if self.deleted_at.is_none() {
            self.deleted_at = Some(now);
        }
        self.updated_at = now;
        self
    }

    /// Replace name, active flag and categories, then re-validate.
    ///
    /// `None` categories are treated as an empty list. On failure `self` is left
    /// exactly as it was.
    pub fn update(
        &mut self,
        name: Option<String>,
        active: bool,
        categories: Option<Vec<CategoryId>>,
    ) -> DomainResult<&mut Self> {
        let mut next = self.clone();
        if active {
            next.activate();
        } else {
            next.deactivate();
        }
        next.name = name;
        next.categories = categories.unwrap_or_default();
        next.updated_at = clock::now();
        next.self_validate()?;

        *self = next;
        Ok(self)
    }

    pub fn add_category(&mut self, id: CategoryId) -> &mut Self {
        self.categories.push(id);
        self.updated_at = clock::now();
        self
    }

    /// Append every id in order. An empty list changes nothing.
    pub fn add_categories(&mut self, ids: Vec<CategoryId>) -> &mut Self {
        if ids.is_empty() {
            return self;
        }
        self.categories.extend(ids);
        self.updated_at = clock::now();
        self
    }

    /// Remove the first reference equal to `id`.
    pub fn remove_category(&mut self, id: &CategoryId) -> &mut Self {
        if let Some(pos) = self.categories.iter().position(|c| c == id) {
            self.categories.remove(pos);
        }
        self.updated_at = clock::now();
        self
    }

    pub fn remove_categories(&mut self, ids: &[CategoryId]) -> &mut Self {
        if ids.is_empty() {
            return self;
        }
        for id in ids {
            self.remove_category(id);
        }
        self
    }
}

impl AggregateRoot for Genre {
    type Id = GenreId;

    const KIND: &'static str = "Genre";

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn validate(&self, handler: &mut dyn ValidationHandler) -> DomainResult<()> {
        Validator::Genre(self).validate(handler)
    }
}
