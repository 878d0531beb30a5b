//! Category use cases.
//!
//! Create and update are result-object flows: validation problems *and*
//! gateway failures on write come back as a [`Notification`] instead of an
//! error, so the caller always gets one complete report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use catalog_core::{
    AggregateRoot, DomainError, Notification, Pagination, SearchQuery, ValidationHandler,
};
use catalog_domain::{Category, CategoryId};

use crate::error::UseCaseResult;
use crate::gateway::CategoryGateway;

/// Either the stored category or the full list of problems.
pub type CategoryOutcome = Result<CategoryOutput, Notification>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCategoryCommand {
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCategoryCommand {
    pub id: CategoryId,
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOutput {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<&Category> for CategoryOutput {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id().clone(),
            name: category.name().to_string(),
            description: category.description().map(str::to_string),
            is_active: category.is_active(),
            created_at: category.created_at(),
            updated_at: category.updated_at(),
            deleted_at: category.deleted_at(),
        }
    }
}

impl From<Category> for CategoryOutput {
    fn from(category: Category) -> Self {
        Self::from(&category)
    }
}

pub struct CreateCategory<G> {
    gateway: G,
}

impl<G: CategoryGateway> CreateCategory<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    #[tracing::instrument(skip(self, command))]
    pub fn execute(&self, command: CreateCategoryCommand) -> CategoryOutcome {
        let mut notification = Notification::new();

        let Some(category) = notification
            .capture(|| Category::new_category(command.name, command.description, command.active))
        else {
            tracing::warn!(errors = notification.errors().len(), "category rejected");
            return Err(notification);
        };

        match notification.capture(|| self.gateway.create(category)) {
            Some(created) => {
                tracing::info!(id = %created.id(), "category created");
                Ok(CategoryOutput::from(created))
            }
            None => Err(notification),
        }
    }
}

pub struct UpdateCategory<G> {
    gateway: G,
}

impl<G: CategoryGateway> UpdateCategory<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// A missing category is fatal (outer `Err`); everything else is reported
    /// through the inner outcome.
    #[tracing::instrument(skip(self, command), fields(id = %command.id))]
    pub fn execute(&self, command: UpdateCategoryCommand) -> UseCaseResult<CategoryOutcome> {
        let mut category = self
            .gateway
            .find_by_id(&command.id)?
            .ok_or_else(|| DomainError::not_found(Category::KIND, &command.id))?;

        let mut notification = Notification::new();
        let updated = notification.capture(|| {
            category
                .update(command.name, command.description, command.active)
                .map(|_| ())
        });
        if updated.is_none() {
            tracing::warn!(errors = notification.errors().len(), "category update rejected");
            return Ok(Err(notification));
        }

        Ok(match notification.capture(|| self.gateway.update(category)) {
            Some(stored) => {
                tracing::info!("category updated");
                Ok(CategoryOutput::from(stored))
            }
            None => Err(notification),
        })
    }
}

pub struct DeleteCategory<G> {
    gateway: G,
}

impl<G: CategoryGateway> DeleteCategory<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Deleting an unknown id is not an error.
    #[tracing::instrument(skip(self))]
    pub fn execute(&self, id: &CategoryId) -> UseCaseResult<()> {
        self.gateway.delete_by_id(id)?;
        tracing::info!("category deleted");
        Ok(())
    }
}

pub struct GetCategoryById<G> {
    gateway: G,
}

impl<G: CategoryGateway> GetCategoryById<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub fn execute(&self, id: &CategoryId) -> UseCaseResult<CategoryOutput> {
        let category = self
            .gateway
            .find_by_id(id)?
            .ok_or_else(|| DomainError::not_found(Category::KIND, id))?;
        Ok(CategoryOutput::from(category))
    }
}

pub struct ListCategories<G> {
    gateway: G,
}

impl<G: CategoryGateway> ListCategories<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub fn execute(&self, query: &SearchQuery) -> UseCaseResult<Pagination<CategoryOutput>> {
        Ok(self.gateway.find_all(query)?.map(CategoryOutput::from))
    }
}
