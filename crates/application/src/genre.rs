//! Genre use cases.
//!
//! Create and update reconcile the claimed category ids before touching the
//! aggregate, so a single report lists the missing references first and the
//! field problems after.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use catalog_core::{
    AggregateRoot, DomainError, Notification, Pagination, SearchQuery, ValidationHandler,
};
use catalog_domain::{CategoryId, Genre, GenreId, reconcile_categories};

use crate::error::{UseCaseError, UseCaseResult};
use crate::gateway::{CategoryGateway, GenreGateway};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateGenreCommand {
    pub name: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub categories: Vec<CategoryId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateGenreCommand {
    pub id: GenreId,
    pub name: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
    /// `None` clears the genre's categories.
    #[serde(default)]
    pub categories: Option<Vec<CategoryId>>,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreOutput {
    pub id: GenreId,
    pub name: String,
    pub is_active: bool,
    pub categories: Vec<CategoryId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<&Genre> for GenreOutput {
    fn from(genre: &Genre) -> Self {
        Self {
            id: genre.id().clone(),
            name: genre.name().to_string(),
            is_active: genre.is_active(),
            categories: genre.categories().to_vec(),
            created_at: genre.created_at(),
            updated_at: genre.updated_at(),
            deleted_at: genre.deleted_at(),
        }
    }
}

impl From<Genre> for GenreOutput {
    fn from(genre: Genre) -> Self {
        Self::from(&genre)
    }
}

/// Check `claimed` against the category gateway, recording misses in `notification`.
fn validate_categories<C: CategoryGateway>(
    categories: &C,
    claimed: &[CategoryId],
    notification: &mut Notification,
) -> UseCaseResult<()> {
    reconcile_categories(
        claimed,
        |ids| categories.exists_by_ids(ids).map_err(UseCaseError::from),
        notification,
    )
}

pub struct CreateGenre<G, C> {
    genres: G,
    categories: C,
}

impl<G: GenreGateway, C: CategoryGateway> CreateGenre<G, C> {
    pub fn new(genres: G, categories: C) -> Self {
        Self { genres, categories }
    }

    #[tracing::instrument(skip(self, command), fields(categories = command.categories.len()))]
    pub fn execute(&self, command: CreateGenreCommand) -> UseCaseResult<GenreOutput> {
        let mut notification = Notification::new();
        validate_categories(&self.categories, &command.categories, &mut notification)?;

        let genre = notification.capture(|| Genre::new_genre(command.name, command.active));
        let mut genre = match genre {
            Some(genre) if !notification.has_errors() => genre,
            _ => {
                tracing::warn!(errors = notification.errors().len(), "genre rejected");
                return Err(DomainError::validation(
                    "Could not create Aggregate Genre",
                    notification.into_errors(),
                )
                .into());
            }
        };

        genre.add_categories(command.categories);
        let created = self.genres.create(genre)?;
        tracing::info!(id = %created.id(), "genre created");
        Ok(GenreOutput::from(created))
    }
}

pub struct UpdateGenre<G, C> {
    genres: G,
    categories: C,
}

impl<G: GenreGateway, C: CategoryGateway> UpdateGenre<G, C> {
    pub fn new(genres: G, categories: C) -> Self {
        Self { genres, categories }
    }

    #[tracing::instrument(skip(self, command), fields(id = %command.id))]
    pub fn execute(&self, command: UpdateGenreCommand) -> UseCaseResult<GenreOutput> {
        let UpdateGenreCommand {
            id,
            name,
            active,
            categories,
        } = command;

        let mut genre = self
            .genres
            .find_by_id(&id)?
            .ok_or_else(|| DomainError::not_found(Genre::KIND, &id))?;

        let mut notification = Notification::new();
        validate_categories(
            &self.categories,
            categories.as_deref().unwrap_or_default(),
            &mut notification,
        )?;
        notification.capture(|| genre.update(name, active, categories).map(|_| ()));

        if notification.has_errors() {
            tracing::warn!(errors = notification.errors().len(), "genre update rejected");
            return Err(DomainError::validation(
                format!("Could not update Aggregate Genre {id}"),
                notification.into_errors(),
            )
            .into());
        }

        let stored = self.genres.update(genre)?;
        tracing::info!("genre updated");
        Ok(GenreOutput::from(stored))
    }
}

pub struct DeleteGenre<G> {
    genres: G,
}

impl<G: GenreGateway> DeleteGenre<G> {
    pub fn new(genres: G) -> Self {
        Self { genres }
    }

    #[tracing::instrument(skip(self))]
    pub fn execute(&self, id: &GenreId) -> UseCaseResult<()> {
        self.genres.delete_by_id(id)?;
        tracing::info!("genre deleted");
        Ok(())
    }
}

pub struct GetGenreById<G> {
    genres: G,
}

impl<G: GenreGateway> GetGenreById<G> {
    pub fn new(genres: G) -> Self {
        Self { genres }
    }

    pub fn execute(&self, id: &GenreId) -> UseCaseResult<GenreOutput> {
        self.genres
            .find_by_id(id)?
            .map(GenreOutput::from)
            .ok_or_else(|| DomainError::not_found(Genre::KIND, id).into())
    }
}

pub struct ListGenres<G> {
    genres: G,
}

impl<G: GenreGateway> ListGenres<G> {
    pub fn new(genres: G) -> Self {
        Self { genres }
    }

    pub fn execute(&self, query: &SearchQuery) -> UseCaseResult<Pagination<GenreOutput>> {
        Ok(self.genres.find_all(query)?.map(GenreOutput::from))
    }
}
