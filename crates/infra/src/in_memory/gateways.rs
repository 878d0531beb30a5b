//! Gateway implementations over [`InMemoryStore`].

use catalog_application::{CastMemberGateway, CategoryGateway, GatewayError, GenreGateway};
use catalog_core::{AggregateRoot, Pagination, SearchQuery};
use catalog_domain::{CastMember, CastMemberId, Category, CategoryId, Genre, GenreId};

use super::search::{Searchable, search};
use super::store::{InMemoryStore, KeyValueStore, StoreError};

/// Aggregates of one kind keyed by id.
#[derive(Debug)]
struct Table<T: AggregateRoot> {
    rows: InMemoryStore<T::Id, T>,
}

impl<T: AggregateRoot> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: InMemoryStore::new(),
        }
    }
}

impl<T> Table<T>
where
    T: AggregateRoot + Searchable + Clone + Send + Sync + 'static,
    T::Id: 'static,
{
    fn create(&self, item: T) -> Result<T, GatewayError> {
        self.rows
            .insert(item.id().clone(), item.clone())
            .map_err(|err| Self::failure(err, item.id()))?;
        tracing::debug!(kind = T::KIND, id = %item.id(), "row inserted");
        Ok(item)
    }

    fn update(&self, item: T) -> Result<T, GatewayError> {
        self.rows
            .replace(item.id().clone(), item.clone())
            .map_err(|err| Self::failure(err, item.id()))?;
        Ok(item)
    }

    fn delete(&self, id: &T::Id) -> Result<(), GatewayError> {
        self.rows.remove(id).map_err(|err| Self::failure(err, id))
    }

    fn failure(err: StoreError, id: &T::Id) -> GatewayError {
        let kind = T::KIND;
        match err {
            StoreError::Exists => GatewayError::Conflict(format!("{kind} {id} already exists")),
            StoreError::Missing => GatewayError::Other(format!("{kind} {id} does not exist")),
            StoreError::Poisoned => GatewayError::Unavailable(err.to_string()),
        }
    }

    fn find(&self, id: &T::Id) -> Option<T> {
        self.rows.get(id)
    }

    fn find_all(&self, query: &SearchQuery) -> Pagination<T> {
        search(self.rows.list(), query)
    }

    fn existing(&self, ids: &[T::Id]) -> Vec<T::Id> {
        ids.iter().filter(|id| self.rows.contains(*id)).cloned().collect()
    }
}

#[derive(Debug, Default)]
pub struct InMemoryCategoryGateway {
    table: Table<Category>,
}

impl InMemoryCategoryGateway {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CategoryGateway for InMemoryCategoryGateway {
    fn create(&self, category: Category) -> Result<Category, GatewayError> {
        self.table.create(category)
    }

    fn update(&self, category: Category) -> Result<Category, GatewayError> {
        self.table.update(category)
    }

    fn delete_by_id(&self, id: &CategoryId) -> Result<(), GatewayError> {
        self.table.delete(id)
    }

    fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, GatewayError> {
        Ok(self.table.find(id))
    }

    fn find_all(&self, query: &SearchQuery) -> Result<Pagination<Category>, GatewayError> {
        Ok(self.table.find_all(query))
    }

    fn exists_by_ids(&self, ids: &[CategoryId]) -> Result<Vec<CategoryId>, GatewayError> {
        Ok(self.table.existing(ids))
    }
}

#[derive(Debug, Default)]
pub struct InMemoryGenreGateway {
    table: Table<Genre>,
}

impl InMemoryGenreGateway {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GenreGateway for InMemoryGenreGateway {
    fn create(&self, genre: Genre) -> Result<Genre, GatewayError> {
        self.table.create(genre)
    }

    fn update(&self, genre: Genre) -> Result<Genre, GatewayError> {
        self.table.update(genre)
    }

    fn delete_by_id(&self, id: &GenreId) -> Result<(), GatewayError> {
        self.table.delete(id)
    }

    fn find_by_id(&self, id: &GenreId) -> Result<Option<Genre>, GatewayError> {
        Ok(self.table.find(id))
    }

    fn find_all(&self, query: &SearchQuery) -> Result<Pagination<Genre>, GatewayError> {
        Ok(self.table.find_all(query))
    }
}

#[derive(Debug, Default)]
pub struct InMemoryCastMemberGateway {
    table: Table<CastMember>,
}

impl InMemoryCastMemberGateway {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CastMemberGateway for InMemoryCastMemberGateway {
    fn create(&self, member: CastMember) -> Result<CastMember, GatewayError> {
        self.table.create(member)
    }

    fn update(&self, member: CastMember) -> Result<CastMember, GatewayError> {
        self.table.update(member)
    }

    fn delete_by_id(&self, id: &CastMemberId) -> Result<(), GatewayError> {
        self.table.delete(id)
    }

    fn find_by_id(&self, id: &CastMemberId) -> Result<Option<CastMember>, GatewayError> {
        Ok(self.table.find(id))
    }

    fn find_all(&self, query: &SearchQuery) -> Result<Pagination<CastMember>, GatewayError> {
        Ok(self.table.find_all(query))
    }
}
