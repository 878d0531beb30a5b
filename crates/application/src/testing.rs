//! Hand-rolled gateway stubs for use-case tests.

use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use catalog_core::{AggregateRoot, Pagination, SearchQuery};
use catalog_domain::{CastMember, CastMemberId, Category, CategoryId, Genre, GenreId};

use crate::error::GatewayError;
use crate::gateway::{CastMemberGateway, CategoryGateway, GenreGateway};

/// Vec-backed store; every call fails with `Unavailable` when `failure` is set.
#[derive(Debug)]
pub struct StubStore<T> {
    items: RwLock<Vec<T>>,
    failure: Option<String>,
}

impl<T> Default for StubStore<T> {
    fn default() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
            failure: None,
        }
    }
}

impl<T: AggregateRoot + Clone> StubStore<T> {
    fn failing(reason: &str) -> Self {
        Self {
            items: RwLock::new(Vec::new()),
            failure: Some(reason.to_string()),
        }
    }

    fn check(&self) -> Result<(), GatewayError> {
        match &self.failure {
            Some(reason) => Err(GatewayError::Unavailable(reason.clone())),
            None => Ok(()),
        }
    }

    fn stored(&self) -> Vec<T> {
        self.items.read().unwrap().clone()
    }

    fn upsert(&self, item: T) -> Result<T, GatewayError> {
        self.check()?;
        let mut items = self.items.write().unwrap();
        items.retain(|existing| existing.id() != item.id());
        items.push(item.clone());
        Ok(item)
    }

    fn delete(&self, id: &T::Id) -> Result<(), GatewayError> {
        self.check()?;
        self.items.write().unwrap().retain(|existing| existing.id() != id);
        Ok(())
    }

    fn find(&self, id: &T::Id) -> Result<Option<T>, GatewayError> {
        self.check()?;
        Ok(self.stored().into_iter().find(|item| item.id() == id))
    }

    fn all(&self, query: &SearchQuery) -> Result<Pagination<T>, GatewayError> {
        self.check()?;
        let items = self.stored();
        Ok(Pagination::new(query.page, query.per_page, items.len() as u64, items))
    }
}

#[derive(Debug, Default)]
pub struct StubCategories {
    store: StubStore<Category>,
    exists_calls: AtomicUsize,
}

impl StubCategories {
    pub fn failing(reason: &str) -> Self {
        Self {
            store: StubStore::failing(reason),
            exists_calls: AtomicUsize::new(0),
        }
    }

    pub fn stored(&self) -> Vec<Category> {
        self.store.stored()
    }

    pub fn exists_calls(&self) -> usize {
        self.exists_calls.load(Ordering::SeqCst)
    }
}

impl CategoryGateway for StubCategories {
    fn create(&self, category: Category) -> Result<Category, GatewayError> {
        self.store.upsert(category)
    }

    fn update(&self, category: Category) -> Result<Category, GatewayError> {
        self.store.upsert(category)
    }

    fn delete_by_id(&self, id: &CategoryId) -> Result<(), GatewayError> {
        self.store.delete(id)
    }

    fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, GatewayError> {
        self.store.find(id)
    }

    fn find_all(&self, query: &SearchQuery) -> Result<Pagination<Category>, GatewayError> {
        self.store.all(query)
    }

    fn exists_by_ids(&self, ids: &[CategoryId]) -> Result<Vec<CategoryId>, GatewayError> {
        self.exists_calls.fetch_add(1, Ordering::SeqCst);
        self.store.check()?;
        let stored = self.stored();
        Ok(ids
            .iter()
            .filter(|id| stored.iter().any(|c| c.id() == *id))
            .cloned()
            .collect())
    }
}

#[derive(Debug, Default)]
pub struct StubGenres {
    store: StubStore<Genre>,
}

impl StubGenres {
    pub fn failing(reason: &str) -> Self {
        Self {
            store: StubStore::failing(reason),
        }
    }

    pub fn stored(&self) -> Vec<Genre> {
        self.store.stored()
    }
}

impl GenreGateway for StubGenres {
    fn create(&self, genre: Genre) -> Result<Genre, GatewayError> {
        self.store.upsert(genre)
    }

    fn update(&self, genre: Genre) -> Result<Genre, GatewayError> {
        self.store.upsert(genre)
    }

    fn delete_by_id(&self, id: &GenreId) -> Result<(), GatewayError> {
        self.store.delete(id)
    }

    fn find_by_id(&self, id: &GenreId) -> Result<Option<Genre>, GatewayError> {
        self.store.find(id)
    }

    fn find_all(&self, query: &SearchQuery) -> Result<Pagination<Genre>, GatewayError> {
        self.store.all(query)
    }
}

#[derive(Debug, Default)]
pub struct StubCastMembers {
    store: StubStore<CastMember>,
}

impl StubCastMembers {
    pub fn stored(&self) -> Vec<CastMember> {
        self.store.stored()
    }
}

impl CastMemberGateway for StubCastMembers {
    fn create(&self, member: CastMember) -> Result<CastMember, GatewayError> {
        self.store.upsert(member)
    }

    fn update(&self, member: CastMember) -> Result<CastMember, GatewayError> {
        self.store.upsert(member)
    }

    fn delete_by_id(&self, id: &CastMemberId) -> Result<(), GatewayError> {
        self.store.delete(id)
    }

    fn find_by_id(&self, id: &CastMemberId) -> Result<Option<CastMember>, GatewayError> {
        self.store.find(id)
    }

    fn find_all(&self, query: &SearchQuery) -> Result<Pagination<CastMember>, GatewayError> {
        self.store.all(query)
    }
}
