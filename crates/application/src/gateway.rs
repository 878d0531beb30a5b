//! Persistence gateways consumed by the use cases.
//!
//! Gateways receive aggregates that already passed self-validation and either
//! persist them or fail with a [`GatewayError`].

use std::sync::Arc;

use catalog_core::{Pagination, SearchQuery};
use catalog_domain::{CastMember, CastMemberId, Category, CategoryId, Genre, GenreId};

use crate::error::GatewayError;

pub trait CategoryGateway: Send + Sync {
    fn create(&self, category: Category) -> Result<Category, GatewayError>;
    fn update(&self, category: Category) -> Result<Category, GatewayError>;
    fn delete_by_id(&self, id: &CategoryId) -> Result<(), GatewayError>;
    fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, GatewayError>;
    fn find_all(&self, query: &SearchQuery) -> Result<Pagination<Category>, GatewayError>;
    /// Subset of `ids` that are stored, in request order.
    fn exists_by_ids(&self, ids: &[CategoryId]) -> Result<Vec<CategoryId>, GatewayError>;
}

pub trait GenreGateway: Send + Sync {
    fn create(&self, genre: Genre) -> Result<Genre, GatewayError>;
    fn update(&self, genre: Genre) -> Result<Genre, GatewayError>;
    fn delete_by_id(&self, id: &GenreId) -> Result<(), GatewayError>;
    fn find_by_id(&self, id: &GenreId) -> Result<Option<Genre>, GatewayError>;
    fn find_all(&self, query: &SearchQuery) -> Result<Pagination<Genre>, GatewayError>;
}

pub trait CastMemberGateway: Send + Sync {
    fn create(&self, member: CastMember) -> Result<CastMember, GatewayError>;
    fn update(&self, member: CastMember) -> Result<CastMember, GatewayError>;
    fn delete_by_id(&self, id: &CastMemberId) -> Result<(), GatewayError>;
    fn find_by_id(&self, id: &CastMemberId) -> Result<Option<CastMember>, GatewayError>;
    fn find_all(&self, query: &SearchQuery) -> Result<Pagination<CastMember>, GatewayError>;
}

impl<G> CategoryGateway for Arc<G>
where
    G: CategoryGateway + ?Sized,
{
    fn create(&self, category: Category) -> Result<Category, GatewayError> {
        (**self).create(category)
    }

    fn update(&self, category: Category) -> Result<Category, GatewayError> {
        (**self).update(category)
    }

    fn delete_by_id(&self, id: &CategoryId) -> Result<(), GatewayError> {
        (**self).delete_by_id(id)
    }

    fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, GatewayError> {
        (**self).find_by_id(id)
    }

    fn find_all(&self, query: &SearchQuery) -> Result<Pagination<Category>, GatewayError> {
        (**self).find_all(query)
    }

    fn exists_by_ids(&self, ids: &[CategoryId]) -> Result<Vec<CategoryId>, GatewayError> {
        (**self).exists_by_ids(ids)
    }
}

impl<G> GenreGateway for Arc<G>
where
    G: GenreGateway + ?Sized,
{
    fn create(&self, genre: Genre) -> Result<Genre, GatewayError> {
        (**self).create(genre)
    }

    fn update(&self, genre: Genre) -> Result<Genre, GatewayError> {
        (**self).update(genre)
    }

    fn delete_by_id(&self, id: &GenreId) -> Result<(), GatewayError> {
        (**self).delete_by_id(id)
    }

    fn find_by_id(&self, id: &GenreId) -> Result<Option<Genre>, GatewayError> {
        (**self).find_by_id(id)
    }

    fn find_all(&self, query: &SearchQuery) -> Result<Pagination<Genre>, GatewayError> {
        (**self).find_all(query)
    }
}

impl<G> CastMemberGateway for Arc<G>
where
    G: CastMemberGateway + ?Sized,
{
    fn create(&self, member: CastMember) -> Result<CastMember, GatewayError> {
        (**self).create(member)
    }

    fn update(&self, member: CastMember) -> Result<CastMember, GatewayError> {
        (**self).update(member)
    }

    fn delete_by_id(&self, id: &CastMemberId) -> Result<(), GatewayError> {
        (**self).delete_by_id(id)
    }

    fn find_by_id(&self, id: &CastMemberId) -> Result<Option<CastMember>, GatewayError> {
        (**self).find_by_id(id)
    }

    fn find_all(&self, query: &SearchQuery) -> Result<Pagination<CastMember>, GatewayError> {
        (**self).find_all(query)
    }
}
