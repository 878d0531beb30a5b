//! `catalog-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the validation error model, the error-collection strategies, identifiers and
//! the search/pagination value objects exchanged with persistence.

pub mod aggregate;
pub mod clock;
pub mod error;
pub mod id;
pub mod query;
pub mod validation;

pub use aggregate::AggregateRoot;
pub use error::{DomainError, DomainResult, Error};
pub use id::Identifier;
pub use query::{Pagination, SearchQuery, SortDirection};
pub use validation::{FailFastHandler, Notification, ValidationHandler};
