//! In-memory persistence for tests and local development.

pub mod gateways;
pub mod search;
pub mod store;

pub use gateways::{InMemoryCastMemberGateway, InMemoryCategoryGateway, InMemoryGenreGateway};
pub use search::Searchable;
pub use store::{InMemoryStore, KeyValueStore, StoreError};
