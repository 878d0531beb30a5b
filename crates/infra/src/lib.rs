//! Infrastructure for the catalog: settings loading and in-memory gateways.
//!
//! The in-memory gateways back the use cases in tests and local runs; a
//! database-backed implementation would live next to them behind the same
//! gateway traits.

pub mod config;
pub mod in_memory;

mod integration_tests;

pub use config::{PaginationSettings, Settings};
pub use in_memory::{InMemoryCastMemberGateway, InMemoryCategoryGateway, InMemoryGenreGateway};
