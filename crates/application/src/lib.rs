//! Application layer: use cases orchestrating catalog aggregates and their gateways.
//!
//! Each use case builds or loads an aggregate, lets it validate itself, and only
//! then hands it to a persistence gateway. Gateways are traits so the same use
//! cases run against in-memory stores in tests and real stores in production.

pub mod cast_member;
pub mod category;
pub mod error;
pub mod gateway;
pub mod genre;

#[cfg(test)]
mod testing;

pub use error::{GatewayError, UseCaseError, UseCaseResult};
pub use gateway::{CastMemberGateway, CategoryGateway, GenreGateway};
