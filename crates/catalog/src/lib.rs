//! Catalog domain module.
//!
//! Business rules for categories, genres and cast members, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage). Every aggregate
//! validates itself on construction and on every mutation of a validated field.

pub mod cast_member;
pub mod category;
pub mod genre;
pub mod reference;
pub mod validator;

pub use cast_member::{CastMember, CastMemberId, CastMemberType};
pub use category::{Category, CategoryId};
pub use genre::Genre;
pub use genre::GenreId;
pub use reference::{missing_ids, reconcile, reconcile_categories};
pub use validator::Validator;
