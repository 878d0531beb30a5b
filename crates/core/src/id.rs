//! Strongly-typed identifiers used across the domain.
//!
//! Every aggregate gets its own identifier newtype over an opaque string, so a
//! `GenreId` can never be passed where a `CategoryId` is expected.

use core::fmt::{Debug, Display};
use core::hash::Hash;

use uuid::Uuid;

/// Common surface of every aggregate identifier.
pub trait Identifier: Clone + Eq + Hash + Debug + Display + Send + Sync {
    /// The raw string value.
    fn value(&self) -> &str;
}

/// Generate a fresh identifier value.
///
/// Uses UUIDv7 (time-ordered), rendered lowercase with dashes. Prefer passing
/// IDs explicitly in tests for determinism.
pub fn generate() -> String {
    Uuid::now_v7().to_string()
}

/// Declare a string-backed identifier newtype implementing [`Identifier`].
///
/// The declaring crate must depend on `serde`.
#[macro_export]
macro_rules! string_id {
    ($(#[$meta:meta])* $vis:vis struct $t:ident;) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(transparent)]
        $vis struct $t(String);

        impl $t {
            /// Create a new, never-before-used identifier.
            pub fn unique() -> Self {
                Self($crate::id::generate())
            }

            pub fn from_value(value: impl Into<String>) -> Self {
                Self(value.into())
            }
        }

        impl $crate::id::Identifier for $t {
            fn value(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $t {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}
