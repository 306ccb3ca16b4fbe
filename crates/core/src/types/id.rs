//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `i64` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `PartialOrd`, `Ord`, `Hash`
/// - Conversion methods: `new()`, `as_i64()`
/// - `From<i64>` and `Into<i64>` implementations
///
/// # Example
///
/// ```rust
/// # use code_brew_core::define_id;
/// define_id!(DrinkId);
/// define_id!(PostId);
///
/// let drink_id = DrinkId::new(1);
/// let post_id = PostId::new(1);
///
/// // These are different types, so this won't compile:
/// // let _: DrinkId = post_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Create a new ID from an i64 value.
            #[must_use]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the underlying i64 value.
            #[must_use]
            pub const fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(FavoriteId);
define_id!(ArticleId);
// Reserved for linking articles to a user identity; never populated today.
define_id!(AuthorId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_id_roundtrip_conversions() {
        let id = FavoriteId::new(1_700_000_000_123);
        assert_eq!(id.as_i64(), 1_700_000_000_123);
        assert_eq!(i64::from(id), 1_700_000_000_123);
        assert_eq!(FavoriteId::from(42), FavoriteId::new(42));
    }

    #[test]
    fn test_id_serializes_as_plain_number() {
        let json = serde_json::to_string(&FavoriteId::new(7)).unwrap();
        assert_eq!(json, "7");
        let parsed: FavoriteId = serde_json::from_str("7").unwrap();
        assert_eq!(parsed, FavoriteId::new(7));
    }

    #[test]
    fn test_id_ordering() {
        assert!(FavoriteId::new(1) < FavoriteId::new(2));
        assert_eq!(format!("{}", ArticleId::new(3)), "3");
    }
}
