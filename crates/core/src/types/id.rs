//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>`, `From<&str>`, `AsRef<str>` and `Borrow<str>` implementations
///
/// # Example
///
/// ```rust
/// # use beltline_core::define_id;
/// define_id!(SkuId);
/// define_id!(LookbookId);
///
/// let sku = SkuId::new("oxford-white-m");
/// let lookbook = LookbookId::new("oxford-white-m");
/// assert_eq!(sku.as_str(), lookbook.as_str());
///
/// // These are different types, so this won't compile:
/// // let _: SkuId = lookbook;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl ::core::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ProductId);
define_id!(OrderNumber);

impl OrderNumber {
    /// Prefix shown on confirmation screens.
    pub const PREFIX: &'static str = "BL-";

    /// Generate a fresh, random order number such as `BL-3F2A9C0D41B7`.
    #[must_use]
    pub fn generate() -> Self {
        let raw = uuid::Uuid::new_v4().simple().to_string().to_uppercase();
        let short: String = raw.chars().take(12).collect();
        Self(format!("{}{short}", Self::PREFIX))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_product_id_display_and_str() {
        let id = ProductId::new("7");
        assert_eq!(id.as_str(), "7");
        assert_eq!(id.to_string(), "7");
        assert_eq!(ProductId::from("7"), id);
    }

    #[test]
    fn test_product_id_serde_is_transparent() {
        let ids = vec![ProductId::new("1"), ProductId::new("2")];
        let json = serde_json::to_string(&ids).unwrap();
        assert_eq!(json, r#"["1","2"]"#);

        let parsed: Vec<ProductId> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ids);
    }

    #[test]
    fn test_product_id_borrow_lookup() {
        let set: HashSet<ProductId> = [ProductId::new("3")].into_iter().collect();
        assert!(set.contains("3"));
        assert!(!set.contains("4"));
    }

    #[test]
    fn test_order_number_shape() {
        let number = OrderNumber::generate();
        assert!(number.as_str().starts_with(OrderNumber::PREFIX));
        assert_eq!(number.as_str().len(), OrderNumber::PREFIX.len() + 12);
        assert_ne!(number, OrderNumber::generate());
    }
}
