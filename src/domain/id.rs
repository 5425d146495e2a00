//! Domain identifier types with proper encapsulation.
//!
//! Every row is keyed by a UUID v4 rendered as a string. Each table gets its
//! own newtype so a `CategoryId` can never be passed where a `MenuItemId` is
//! expected.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        ///
        /// Generated as UUID v4 for new rows, or constructed from an existing
        /// string when loaded from storage or a request path.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new identifier with a generated UUID.
            #[must_use]
            pub fn new() -> Self {
                Self(uuid::Uuid::new_v4().to_string())
            }

            /// Get the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

entity_id!(
    /// Identifier of an admin role.
    RoleId
);
entity_id!(
    /// Identifier of a dashboard (staff) account.
    AdminUserId
);
entity_id!(
    /// Identifier of a storefront customer.
    CustomerId
);
entity_id!(
    /// Identifier of a menu category.
    CategoryId
);
entity_id!(
    /// Identifier of a menu item.
    MenuItemId
);
entity_id!(
    /// Identifier of a placed order.
    OrderId
);
entity_id!(
    /// Identifier of a single line of an order.
    OrderItemId
);
entity_id!(
    /// Identifier of a promotion.
    PromotionId
);
entity_id!(
    /// Identifier of a promotion-to-menu-item link.
    PromotionItemId
);
entity_id!(
    /// Identifier of a storefront banner.
    BannerId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        let a = CategoryId::new();
        let b = CategoryId::new();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 36);
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let id = MenuItemId::from("item-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"item-1\"");

        let back: MenuItemId = serde_json::from_str("\"item-1\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn display_matches_inner_value() {
        let id = OrderId::from("abc".to_string());
        assert_eq!(id.to_string(), "abc");
    }
}
