//! Domain validation errors.
//!
//! These errors are returned when a request violates a rule owned by the
//! domain layer. Their display strings are the messages shown to API clients,
//! so they are written for people rather than for logs.
//!
//! # Examples
//!
//! ```
//! use area51::domain::error::DomainError;
//! use area51::domain::coupon::Coupon;
//!
//! let result = Coupon::lookup("   ");
//! assert!(matches!(result, Err(DomainError::BlankCoupon)));
//! assert_eq!(DomainError::BlankCoupon.to_string(), "Please enter a coupon code");
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that occur when domain rules are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or more required fields were missing or blank.
    ///
    /// Carries the complete client-facing message, e.g. `"Name is required"`.
    #[error("{0}")]
    Required(&'static str),

    /// A field had a value outside its accepted range or format.
    #[error("invalid value for {field}: {reason}")]
    InvalidValue {
        /// Name of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// Prices cannot be negative.
    #[error("price must not be negative, got {price}")]
    NegativePrice {
        /// The rejected price.
        price: Decimal,
    },

    #[error("Invalid order status: {0}")]
    UnknownOrderStatus(String),

    #[error("Invalid category type: {0}")]
    UnknownCategoryKind(String),

    #[error("Invalid promotion type: {0}")]
    UnknownPromotionKind(String),

    #[error("Your cart is empty")]
    EmptyCart,

    /// Cart line quantities must be within `1..=MAX_LINE_QUANTITY` at checkout.
    #[error("quantity must be between 1 and 999, got {quantity}")]
    InvalidQuantity {
        /// The rejected quantity.
        quantity: i64,
    },

    /// A cart referenced an item that cannot be ordered.
    #[error("{name} is not available")]
    UnavailableItem {
        /// Display name (or id when the item no longer exists).
        name: String,
    },

    #[error("Please enter a coupon code")]
    BlankCoupon,

    #[error("Invalid coupon code")]
    InvalidCoupon(String),

    #[error("Password does not meet security requirements")]
    WeakPassword,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Invalid file type. Only JPEG, PNG, WebP, and GIF are allowed.")]
    UnsupportedMediaType(String),

    #[error("File size exceeds {limit_mb}MB limit")]
    MediaTooLarge {
        /// Size of the rejected upload in bytes.
        size: u64,
        /// Configured limit in whole mebibytes.
        limit_mb: u64,
    },
}
