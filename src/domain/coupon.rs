//! Storefront coupon codes.
//!
//! Coupons are a fixed table of percentage discounts applied to the cart
//! subtotal. They are independent of the promotions managed from the
//! dashboard.

use rust_decimal::Decimal;
use serde::Serialize;

use super::error::DomainError;

/// A coupon code and the fraction of the subtotal it takes off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Coupon {
    pub code: &'static str,
    pub rate: Decimal,
    pub description: &'static str,
}

const COUPONS: [Coupon; 5] = [
    Coupon {
        code: "FIRST20",
        rate: Decimal::from_parts(20, 0, 0, false, 2),
        description: "20% off your first order",
    },
    Coupon {
        code: "WEEKEND",
        rate: Decimal::from_parts(15, 0, 0, false, 2),
        description: "15% weekend discount",
    },
    Coupon {
        code: "LUNCH",
        rate: Decimal::from_parts(10, 0, 0, false, 2),
        description: "10% lunch combo",
    },
    Coupon {
        code: "FAMILY15",
        rate: Decimal::from_parts(15, 0, 0, false, 2),
        description: "15% family feast",
    },
    Coupon {
        code: "AREA51",
        rate: Decimal::from_parts(25, 0, 0, false, 2),
        description: "25% special discount",
    },
];

impl Coupon {
    /// Every known coupon.
    #[must_use]
    pub fn all() -> &'static [Coupon] {
        &COUPONS
    }

    /// Find a coupon by code, ignoring case and surrounding whitespace.
    ///
    /// # Errors
    /// Returns [`DomainError::BlankCoupon`] for an empty code and
    /// [`DomainError::InvalidCoupon`] for an unknown one.
    pub fn lookup(code: &str) -> Result<&'static Coupon, DomainError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(DomainError::BlankCoupon);
        }
        let wanted = code.to_ascii_uppercase();
        COUPONS
            .iter()
            .find(|c| c.code == wanted)
            .ok_or_else(|| DomainError::InvalidCoupon(code.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn lookup_is_case_insensitive_and_trimmed() {
        let coupon = Coupon::lookup("  first20 ").unwrap();
        assert_eq!(coupon.code, "FIRST20");
        assert_eq!(coupon.rate, dec!(0.20));
    }

    #[test]
    fn every_code_has_its_rate() {
        let expected = [
            ("FIRST20", dec!(0.20)),
            ("WEEKEND", dec!(0.15)),
            ("LUNCH", dec!(0.10)),
            ("FAMILY15", dec!(0.15)),
            ("AREA51", dec!(0.25)),
        ];
        for (code, rate) in expected {
            assert_eq!(Coupon::lookup(code).unwrap().rate, rate, "{code}");
        }
        assert_eq!(Coupon::all().len(), expected.len());
    }

    #[test]
    fn blank_and_unknown_codes_are_rejected() {
        assert_eq!(Coupon::lookup(""), Err(DomainError::BlankCoupon));
        assert_eq!(
            Coupon::lookup("FREEFOOD"),
            Err(DomainError::InvalidCoupon("FREEFOOD".into()))
        );
    }
}
