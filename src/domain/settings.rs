//! Restaurant profile and opening hours edited from the dashboard.
//!
//! These values describe the restaurant to customers. Checkout pricing is
//! driven by the server's configured checkout policy, not by this record.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::money::Money;

/// Opening window for one weekday, as `HH:MM` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHours {
    pub open: String,
    pub close: String,
    #[serde(default)]
    pub closed: bool,
}

impl Default for DayHours {
    fn default() -> Self {
        Self {
            open: "09:00".to_string(),
            close: "22:00".to_string(),
            closed: false,
        }
    }
}

fn parse_clock(field: &'static str, value: &str) -> Result<NaiveTime, DomainError> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|_| DomainError::InvalidValue {
        field,
        reason: format!("'{value}' is not a HH:MM time"),
    })
}

impl DayHours {
    fn validate(&self, day: &'static str) -> Result<(), DomainError> {
        let open = parse_clock(day, &self.open)?;
        let close = parse_clock(day, &self.close)?;
        if !self.closed && close <= open {
            return Err(DomainError::InvalidValue {
                field: day,
                reason: "closing time must be after opening time".to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpeningHours {
    pub monday: DayHours,
    pub tuesday: DayHours,
    pub wednesday: DayHours,
    pub thursday: DayHours,
    pub friday: DayHours,
    pub saturday: DayHours,
    pub sunday: DayHours,
}

impl OpeningHours {
    fn days(&self) -> [(&'static str, &DayHours); 7] {
        [
            ("monday", &self.monday),
            ("tuesday", &self.tuesday),
            ("wednesday", &self.wednesday),
            ("thursday", &self.thursday),
            ("friday", &self.friday),
            ("saturday", &self.saturday),
            ("sunday", &self.sunday),
        ]
    }
}

/// The restaurant's public profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestaurantSettings {
    pub name: String,
    pub description: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub opening_hours: OpeningHours,
    pub delivery_enabled: bool,
    pub delivery_fee: Money,
    pub minimum_order: Money,
    /// Percentage, e.g. `8.25`.
    pub tax_rate: Decimal,
    pub currency: String,
    pub timezone: String,
}

impl Default for RestaurantSettings {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            address: String::new(),
            phone: String::new(),
            email: String::new(),
            opening_hours: OpeningHours::default(),
            delivery_enabled: true,
            delivery_fee: Decimal::new(299, 2),
            minimum_order: Decimal::new(1500, 2),
            tax_rate: Decimal::new(825, 2),
            currency: "USD".to_string(),
            timezone: "America/New_York".to_string(),
        }
    }
}

impl RestaurantSettings {
    /// Check amounts, clock times and codes.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidValue`] naming the first bad field.
    pub fn validate(&self) -> Result<(), DomainError> {
        for (field, amount) in [
            ("delivery_fee", self.delivery_fee),
            ("minimum_order", self.minimum_order),
        ] {
            if amount < Decimal::ZERO {
                return Err(DomainError::InvalidValue {
                    field,
                    reason: "must not be negative".to_string(),
                });
            }
        }
        if self.tax_rate < Decimal::ZERO || self.tax_rate > Decimal::ONE_HUNDRED {
            return Err(DomainError::InvalidValue {
                field: "tax_rate",
                reason: "must be between 0 and 100".to_string(),
            });
        }
        let currency = self.currency.trim();
        if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(DomainError::InvalidValue {
                field: "currency",
                reason: "must be a three-letter ISO code".to_string(),
            });
        }
        if self.timezone.trim().is_empty() {
            return Err(DomainError::InvalidValue {
                field: "timezone",
                reason: "must not be empty".to_string(),
            });
        }
        for (day, hours) in self.opening_hours.days() {
            hours.validate(day)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn defaults_are_valid() {
        let settings = RestaurantSettings::default();
        assert_eq!(settings.delivery_fee, dec!(2.99));
        assert_eq!(settings.minimum_order, dec!(15.00));
        assert_eq!(settings.tax_rate, dec!(8.25));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let settings: RestaurantSettings =
            serde_json::from_str(r#"{"name":"Area 51 Diner","opening_hours":{"sunday":{"open":"10:00","close":"16:00"}}}"#)
                .unwrap();
        assert_eq!(settings.name, "Area 51 Diner");
        assert_eq!(settings.opening_hours.sunday.close, "16:00");
        assert_eq!(settings.opening_hours.monday, DayHours::default());
        assert_eq!(settings.currency, "USD");
    }

    #[test]
    fn closing_before_opening_is_rejected() {
        let mut settings = RestaurantSettings::default();
        settings.opening_hours.friday.close = "08:00".into();
        assert!(matches!(
            settings.validate(),
            Err(DomainError::InvalidValue { field: "friday", .. })
        ));

        settings.opening_hours.friday.closed = true;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn malformed_values_are_rejected() {
        let mut bad_clock = RestaurantSettings::default();
        bad_clock.opening_hours.monday.open = "9am".into();
        assert!(bad_clock.validate().is_err());

        let bad_tax = RestaurantSettings {
            tax_rate: dec!(120),
            ..RestaurantSettings::default()
        };
        assert!(bad_tax.validate().is_err());

        let bad_currency = RestaurantSettings {
            currency: "usd".into(),
            ..RestaurantSettings::default()
        };
        assert!(bad_currency.validate().is_err());
    }
}
