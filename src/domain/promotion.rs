//! Promotions shown on the storefront offers page.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::id::{MenuItemId, PromotionId, PromotionItemId};
use super::money::Money;
use super::text::{contains_ignore_case, non_blank};

/// How a promotion's `value` is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromotionKind {
    /// `value` is a percentage of the order.
    #[default]
    Percentage,
    /// `value` is a fixed amount off.
    Fixed,
    /// Buy one, get one.
    Bogo,
}

impl PromotionKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Percentage => "percentage",
            Self::Fixed => "fixed",
            Self::Bogo => "bogo",
        }
    }
}

impl fmt::Display for PromotionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PromotionKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "percentage" => Ok(Self::Percentage),
            "fixed" => Ok(Self::Fixed),
            "bogo" => Ok(Self::Bogo),
            other => Err(DomainError::UnknownPromotionKind(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Promotion {
    pub id: PromotionId,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: PromotionKind,
    pub value: Decimal,
    pub min_order_amount: Money,
    pub is_active: bool,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Promotion {
    /// A promotion without an end date never expires.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.end_date.is_some_and(|end| end < now)
    }

    /// Active, already started and not yet expired.
    #[must_use]
    pub fn is_running(&self, now: DateTime<Utc>) -> bool {
        self.is_active
            && self.start_date.map_or(true, |start| start <= now)
            && !self.is_expired(now)
    }

    /// Dashboard search over name and description (lowercased needle).
    #[must_use]
    pub fn matches(&self, needle_lower: &str) -> bool {
        contains_ignore_case(&self.name, needle_lower)
            || self
                .description
                .as_deref()
                .is_some_and(|d| contains_ignore_case(d, needle_lower))
    }
}

/// Links a promotion to a menu item it applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromotionItem {
    pub id: PromotionItemId,
    pub promotion_id: PromotionId,
    pub menu_item_id: MenuItemId,
    pub created_at: DateTime<Utc>,
}

/// A promotion with the menu items it covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromotionListing {
    #[serde(flatten)]
    pub promotion: Promotion,
    pub promotion_items: Vec<PromotionItem>,
}

/// Promotion form, used for both create and replace.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PromotionDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub value: Option<Decimal>,
    pub min_order_amount: Option<Decimal>,
    pub is_active: Option<bool>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

struct PromotionFields {
    name: String,
    description: Option<String>,
    kind: PromotionKind,
    value: Decimal,
    min_order_amount: Money,
    is_active: bool,
    start_date: Option<DateTime<Utc>>,
    end_date: Option<DateTime<Utc>>,
}

impl PromotionDraft {
    fn resolve(self) -> Result<PromotionFields, DomainError> {
        let name = non_blank(self.name).ok_or(DomainError::Required("Name is required"))?;
        let kind = match non_blank(self.kind) {
            Some(raw) => raw.parse()?,
            None => PromotionKind::default(),
        };
        let value = self.value.unwrap_or(Decimal::ZERO);
        if value < Decimal::ZERO {
            return Err(DomainError::InvalidValue {
                field: "value",
                reason: "must not be negative".to_string(),
            });
        }
        if kind == PromotionKind::Percentage && value > Decimal::ONE_HUNDRED {
            return Err(DomainError::InvalidValue {
                field: "value",
                reason: "a percentage cannot exceed 100".to_string(),
            });
        }
        let min_order_amount = self.min_order_amount.unwrap_or(Decimal::ZERO);
        if min_order_amount < Decimal::ZERO {
            return Err(DomainError::InvalidValue {
                field: "min_order_amount",
                reason: "must not be negative".to_string(),
            });
        }
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if end < start {
                return Err(DomainError::InvalidValue {
                    field: "end_date",
                    reason: "must not be before start_date".to_string(),
                });
            }
        }

        Ok(PromotionFields {
            name,
            description: non_blank(self.description),
            kind,
            value,
            min_order_amount,
            is_active: self.is_active.unwrap_or(true),
            start_date: self.start_date,
            end_date: self.end_date,
        })
    }

    /// Build a new promotion.
    ///
    /// # Errors
    /// Returns a [`DomainError`] for a blank name or out-of-range values.
    pub fn into_promotion(self, now: DateTime<Utc>) -> Result<Promotion, DomainError> {
        let f = self.resolve()?;
        Ok(Promotion {
            id: PromotionId::new(),
            name: f.name,
            description: f.description,
            kind: f.kind,
            value: f.value,
            min_order_amount: f.min_order_amount,
            is_active: f.is_active,
            start_date: f.start_date,
            end_date: f.end_date,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace every editable field of `promotion`.
    ///
    /// # Errors
    /// Same as [`PromotionDraft::into_promotion`].
    pub fn apply(self, promotion: &mut Promotion, now: DateTime<Utc>) -> Result<(), DomainError> {
        let f = self.resolve()?;
        promotion.name = f.name;
        promotion.description = f.description;
        promotion.kind = f.kind;
        promotion.value = f.value;
        promotion.min_order_amount = f.min_order_amount;
        promotion.is_active = f.is_active;
        promotion.start_date = f.start_date;
        promotion.end_date = f.end_date;
        promotion.updated_at = now;
        Ok(())
    }
}

/// Body of the "set linked items" request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PromotionItemsChange {
    #[serde(default)]
    pub menu_item_ids: Vec<MenuItemId>,
}
