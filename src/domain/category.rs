//! Menu categories.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::id::CategoryId;
use super::text::non_blank;

/// Which half of the menu a category belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    #[default]
    Food,
    Drinks,
}

impl CategoryKind {
    /// Stable name used in storage and JSON.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Drinks => "drinks",
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "food" => Ok(Self::Food),
            "drinks" => Ok(Self::Drinks),
            other => Err(DomainError::UnknownCategoryKind(other.to_string())),
        }
    }
}

/// A menu category such as "Burgers" or "Cocktails".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: CategoryKind,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Category form. The same form is used to create and to replace a category;
/// omitted fields fall back to their defaults in both cases.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

struct CategoryFields {
    name: String,
    description: Option<String>,
    kind: CategoryKind,
    sort_order: i32,
    is_active: bool,
}

impl CategoryDraft {
    fn resolve(self) -> Result<CategoryFields, DomainError> {
        let name = non_blank(self.name).ok_or(DomainError::Required("Name is required"))?;
        let kind = match non_blank(self.kind) {
            Some(raw) => raw.parse()?,
            None => CategoryKind::default(),
        };
        Ok(CategoryFields {
            name,
            description: non_blank(self.description),
            kind,
            sort_order: self.sort_order.unwrap_or(0),
            is_active: self.is_active.unwrap_or(true),
        })
    }

    /// Build a new category.
    ///
    /// # Errors
    /// Returns `Name is required` for a blank name, or an unknown-type error.
    pub fn into_category(self, now: DateTime<Utc>) -> Result<Category, DomainError> {
        let fields = self.resolve()?;
        Ok(Category {
            id: CategoryId::new(),
            name: fields.name,
            description: fields.description,
            kind: fields.kind,
            sort_order: fields.sort_order,
            is_active: fields.is_active,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace every editable field of `category`.
    ///
    /// # Errors
    /// Same as [`CategoryDraft::into_category`].
    pub fn apply(self, category: &mut Category, now: DateTime<Utc>) -> Result<(), DomainError> {
        let fields = self.resolve()?;
        category.name = fields.name;
        category.description = fields.description;
        category.kind = fields.kind;
        category.sort_order = fields.sort_order;
        category.is_active = fields.is_active;
        category.updated_at = now;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_is_rejected() {
        let draft = CategoryDraft {
            name: Some("  ".into()),
            ..Default::default()
        };
        assert_eq!(
            draft.into_category(Utc::now()).unwrap_err(),
            DomainError::Required("Name is required")
        );
    }

    #[test]
    fn defaults_apply_on_create() {
        let category = CategoryDraft {
            name: Some("Burgers".into()),
            description: Some(String::new()),
            ..Default::default()
        }
        .into_category(Utc::now())
        .unwrap();

        assert_eq!(category.kind, CategoryKind::Food);
        assert_eq!(category.sort_order, 0);
        assert!(category.is_active);
        assert!(category.description.is_none());
    }

    #[test]
    fn update_resets_omitted_fields_to_defaults() {
        let mut category = CategoryDraft {
            name: Some("Cocktails".into()),
            kind: Some("drinks".into()),
            sort_order: Some(4),
            is_active: Some(false),
            ..Default::default()
        }
        .into_category(Utc::now())
        .unwrap();

        CategoryDraft {
            name: Some("Mocktails".into()),
            ..Default::default()
        }
        .apply(&mut category, Utc::now())
        .unwrap();

        assert_eq!(category.name, "Mocktails");
        assert_eq!(category.kind, CategoryKind::Food);
        assert_eq!(category.sort_order, 0);
        assert!(category.is_active);
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let draft = CategoryDraft {
            name: Some("Desserts".into()),
            kind: Some("sweets".into()),
            ..Default::default()
        };
        assert!(matches!(
            draft.into_category(Utc::now()),
            Err(DomainError::UnknownCategoryKind(_))
        ));
    }

    #[test]
    fn kind_serializes_under_type_key() {
        let category = CategoryDraft {
            name: Some("Beer".into()),
            kind: Some("DRINKS".into()),
            ..Default::default()
        }
        .into_category(Utc::now())
        .unwrap();
        let json = serde_json::to_value(&category).unwrap();
        assert_eq!(json["type"], "drinks");
    }
}
