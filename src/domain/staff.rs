//! Dashboard accounts and their roles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::id::{AdminUserId, RoleId};
use super::text::non_blank;

/// Name of the role granted to the bootstrap administrator.
pub const ADMIN_ROLE: &str = "admin";

/// A named permission group for dashboard accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: RoleId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Role {
    /// Create a new role.
    ///
    /// # Errors
    /// Returns [`DomainError::Required`] if `name` is blank.
    pub fn try_new(
        name: impl Into<String>,
        description: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(DomainError::Required("Name is required"));
        }
        Ok(Self {
            id: RoleId::new(),
            name,
            description: non_blank(description),
            created_at: now,
        })
    }
}

/// A staff account that can sign in to the dashboard.
///
/// The password hash is never serialized into API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminUser {
    pub id: AdminUserId,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub name: String,
    pub role_id: Option<RoleId>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An admin user joined with its role, as listed on the users screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminUserListing {
    #[serde(flatten)]
    pub user: AdminUser,
    pub role: Option<Role>,
}

/// The identity attached to an authenticated dashboard session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminProfile {
    pub id: AdminUserId,
    pub email: String,
    pub name: String,
    pub role: Option<Role>,
}

impl AdminProfile {
    #[must_use]
    pub fn new(user: &AdminUser, role: Option<Role>) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            role,
        }
    }
}

/// Create-user form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminUserDraft {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub role_id: Option<String>,
    pub is_active: Option<bool>,
}

/// A create-user form that passed validation. The password is still plain.
#[derive(Debug, Clone)]
pub struct ValidAdminUserDraft {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role_id: Option<RoleId>,
    pub is_active: bool,
}

impl AdminUserDraft {
    /// Check that email, password and name are present.
    ///
    /// # Errors
    /// Returns `Missing required fields` when any of them is blank.
    pub fn validate(self) -> Result<ValidAdminUserDraft, DomainError> {
        let (Some(email), Some(password), Some(name)) = (
            non_blank(self.email),
            self.password.filter(|p| !p.is_empty()),
            non_blank(self.name),
        ) else {
            return Err(DomainError::Required("Missing required fields"));
        };

        Ok(ValidAdminUserDraft {
            email,
            password,
            name,
            role_id: non_blank(self.role_id).map(RoleId::from),
            is_active: self.is_active.unwrap_or(true),
        })
    }
}

/// Edit-user form. `id` travels in the body, as the dashboard sends it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminUserUpdate {
    pub id: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub role_id: Option<String>,
    pub is_active: Option<bool>,
}

impl AdminUserUpdate {
    /// The target user id.
    ///
    /// # Errors
    /// Returns `User ID is required` when absent.
    pub fn target(&self) -> Result<AdminUserId, DomainError> {
        non_blank(self.id.clone())
            .map(AdminUserId::from)
            .ok_or(DomainError::Required("User ID is required"))
    }

    /// The new plain password, if one was supplied.
    #[must_use]
    pub fn new_password(&self) -> Option<&str> {
        self.password.as_deref().filter(|p| !p.is_empty())
    }

    /// Apply the form to `user`. The password hash is handled by the caller.
    ///
    /// Email, name and the active flag change only when supplied; the role is
    /// always replaced, so an omitted role clears it.
    pub fn apply(&self, user: &mut AdminUser, now: DateTime<Utc>) {
        if let Some(email) = non_blank(self.email.clone()) {
            user.email = email;
        }
        if let Some(name) = non_blank(self.name.clone()) {
            user.name = name;
        }
        if let Some(active) = self.is_active {
            user.is_active = active;
        }
        user.role_id = non_blank(self.role_id.clone()).map(RoleId::from);
        user.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> AdminUser {
        let now = Utc::now();
        AdminUser {
            id: AdminUserId::from("u1"),
            email: "old@example.com".into(),
            password_hash: "hash".into(),
            name: "Old".into(),
            role_id: Some(RoleId::from("r1")),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn draft_requires_email_password_and_name() {
        let draft = AdminUserDraft {
            email: Some("a@b.c".into()),
            password: None,
            name: Some("A".into()),
            ..Default::default()
        };
        assert_eq!(
            draft.validate().unwrap_err(),
            DomainError::Required("Missing required fields")
        );
    }

    #[test]
    fn draft_defaults_to_active_without_role() {
        let draft = AdminUserDraft {
            email: Some(" chef@area51.test ".into()),
            password: Some("secret".into()),
            name: Some("Chef".into()),
            role_id: Some(String::new()),
            is_active: None,
        };
        let valid = draft.validate().unwrap();
        assert_eq!(valid.email, "chef@area51.test");
        assert!(valid.is_active);
        assert!(valid.role_id.is_none());
    }

    #[test]
    fn update_requires_id() {
        let update = AdminUserUpdate::default();
        assert_eq!(
            update.target().unwrap_err(),
            DomainError::Required("User ID is required")
        );
    }

    #[test]
    fn update_clears_role_when_omitted_and_keeps_other_fields() {
        let mut user = user();
        let update = AdminUserUpdate {
            id: Some("u1".into()),
            name: Some("New".into()),
            ..Default::default()
        };
        update.apply(&mut user, Utc::now());

        assert_eq!(user.name, "New");
        assert_eq!(user.email, "old@example.com");
        assert!(user.role_id.is_none());
        assert!(user.is_active);
        assert!(update.new_password().is_none());
    }

    #[test]
    fn password_hash_is_not_serialized() {
        let json = serde_json::to_value(user()).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "old@example.com");
    }

    #[test]
    fn role_requires_name() {
        assert!(Role::try_new("  ", None, Utc::now()).is_err());
        let role = Role::try_new("admin", Some(String::new()), Utc::now()).unwrap();
        assert_eq!(role.name, "admin");
        assert!(role.description.is_none());
    }
}
