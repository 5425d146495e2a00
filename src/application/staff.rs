//! Dashboard accounts and roles.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::domain::error::DomainError;
use crate::domain::id::AdminUserId;
use crate::domain::staff::{
    AdminUser, AdminUserDraft, AdminUserListing, AdminUserUpdate, Role, ADMIN_ROLE,
};
use crate::domain::text::non_blank;
use crate::error::{Error, Result};
use crate::port::outbound::credential::PasswordHasher;
use crate::port::outbound::store::{AdminUserStore, RoleStore};

pub(crate) const EMAIL_EXISTS: &str = "Email already exists";

pub struct StaffService {
    users: Arc<dyn AdminUserStore>,
    roles: Arc<dyn RoleStore>,
    hasher: Arc<dyn PasswordHasher>,
}

impl StaffService {
    pub fn new(
        users: Arc<dyn AdminUserStore>,
        roles: Arc<dyn RoleStore>,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            users,
            roles,
            hasher,
        }
    }

    pub async fn list_users(&self) -> Result<Vec<AdminUserListing>> {
        self.users.list().await
    }

    pub async fn list_roles(&self) -> Result<Vec<Role>> {
        self.roles.list().await
    }

    /// # Errors
    /// Returns `Missing required fields` or `Email already exists`.
    pub async fn create_user(&self, draft: AdminUserDraft) -> Result<AdminUser> {
        let draft = draft.validate()?;
        if self.users.find_by_email(&draft.email).await?.is_some() {
            return Err(Error::Conflict(EMAIL_EXISTS.into()));
        }

        let now = Utc::now();
        let user = AdminUser {
            id: AdminUserId::new(),
            email: draft.email,
            password_hash: self.hasher.hash(&draft.password).await?,
            name: draft.name,
            role_id: draft.role_id,
            is_active: draft.is_active,
            created_at: now,
            updated_at: now,
        };
        self.users.insert(&user).await?;
        info!(user_id = %user.id, email = %user.email, "admin user created");
        Ok(user)
    }

    /// Apply an edit form. The password is re-hashed only when supplied.
    pub async fn update_user(&self, update: AdminUserUpdate) -> Result<AdminUser> {
        let id = update.target()?;
        let mut user = self.user(&id).await?;

        if let Some(email) = non_blank(update.email.clone()) {
            if let Some(other) = self.users.find_by_email(&email).await? {
                if other.id != user.id {
                    return Err(Error::Conflict(EMAIL_EXISTS.into()));
                }
            }
        }

        update.apply(&mut user, Utc::now());
        if let Some(password) = update.new_password() {
            user.password_hash = self.hasher.hash(password).await?;
        }
        self.users.update(&user).await?;
        info!(user_id = %user.id, "admin user updated");
        Ok(user)
    }

    pub async fn toggle_user(&self, id: &AdminUserId) -> Result<AdminUser> {
        let mut user = self.user(id).await?;
        user.is_active = !user.is_active;
        user.updated_at = Utc::now();
        self.users.update(&user).await?;
        Ok(user)
    }

    pub async fn delete_user(&self, id: Option<String>) -> Result<()> {
        let id = non_blank(id)
            .map(AdminUserId::from)
            .ok_or(DomainError::Required("User ID is required"))?;
        if !self.users.delete(&id).await? {
            return Err(Error::not_found("user", &id));
        }
        info!(user_id = %id, "admin user deleted");
        Ok(())
    }

    /// Create or refresh an active account holding the `admin` role,
    /// creating the role first if needed.
    pub async fn ensure_admin(&self, email: &str, name: &str, password: &str) -> Result<AdminUser> {
        let draft = AdminUserDraft {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
            name: Some(name.to_string()),
            role_id: None,
            is_active: Some(true),
        }
        .validate()?;

        let now = Utc::now();
        let role = match self.roles.find_by_name(ADMIN_ROLE).await? {
            Some(role) => role,
            None => {
                let role = Role::try_new(ADMIN_ROLE, Some("Full access".into()), now)?;
                self.roles.insert(&role).await?;
                info!(role_id = %role.id, "admin role created");
                role
            }
        };

        let hash = self.hasher.hash(&draft.password).await?;
        if let Some(mut user) = self.users.find_by_email(&draft.email).await? {
            user.name = draft.name;
            user.password_hash = hash;
            user.role_id = Some(role.id);
            user.is_active = true;
            user.updated_at = now;
            self.users.update(&user).await?;
            info!(user_id = %user.id, "admin account refreshed");
            return Ok(user);
        }

        let user = AdminUser {
            id: AdminUserId::new(),
            email: draft.email,
            password_hash: hash,
            name: draft.name,
            role_id: Some(role.id),
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        self.users.insert(&user).await?;
        info!(user_id = %user.id, "admin account created");
        Ok(user)
    }

    async fn user(&self, id: &AdminUserId) -> Result<AdminUser> {
        self.users
            .get(id)
            .await?
            .ok_or_else(|| Error::not_found("user", id))
    }
}
