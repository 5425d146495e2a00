//! Dashboard sign-in.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::session::{Principal, SessionSigner};
use crate::domain::error::DomainError;
use crate::domain::id::AdminUserId;
use crate::domain::staff::{AdminProfile, AdminUser};
use crate::domain::text::non_blank;
use crate::error::{AuthError, Result};
use crate::port::outbound::credential::PasswordHasher;
use crate::port::outbound::store::{AdminUserStore, RoleStore};

/// Email and password as posted by a login form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Credentials {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl Credentials {
    pub(crate) fn require(self) -> Result<(String, String)> {
        match (non_blank(self.email), self.password.filter(|p| !p.is_empty())) {
            (Some(email), Some(password)) => Ok((email, password)),
            _ => Err(DomainError::Required("Email and password are required").into()),
        }
    }
}

/// A successful dashboard login.
#[derive(Debug, Clone, Serialize)]
pub struct AdminLogin {
    pub token: String,
    pub user: AdminProfile,
}

pub struct AdminAuthService {
    users: Arc<dyn AdminUserStore>,
    roles: Arc<dyn RoleStore>,
    hasher: Arc<dyn PasswordHasher>,
    signer: SessionSigner,
}

impl AdminAuthService {
    pub fn new(
        users: Arc<dyn AdminUserStore>,
        roles: Arc<dyn RoleStore>,
        hasher: Arc<dyn PasswordHasher>,
        signer: SessionSigner,
    ) -> Self {
        Self {
            users,
            roles,
            hasher,
            signer,
        }
    }

    /// Check credentials and open a session.
    ///
    /// Unknown emails and wrong passwords fail the same way.
    ///
    /// # Errors
    /// Returns a validation error for missing fields,
    /// [`AuthError::InvalidCredentials`] or [`AuthError::AccountDisabled`].
    pub async fn login(&self, credentials: Credentials) -> Result<AdminLogin> {
        let (email, password) = credentials.require()?;

        let Some(user) = self.users.find_by_email(&email).await? else {
            warn!(email = %email, "login for unknown admin");
            return Err(AuthError::InvalidCredentials.into());
        };
        if !self.hasher.verify(&password, &user.password_hash).await? {
            warn!(user_id = %user.id, "admin login with wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }
        if !user.is_active {
            warn!(user_id = %user.id, "login for disabled admin");
            return Err(AuthError::AccountDisabled.into());
        }

        let token = self
            .signer
            .issue(Principal::Admin, user.id.as_str(), &user.email, Utc::now())?;
        let profile = self.profile(&user).await?;
        info!(user_id = %user.id, "admin signed in");
        Ok(AdminLogin {
            token,
            user: profile,
        })
    }

    /// Resolve a bearer token to the active admin it was issued for.
    ///
    /// # Errors
    /// Returns an [`AuthError`] if the token is invalid or the account is
    /// gone or disabled.
    pub async fn authenticate(&self, token: &str) -> Result<AdminProfile> {
        let claims = self.signer.verify(token, Principal::Admin, Utc::now())?;
        let user = self
            .users
            .get(&AdminUserId::from(claims.sub))
            .await?
            .ok_or(AuthError::Unauthorized)?;
        if !user.is_active {
            return Err(AuthError::AccountDisabled.into());
        }
        self.profile(&user).await
    }

    async fn profile(&self, user: &AdminUser) -> Result<AdminProfile> {
        let role = match &user.role_id {
            Some(id) => self.roles.get(id).await?,
            None => None,
        };
        Ok(AdminProfile::new(user, role))
    }
}
