//! Admin account provisioning for operator-facing adapters.

use async_trait::async_trait;

use crate::error::Result;

#[derive(Debug, Clone)]
pub struct AdminAccountRequest {
    pub config_toml: String,
    pub email: String,
    pub name: String,
    pub password: String,
}

/// The provisioned account, without its password hash.
#[derive(Debug, Clone)]
pub struct AdminAccountView {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
}

#[async_trait]
pub trait AccountOperator: Send + Sync {
    /// Create the admin role when missing, then create or reset the account.
    async fn create_admin(&self, request: AdminAccountRequest) -> Result<AdminAccountView>;
}
