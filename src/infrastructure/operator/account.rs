//! Account operator implementation.

use async_trait::async_trait;

use crate::domain::staff::ADMIN_ROLE;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::port::inbound::operator::account::{
    AccountOperator, AdminAccountRequest, AdminAccountView,
};

use super::entry::Operator;

#[async_trait]
impl AccountOperator for Operator {
    async fn create_admin(&self, request: AdminAccountRequest) -> Result<AdminAccountView> {
        let config = Self::load_config(&request.config_toml)?;
        config.init_logging();

        let pool = bootstrap::open_database(&config)?;
        let services = bootstrap::build_services(&config, &pool);
        let user = services
            .staff
            .ensure_admin(&request.email, &request.name, &request.password)
            .await?;

        Ok(AdminAccountView {
            id: user.id.to_string(),
            email: user.email,
            name: user.name,
            role: ADMIN_ROLE.to_string(),
        })
    }
}
