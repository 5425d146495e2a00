//! Handler for the `create-admin` command.

use std::path::Path;

use crate::adapter::inbound::cli::command::CreateAdminArgs;
use crate::adapter::inbound::cli::{operator, output};
use crate::error::Result;
use crate::port::inbound::operator::account::AdminAccountRequest;
use crate::port::inbound::operator::port::OperatorPort;

pub async fn execute(
    service: &dyn OperatorPort,
    config: &Path,
    args: &CreateAdminArgs,
) -> Result<()> {
    let request = AdminAccountRequest {
        config_toml: operator::read_config_toml(config)?,
        email: args.email.clone(),
        name: args.name.clone(),
        password: args.password.clone(),
    };
    let account = service.create_admin(request).await?;

    output::section("Admin Account");
    output::success("Admin account ready");
    output::field("Id", &account.id);
    output::field("Email", &account.email);
    output::field("Name", &account.name);
    output::field("Role", &account.role);
    output::note("Sign in with POST /api/auth/login");
    Ok(())
}
