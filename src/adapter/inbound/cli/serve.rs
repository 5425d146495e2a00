//! Handler for the `serve` command.

use std::path::Path;

use crate::adapter::inbound::cli::command::ServeArgs;
use crate::adapter::inbound::cli::{operator, output};
use crate::error::Result;
use crate::port::inbound::operator::port::OperatorPort;
use crate::port::inbound::operator::runtime::ServeRequest;

/// Print the resolved startup values, then serve until interrupted.
pub async fn execute(service: &dyn OperatorPort, config: &Path, args: &ServeArgs) -> Result<()> {
    let request = ServeRequest {
        config_toml: operator::read_config_toml(config)?,
        host: args.host.clone(),
        port: args.port,
    };

    let startup = service.prepare_serve(&request)?;
    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Listen", &startup.listen);
    output::field("Database", &startup.database_path);
    output::field("Media", &startup.media_root);

    service.execute_serve(request).await
}
