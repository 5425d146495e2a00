//! Handler for the `migrate` command.

use std::path::Path;

use crate::adapter::inbound::cli::{operator, output};
use crate::error::Result;
use crate::port::inbound::operator::port::OperatorPort;

pub fn execute(service: &dyn OperatorPort, config: &Path) -> Result<()> {
    let report = service.migrate(&operator::read_config_toml(config)?)?;

    output::section("Database");
    if report.applied == 0 {
        output::success("Schema is up to date");
    } else {
        output::success(&format!("Applied {} migration(s)", report.applied));
    }
    output::field("Path", &report.database_path);
    Ok(())
}
