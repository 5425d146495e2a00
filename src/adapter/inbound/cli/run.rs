//! Dispatch of parsed CLI commands.

use crate::adapter::inbound::cli::command::{Cli, ColorChoice, Commands, ConfigCommand};
use crate::adapter::inbound::cli::output::{self, OutputConfig};
use crate::adapter::inbound::cli::{admin, config, migrate, serve};
use crate::error::Result;
use crate::port::inbound::operator::port::OperatorPort;

/// Apply global flags and run the selected command against `service`.
pub async fn execute(cli: Cli, service: &dyn OperatorPort) -> Result<()> {
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }
    output::configure(OutputConfig::new(cli.json, cli.quiet));

    match &cli.command {
        Commands::Serve(args) => serve::execute(service, &cli.config, args).await,
        Commands::Migrate => migrate::execute(service, &cli.config),
        Commands::CreateAdmin(args) => admin::execute(service, &cli.config, args).await,
        Commands::Config(ConfigCommand::Show) => config::execute_show(service, &cli.config),
        Commands::Config(ConfigCommand::Validate) => {
            config::execute_validate(service, &cli.config)
        }
    }
}
