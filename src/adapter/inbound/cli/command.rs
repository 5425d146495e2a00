//! Command-line interface definitions.
//!
//! Defines the CLI structure for the area51 binary using `clap`: serving the
//! API, applying migrations, provisioning the first admin and inspecting
//! configuration.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Restaurant ordering backend: storefront, checkout and admin dashboard API
#[derive(Parser, Debug)]
#[command(name = "area51")]
#[command(version, about)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = "config.toml")]
    pub config: PathBuf,

    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API (migrates the database first)
    Serve(ServeArgs),

    /// Apply pending database migrations and exit
    Migrate,

    /// Create an admin account, or reset an existing one
    CreateAdmin(CreateAdminArgs),

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(clap::Args, Debug, Default)]
pub struct ServeArgs {
    /// Override `server.host`
    #[arg(long)]
    pub host: Option<String>,

    /// Override `server.port`
    #[arg(long)]
    pub port: Option<u16>,
}

#[derive(clap::Args, Debug)]
pub struct CreateAdminArgs {
    #[arg(long)]
    pub email: String,

    /// Display name
    #[arg(long, default_value = "Administrator")]
    pub name: String,

    #[arg(long)]
    pub password: String,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the effective configuration (secrets hidden)
    Show,
    /// Check the configuration and exit non-zero if it is invalid
    Validate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_name() {
        assert_eq!(Cli::command().get_name(), "area51");
    }

    #[test]
    fn test_parse_serve_defaults() {
        let cli = Cli::try_parse_from(["area51", "serve"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("config.toml"));
        assert!(matches!(cli.color, ColorChoice::Auto));
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        assert!(args.host.is_none());
        assert!(args.port.is_none());
    }

    #[test]
    fn test_parse_serve_overrides() {
        let cli =
            Cli::try_parse_from(["area51", "serve", "--host", "0.0.0.0", "--port", "3000"]).unwrap();
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.host.as_deref(), Some("0.0.0.0"));
        assert_eq!(args.port, Some(3000));
    }

    #[test]
    fn test_config_flag_is_global() {
        let cli = Cli::try_parse_from(["area51", "migrate", "-c", "/etc/area51.toml"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("/etc/area51.toml"));
        assert!(matches!(cli.command, Commands::Migrate));
    }

    #[test]
    fn test_parse_create_admin() {
        let cli = Cli::try_parse_from([
            "area51",
            "create-admin",
            "--email",
            "chef@area51.test",
            "--password",
            "s3cret",
        ])
        .unwrap();
        let Commands::CreateAdmin(args) = cli.command else {
            panic!("expected create-admin");
        };
        assert_eq!(args.email, "chef@area51.test");
        assert_eq!(args.name, "Administrator");
    }

    #[test]
    fn test_create_admin_requires_password() {
        assert!(Cli::try_parse_from(["area51", "create-admin", "--email", "a@b.test"]).is_err());
    }

    #[test]
    fn test_parse_config_subcommands() {
        let cli = Cli::try_parse_from(["area51", "--json", "config", "validate"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Config(ConfigCommand::Validate)));

        let cli = Cli::try_parse_from(["area51", "-q", "config", "show"]).unwrap();
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Config(ConfigCommand::Show)));
    }
}
