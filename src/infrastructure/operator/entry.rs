//! Concrete operator backing the CLI.

use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Stateless operator; every call parses the TOML it is given.
#[derive(Debug, Default, Clone, Copy)]
pub struct Operator;

impl Operator {
    pub(super) fn load_config(config_toml: &str) -> Result<Config> {
        Config::parse_toml(config_toml)
    }
}
